/// Where an outcome leads from a weighing node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Arena index of the next node.
    Child(usize),
    /// Ruled out by earlier outcomes. Reaching it is a tree defect.
    Unreachable,
}
