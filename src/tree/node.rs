use super::*;
use crate::*;

/// A node of the decision tree.
///
/// Leaves carry a verdict; interior nodes carry the next weighing and one
/// branch per [`Outcome`], indexed by [`Outcome::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Node {
    Weigh {
        left: &'static [Position],
        right: &'static [Position],
        next: [Branch; OUTCOMES],
    },
    Verdict(Position),
}

impl Node {
    /// The outlier, if this node has already pinned it down.
    pub fn verdict<'a>(&self, items: &'a [Item]) -> Option<&'a Item> {
        match self {
            Self::Verdict(p) => items.get(*p),
            Self::Weigh { .. } => None,
        }
    }
    /// The weighing to propose next, if a verdict is not yet known.
    pub fn weighing(&self, items: &[Item]) -> Option<Weighing> {
        match self {
            Self::Verdict(_) => None,
            Self::Weigh { left, right, .. } => {
                let pick = |pan: &[Position]| -> Vec<Item> { pan.iter().map(|p| items[*p].clone()).collect() };
                Some(Weighing::new(pick(left), pick(right)))
            }
        }
    }
    /// Where `outcome` leads. `None` at leaves.
    pub fn next(&self, outcome: Outcome) -> Option<Branch> {
        match self {
            Self::Verdict(_) => None,
            Self::Weigh { next, .. } => Some(next[outcome.index()]),
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Verdict(_))
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Verdict(p) => write!(f, "=> #{}", p),
            Self::Weigh { left, right, .. } => write!(f, "{:?} vs {:?}", left, right),
        }
    }
}
