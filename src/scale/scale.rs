use super::*;

/// The balance itself.
///
/// Genuine items all weigh the same and the outlier differs by less than one
/// item's weight, so a pan holding more items always goes down. With equal
/// counts only the outlier can tip the balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scale;

impl Scale {
    /// Answer a weighing under the given ground truth. Pure and deterministic;
    /// assumes the weighing was already validated.
    pub fn resolve(weighing: &Weighing, truth: &Truth) -> Outcome {
        let l = weighing.left().len();
        let r = weighing.right().len();
        if l != r {
            return if r > l {
                Outcome::TipRight
            } else {
                Outcome::TipLeft
            };
        }
        let outlier = truth.outlier();
        match (
            weighing.right().contains(outlier),
            weighing.left().contains(outlier),
            truth.weight(),
        ) {
            (true, _, Weight::Heavy) => Outcome::TipRight,
            (true, _, Weight::Light) => Outcome::TipLeft,
            (_, true, Weight::Heavy) => Outcome::TipLeft,
            (_, true, Weight::Light) => Outcome::TipRight,
            (false, false, _) => Outcome::Balanced,
        }
    }
}
