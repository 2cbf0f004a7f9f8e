use crate::*;
use serde::Serialize;

/// One ground truth to play, numbered in harness order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trial {
    index: usize,
    truth: Truth,
}

impl Trial {
    /// Every (outlier, weight) pair over `items`: trial `i` makes item `i / 2`
    /// the outlier, heavy for even `i` and light for odd `i`.
    pub fn all(items: &[Item]) -> Vec<Self> {
        (0..items.len() * 2)
            .map(|index| Self {
                index,
                truth: Truth::new(
                    items[index / 2].clone(),
                    match index % 2 {
                        0 => Weight::Heavy,
                        _ => Weight::Light,
                    },
                ),
            })
            .collect()
    }
    pub fn index(&self) -> usize {
        self.index
    }
    pub fn truth(&self) -> &Truth {
        &self.truth
    }
}

impl std::fmt::Display for Trial {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:<2} {}", self.index + 1, self.truth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    #[test]
    fn covers_every_truth_once() {
        let trials = Trial::all(&Item::universe());
        assert_eq!(trials.len(), TRIALS);
        let truths = trials.iter().map(Trial::truth).collect::<HashSet<_>>();
        assert_eq!(truths.len(), TRIALS);
    }
    #[test]
    fn alternates_heavy_then_light() {
        let trials = Trial::all(&Item::universe());
        assert_eq!(trials[0].truth(), &Truth::new(Item::from("1"), Weight::Heavy));
        assert_eq!(trials[1].truth(), &Truth::new(Item::from("1"), Weight::Light));
        assert_eq!(trials[23].truth(), &Truth::new(Item::from("12"), Weight::Light));
    }
}
