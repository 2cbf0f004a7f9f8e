use super::*;
use serde::Serialize;
use std::collections::HashSet;

/// One proposed use of the balance: a left pan and a right pan.
///
/// Construction does not validate. Legality (non-empty, no item placed twice, drawn from
/// the active universe) is checked by the contract when the weighing is made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Weighing {
    left: Vec<Item>,
    right: Vec<Item>,
}

impl Weighing {
    pub fn new(left: Vec<Item>, right: Vec<Item>) -> Self {
        Self { left, right }
    }
    pub fn left(&self) -> &[Item] {
        &self.left
    }
    pub fn right(&self) -> &[Item] {
        &self.right
    }
    /// Same items, pans exchanged.
    pub fn swap(&self) -> Self {
        Self::new(self.right.clone(), self.left.clone())
    }
    pub fn is_balanced_count(&self) -> bool {
        self.left.len() == self.right.len()
    }
    /// First item placed on both pans, if any.
    pub fn overlap(&self) -> Option<&Item> {
        self.left.iter().find(|item| self.right.contains(item))
    }
    /// First item placed more than once across both pans, if any.
    pub fn repeat(&self) -> Option<&Item> {
        let mut seen = HashSet::new();
        self.items().find(|item| !seen.insert(*item))
    }
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.left.iter().chain(self.right.iter())
    }
    /// Both pans joined by the given relation, e.g. `[1, 2] < [3, 4]`.
    pub fn render(&self, relation: &str) -> String {
        let join = |pan: &[Item]| {
            pan.iter()
                .map(Item::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        format!("[{}] {} [{}]", join(&self.left), relation, join(&self.right))
    }
}

impl From<(Vec<Item>, Vec<Item>)> for Weighing {
    fn from((left, right): (Vec<Item>, Vec<Item>)) -> Self {
        Self::new(left, right)
    }
}

impl std::fmt::Display for Weighing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.render("vs"))
    }
}
