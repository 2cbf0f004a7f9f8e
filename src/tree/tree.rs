use super::*;
use crate::*;
use std::collections::HashSet;

use super::Branch::Child;
use super::Branch::Unreachable;

/// The optimal three-weighing decision tree for twelve items.
///
/// Positions below are 0-based into the universe. Each comment lists the
/// hypotheses still alive on arrival at that node (`H` heavy, `L` light).
/// Every weighing puts equal counts on both pans, and every path from the
/// root to a verdict uses exactly [`WEIGHINGS`] weighings.
static NODES: [Node; 36] = [
    // 00: anything
    Node::Weigh {
        left: &[0, 1, 2, 3],
        right: &[4, 5, 6, 7],
        next: [Child(1), Child(12), Child(24)],
    },
    // 01: 8..11 either way
    Node::Weigh {
        left: &[8],
        right: &[9],
        next: [Child(2), Child(6), Child(9)],
    },
    // 02: 10 or 11 either way; 9 is genuine
    Node::Weigh {
        left: &[9],
        right: &[10],
        next: [Child(3), Child(4), Child(5)],
    },
    Node::Verdict(11), // 03
    Node::Verdict(10), // 04: 10L
    Node::Verdict(10), // 05: 10H
    // 06: 8H or 9L
    Node::Weigh {
        left: &[8],
        right: &[10],
        next: [Child(7), Child(8), Unreachable],
    },
    Node::Verdict(9), // 07
    Node::Verdict(8), // 08
    // 09: 8L or 9H
    Node::Weigh {
        left: &[8],
        right: &[10],
        next: [Child(10), Unreachable, Child(11)],
    },
    Node::Verdict(9), // 10
    Node::Verdict(8), // 11
    // 12: 0..3 H or 4..7 L
    Node::Weigh {
        left: &[0, 1, 4],
        right: &[2, 3, 5],
        next: [Child(13), Child(16), Child(20)],
    },
    // 13: 6L or 7L
    Node::Weigh {
        left: &[6],
        right: &[0],
        next: [Child(14), Unreachable, Child(15)],
    },
    Node::Verdict(7), // 14
    Node::Verdict(6), // 15
    // 16: 0H, 1H or 5L
    Node::Weigh {
        left: &[0],
        right: &[1],
        next: [Child(17), Child(18), Child(19)],
    },
    Node::Verdict(5), // 17
    Node::Verdict(0), // 18
    Node::Verdict(1), // 19
    // 20: 2H, 3H or 4L
    Node::Weigh {
        left: &[2],
        right: &[3],
        next: [Child(21), Child(22), Child(23)],
    },
    Node::Verdict(4), // 21
    Node::Verdict(2), // 22
    Node::Verdict(3), // 23
    // 24: 0..3 L or 4..7 H
    Node::Weigh {
        left: &[0, 1, 4],
        right: &[2, 3, 5],
        next: [Child(25), Child(28), Child(32)],
    },
    // 25: 6H or 7H
    Node::Weigh {
        left: &[0],
        right: &[6],
        next: [Child(26), Unreachable, Child(27)],
    },
    Node::Verdict(7), // 26
    Node::Verdict(6), // 27
    // 28: 2L, 3L or 4H
    Node::Weigh {
        left: &[2],
        right: &[3],
        next: [Child(29), Child(30), Child(31)],
    },
    Node::Verdict(4), // 29
    Node::Verdict(3), // 30
    Node::Verdict(2), // 31
    // 32: 0L, 1L or 5H
    Node::Weigh {
        left: &[0],
        right: &[1],
        next: [Child(33), Child(34), Child(35)],
    },
    Node::Verdict(5), // 33
    Node::Verdict(1), // 34
    Node::Verdict(0), // 35
];

/// Read-only handle on the static arena.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tree;

impl Tree {
    pub const ROOT: usize = 0;

    pub fn nodes() -> &'static [Node] {
        &NODES
    }
    pub fn node(index: usize) -> Result<&'static Node, ContractError> {
        NODES
            .get(index)
            .ok_or_else(|| ContractError::Inconsistent(format!("no node at index {}", index)))
    }
    /// Follow `outcome` out of the node at `index`.
    pub fn child(index: usize, outcome: Outcome) -> Result<usize, ContractError> {
        match Self::node(index)?.next(outcome) {
            Some(Child(next)) => Ok(next),
            Some(Unreachable) => Err(ContractError::Inconsistent(format!(
                "outcome {} is unreachable at node {}",
                outcome, index
            ))),
            None => Err(ContractError::Inconsistent(format!(
                "node {} is a verdict and has no outcomes",
                index
            ))),
        }
    }

    /// Exhaustively check the tree against every ground truth.
    ///
    /// Walks all `TRIALS` truths over the standard universe and fails unless
    /// each path weighs equal counts on disjoint pans, takes exactly
    /// `WEIGHINGS` steps, never meets an `Unreachable` branch, and ends on
    /// the true outlier. Also fails if some `Child` branch is never taken.
    pub fn audit() -> Result<(), ContractError> {
        let items = Item::universe();
        let mut taken = HashSet::<(usize, Outcome)>::new();
        for outlier in items.iter() {
            for weight in Weight::ALL {
                let truth = Truth::new(outlier.clone(), weight);
                let mut cursor = Self::ROOT;
                let mut uses = 0;
                while let Node::Weigh { left, right, .. } = Self::node(cursor)? {
                    Self::inspect(cursor, left, right)?;
                    if uses == WEIGHINGS {
                        return Err(ContractError::Inconsistent(format!(
                            "{} needs more than {} weighings",
                            truth, WEIGHINGS
                        )));
                    }
                    let weighing = Weighing::new(
                        left.iter().map(|p| items[*p].clone()).collect(),
                        right.iter().map(|p| items[*p].clone()).collect(),
                    );
                    let outcome = Scale::resolve(&weighing, &truth);
                    taken.insert((cursor, outcome));
                    cursor = Self::child(cursor, outcome)?;
                    uses += 1;
                }
                let verdict = Self::node(cursor)?.verdict(&items);
                if verdict != Some(outlier) {
                    return Err(ContractError::Inconsistent(format!(
                        "node {} answers {:?} for {}",
                        cursor, verdict, truth
                    )));
                }
                if uses != WEIGHINGS {
                    return Err(ContractError::Inconsistent(format!(
                        "{} resolved in {} weighings",
                        truth, uses
                    )));
                }
            }
        }
        for (index, node) in NODES.iter().enumerate() {
            for outcome in Outcome::ALL {
                if let Some(Child(_)) = node.next(outcome) {
                    if !taken.contains(&(index, outcome)) {
                        return Err(ContractError::Inconsistent(format!(
                            "outcome {} at node {} is never taken",
                            outcome, index
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    fn inspect(index: usize, left: &[Position], right: &[Position]) -> Result<(), ContractError> {
        if left.len() != right.len() {
            return Err(ContractError::Inconsistent(format!(
                "node {} weighs {} against {} items",
                index,
                left.len(),
                right.len()
            )));
        }
        if let Some(p) = left.iter().find(|p| right.contains(p)) {
            return Err(ContractError::Inconsistent(format!(
                "node {} puts #{} on both pans",
                index, p
            )));
        }
        if let Some(p) = left.iter().chain(right).find(|p| **p >= BALLS) {
            return Err(ContractError::Inconsistent(format!(
                "node {} refers to #{} outside the universe",
                index, p
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audit_passes() {
        assert_eq!(Tree::audit(), Ok(()));
    }
    #[test]
    fn root_weighs_four_against_four() {
        let root = Tree::node(Tree::ROOT).unwrap();
        let weighing = root.weighing(&Item::universe()).unwrap();
        assert_eq!(weighing.to_string(), "[1, 2, 3, 4] vs [5, 6, 7, 8]");
    }
    #[test]
    fn children_stay_inside_arena() {
        for node in Tree::nodes() {
            for outcome in Outcome::ALL {
                if let Some(Branch::Child(i)) = node.next(outcome) {
                    assert!(i < Tree::nodes().len());
                    assert!(i > Tree::ROOT);
                }
            }
        }
    }
    #[test]
    fn every_node_but_root_has_one_parent() {
        let mut parents = vec![0; Tree::nodes().len()];
        for node in Tree::nodes() {
            for outcome in Outcome::ALL {
                if let Some(Branch::Child(i)) = node.next(outcome) {
                    parents[i] += 1;
                }
            }
        }
        assert_eq!(parents[Tree::ROOT], 0);
        assert!(parents.iter().skip(1).all(|n| *n == 1));
    }
    #[test]
    fn four_branches_are_unreachable() {
        let unreachable = Tree::nodes()
            .iter()
            .flat_map(|node| Outcome::ALL.map(|o| node.next(o)))
            .filter(|branch| *branch == Some(Branch::Unreachable))
            .count();
        assert_eq!(unreachable, 4);
    }
    #[test]
    fn unreachable_branch_is_an_error() {
        assert!(matches!(
            Tree::child(6, Outcome::TipRight),
            Err(ContractError::Inconsistent(_))
        ));
    }
    #[test]
    fn verdicts_have_no_outcomes() {
        let leaf = Tree::nodes().iter().position(Node::is_leaf).unwrap();
        assert!(matches!(
            Tree::child(leaf, Outcome::Balanced),
            Err(ContractError::Inconsistent(_))
        ));
    }
}
