use super::*;
use crate::*;

/// Reference strategy: walks the static [`Tree`] to a verdict.
///
/// Only valid for exactly twelve items. Always uses exactly three weighings,
/// which makes it the yardstick other strategies are measured against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Oracle;

impl Strategy for Oracle {
    fn name(&self) -> &'static str {
        "oracle"
    }
    fn run(&mut self, items: &[Item], balance: &mut Balance<'_>) -> Result<(), ContractError> {
        if items.len() != BALLS {
            return Err(ContractError::UnsupportedSize {
                expected: BALLS,
                actual: items.len(),
            });
        }
        let mut cursor = Tree::ROOT;
        loop {
            let node = Tree::node(cursor)?;
            if let Some(outlier) = node.verdict(items) {
                return balance.submit(outlier.clone());
            }
            let weighing = node.weighing(items).ok_or_else(|| {
                ContractError::Inconsistent(format!("node {} has neither verdict nor weighing", cursor))
            })?;
            let outcome = balance.weigh(weighing)?;
            log::trace!("node {:>2} {} -> {}", cursor, node, outcome);
            cursor = Tree::child(cursor, outcome)?;
        }
    }
}
