use super::*;
use crate::*;

/// What a strategy is allowed to touch during a run.
///
/// Borrowed from a [`Contract`] for the duration of one run. It exposes the
/// two validated primitives and nothing else: no truth, no history, no status.
pub struct Balance<'a> {
    contract: &'a mut Contract,
}

impl<'a> From<&'a mut Contract> for Balance<'a> {
    fn from(contract: &'a mut Contract) -> Self {
        Self { contract }
    }
}

impl Balance<'_> {
    /// Use the scale once and learn which way it tipped.
    pub fn weigh(&mut self, weighing: Weighing) -> Result<Outcome, ContractError> {
        self.contract.weigh(weighing)
    }
    /// Name the outlier. Ends the run.
    pub fn submit(&mut self, item: Item) -> Result<(), ContractError> {
        self.contract.submit(item)
    }
}
