use crate::*;
use serde::Serialize;

/// One entry of a run's history: what was weighed and what the balance showed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    weighing: Weighing,
    outcome: Outcome,
}

impl Record {
    pub fn new(weighing: Weighing, outcome: Outcome) -> Self {
        Self { weighing, outcome }
    }
    pub fn weighing(&self) -> &Weighing {
        &self.weighing
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.weighing.render(self.outcome.symbol()))
    }
}
