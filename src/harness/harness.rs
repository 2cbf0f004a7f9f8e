use super::*;
use crate::*;

/// Plays every ground truth with the oracle and a candidate, side by side.
///
/// Each strategy gets its own contract, re-initialized before every trial,
/// so no state leaks between runs or between the two strategies.
pub struct Harness {
    items: Vec<Item>,
    verbosity: Verbosity,
    reference: Contract,
    candidate: Contract,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(Item::universe())
    }
}

impl Harness {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            verbosity: Verbosity::Silent,
            reference: Contract::default(),
            candidate: Contract::default(),
        }
    }
    /// Log every weighing through the `log` facade.
    pub fn verbose(self) -> Self {
        self.observed(
            Box::new(Logger::tagged("oracle")),
            Box::new(Logger::tagged("candidate")),
        )
    }
    /// Report every weighing to the given observers.
    pub fn observed(mut self, reference: Box<dyn Observer>, candidate: Box<dyn Observer>) -> Self {
        self.verbosity = Verbosity::Logging;
        self.reference = Contract::observed(reference);
        self.candidate = Contract::observed(candidate);
        self
    }
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Judge `strategy` over every trial.
    ///
    /// Candidate misbehavior is recorded in the report. An error is returned
    /// only when the setup is invalid or the oracle itself misbehaves.
    pub fn evaluate<S>(&mut self, strategy: &mut S) -> Result<Report, ContractError>
    where
        S: Strategy + ?Sized,
    {
        if self.items.len() != BALLS {
            return Err(ContractError::InvalidSetup(format!(
                "expected {} items, got {}",
                BALLS,
                self.items.len()
            )));
        }
        let trials = Trial::all(&self.items);
        let mut rounds = Vec::with_capacity(trials.len());
        for trial in trials {
            log::debug!("trial {}", trial);
            let reference = self.reference(&trial)?;
            rounds.push(self.challenge(trial, reference, strategy));
        }
        let report = Report::new(strategy.name(), rounds);
        log::debug!(
            "{} worst case {} against {}",
            report.strategy(),
            report.candidate(),
            report.reference()
        );
        Ok(report)
    }

    fn reference(&mut self, trial: &Trial) -> Result<Uses, ContractError> {
        let truth = trial.truth();
        self.reference
            .initialize(&self.items, truth.clone(), self.verbosity)?;
        self.reference.play(&mut Oracle)?;
        if self.reference.status() != Status::Complete {
            return Err(ContractError::Inconsistent(format!(
                "oracle did not complete trial {}",
                trial
            )));
        }
        if self.reference.answer() != Some(truth.outlier()) {
            return Err(ContractError::Inconsistent(format!(
                "oracle answered {:?} for trial {}",
                self.reference.answer(),
                trial
            )));
        }
        Ok(self.reference.uses())
    }

    fn challenge<S>(&mut self, trial: Trial, reference: Uses, strategy: &mut S) -> Round
    where
        S: Strategy + ?Sized,
    {
        let played = self
            .candidate
            .initialize(&self.items, trial.truth().clone(), self.verbosity)
            .and_then(|_| self.candidate.play(strategy));
        let error = match played {
            Err(e) => Some(e.to_string()),
            Ok(_) if self.candidate.status() != Status::Complete => {
                Some(String::from("strategy returned without submitting an answer"))
            }
            Ok(_) => None,
        };
        if let Some(ref e) = error {
            log::warn!("{} failed trial {}: {}", strategy.name(), trial, e);
        }
        Round::new(
            trial,
            reference,
            self.candidate.uses(),
            self.candidate.answer().cloned(),
            error,
        )
    }
}
