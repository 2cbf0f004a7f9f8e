use super::*;
use crate::*;
use serde::Serialize;

/// What happened in one trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    trial: Trial,
    reference: Uses,
    candidate: Uses,
    answer: Option<Item>,
    error: Option<String>,
}

impl Round {
    pub fn new(
        trial: Trial,
        reference: Uses,
        candidate: Uses,
        answer: Option<Item>,
        error: Option<String>,
    ) -> Self {
        Self {
            trial,
            reference,
            candidate,
            answer,
            error,
        }
    }
    pub fn trial(&self) -> &Trial {
        &self.trial
    }
    /// Weighings the oracle needed.
    pub fn reference(&self) -> Uses {
        self.reference
    }
    /// Weighings the candidate needed.
    pub fn candidate(&self) -> Uses {
        self.candidate
    }
    pub fn answer(&self) -> Option<&Item> {
        self.answer.as_ref()
    }
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
    pub fn is_correct(&self) -> bool {
        self.error.is_none() && self.answer() == Some(self.trial.truth().outlier())
    }
}

/// Outcome of evaluating one candidate over every trial.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    strategy: &'static str,
    reference: Uses,
    candidate: Uses,
    verdict: Verdict,
    rounds: Vec<Round>,
}

impl Report {
    pub fn new(strategy: &'static str, rounds: Vec<Round>) -> Self {
        let reference = rounds.iter().map(Round::reference).max().unwrap_or_default();
        let candidate = rounds.iter().map(Round::candidate).max().unwrap_or_default();
        Self {
            strategy,
            reference,
            candidate,
            verdict: Verdict::judge(reference, candidate),
            rounds,
        }
    }
    pub fn strategy(&self) -> &'static str {
        self.strategy
    }
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
    /// Worst case of the oracle.
    pub fn reference(&self) -> Uses {
        self.reference
    }
    /// Worst case of the candidate.
    pub fn candidate(&self) -> Uses {
        self.candidate
    }
    /// Rounds the candidate aborted with a contract violation.
    pub fn failed(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter().filter(|r| r.error.is_some())
    }
    /// Rounds the candidate finished with the wrong answer.
    pub fn wrong(&self) -> impl Iterator<Item = &Round> {
        self.rounds
            .iter()
            .filter(|r| r.error.is_none() && !r.is_correct())
    }
    /// Optimal, and correct on every trial. A report with no trials proves nothing.
    pub fn passed(&self) -> bool {
        !self.rounds.is_empty()
            && self.verdict.is_optimal()
            && self.rounds.iter().all(Round::is_correct)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        for round in self.failed() {
            writeln!(
                f,
                "{} {}",
                round.trial().to_string().red(),
                round.error().unwrap_or_default()
            )?;
        }
        for round in self.wrong() {
            let answer = round.answer().map(Item::to_string).unwrap_or_default();
            writeln!(f, "{} answered {}", round.trial().to_string().red(), answer)?;
        }
        writeln!(f, "{}: {}", self.strategy, self.verdict)?;
        match self.passed() {
            true => write!(f, "{}", "Your strategy is optimal!".green()),
            false => write!(f, "{}", "Your strategy did not pass.".red()),
        }
    }
}
