use crate::*;
use serde::Serialize;

/// How a candidate's worst case compares with the oracle's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Optimal,
    Worse { reference: Uses, candidate: Uses },
    /// Fewer weighings than an optimal strategy is impossible for an honest
    /// candidate.
    Suspicious { reference: Uses, candidate: Uses },
}

impl Verdict {
    pub fn judge(reference: Uses, candidate: Uses) -> Self {
        match candidate.cmp(&reference) {
            std::cmp::Ordering::Equal => Self::Optimal,
            std::cmp::Ordering::Greater => Self::Worse { reference, candidate },
            std::cmp::Ordering::Less => Self::Suspicious { reference, candidate },
        }
    }
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        match self {
            Self::Optimal => write!(f, "{}", "optimal".green()),
            Self::Worse { reference, candidate } => write!(
                f,
                "{}\nOptimal: {}\nActual Max Checks: {}",
                "non-optimal strategy".red(),
                reference,
                candidate
            ),
            Self::Suspicious { reference, candidate } => write!(
                f,
                "{} ({} < {} weighings)",
                "suspicious: better than optimal".red(),
                candidate,
                reference
            ),
        }
    }
}
