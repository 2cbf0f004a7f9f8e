use super::*;

/// Contract violations. All of them abort the current run.
///
/// A wrong final answer is not among them: the contract accepts any
/// submission and leaves judging it to whoever knows the truth.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("invalid setup: {0}")]
    InvalidSetup(String),
    #[error("cannot {action} while run is {status}")]
    OutOfSequence { action: &'static str, status: Status },
    #[error("invalid comparison: {0}")]
    InvalidComparison(String),
    #[error("unsupported size: expected {expected} items, got {actual}")]
    UnsupportedSize { expected: usize, actual: usize },
    #[error("internal inconsistency: {0}")]
    Inconsistent(String),
}
