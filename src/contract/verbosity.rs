/// Whether a run reports its weighings to the contract's observer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Silent,
    Logging,
}

impl From<bool> for Verbosity {
    fn from(verbose: bool) -> Self {
        if verbose { Self::Logging } else { Self::Silent }
    }
}
