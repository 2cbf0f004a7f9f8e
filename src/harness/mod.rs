//! Certifies a candidate strategy against the [`Oracle`](crate::Oracle).
//!
//! Every ground truth is played by both strategies on identical setups. The
//! candidate passes when it never fails, always names the true outlier, and
//! its worst case matches the oracle's.
mod harness;
mod report;
mod trial;
mod verdict;

pub use harness::*;
pub use report::*;
pub use trial::*;
pub use verdict::*;
