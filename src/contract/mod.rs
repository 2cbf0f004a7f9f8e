//! The run contract shared by every strategy.
//!
//! A [`Contract`] owns the hidden truth and the bookkeeping of one run at a
//! time. Strategies never see it directly; they receive a [`Balance`] handle
//! that can only weigh and submit.
mod balance;
mod contract;
mod error;
mod observer;
mod record;
mod status;
mod verbosity;

pub use balance::*;
pub use contract::*;
pub use error::*;
pub use observer::*;
pub use record::*;
pub use status::*;
pub use verbosity::*;
