//! Strategies and the capability they run against.
mod sequential;
mod strategy;

pub use sequential::*;
pub use strategy::*;
