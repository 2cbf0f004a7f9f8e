//! Odd-ball weighing puzzle toolkit.
//!
//! Twelve items look alike; exactly one is heavier or lighter than the rest.
//! A strategy may use a two-pan balance and must name the odd item. This crate
//! provides the pieces needed to certify a strategy against the optimum of
//! ⌈log₃(2·N)⌉ weighings.
//!
//! # Module Structure
//!
//! - `scale`: Items, weighings, outcomes, and the pure balance simulator
//! - `contract`: Run state machine, validation, history, and observers
//! - `strategy`: The `Strategy` capability and sample candidates
//! - `tree`: The fixed ternary decision tree and its `Oracle` strategy
//! - `harness`: Runs all ground truths and judges a candidate against the oracle

mod contract;
mod harness;
mod scale;
mod strategy;
mod tree;

pub use contract::*;
pub use harness::*;
pub use scale::*;
pub use strategy::*;
pub use tree::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Position of an item within the universe handed to a strategy.
pub type Position = usize;
/// Number of balance uses recorded for a run.
pub type Uses = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// PUZZLE PARAMETERS
// ============================================================================
/// Number of items in the universe the reference tree is built for.
pub const BALLS: usize = 12;
/// Optimal number of weighings for `BALLS` items, ⌈log₃(2·12)⌉.
pub const WEIGHINGS: Uses = 3;
/// Every (outlier, weight) ground truth over the universe.
pub const TRIALS: usize = BALLS * 2;
/// A balance answers in one of three ways.
pub const OUTCOMES: usize = 3;

/// ⌈log₃(2·n)⌉ by integer arithmetic: the fewest weighings that can
/// distinguish all 2·n hypotheses when every weighing has three outcomes.
pub fn optimal_weighings(n: usize) -> Uses {
    let hypotheses = 2 * n;
    let mut uses = 0;
    let mut reach = 1;
    while reach < hypotheses {
        reach *= OUTCOMES;
        uses += 1;
    }
    uses
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
