//! Balance primitives: items, weighings, outcomes, and the pure simulator.
//!
//! Nothing here carries run state. [`Scale::resolve`] is a pure function of a
//! proposed [`Weighing`] and the hidden [`Truth`].
mod item;
mod outcome;
mod scale;
mod truth;
mod weighing;
mod weight;

pub use item::*;
pub use outcome::*;
pub use scale::*;
pub use truth::*;
pub use weighing::*;
pub use weight::*;
