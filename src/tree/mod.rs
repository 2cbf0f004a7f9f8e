//! The fixed ternary decision tree for twelve items and the strategy that walks it.
//!
//! Nodes live in a flat static arena and refer to each other by index. Nodes
//! address items by position in the universe, never by label, so one tree
//! serves any ordering of any twelve labels.
mod branch;
mod node;
mod oracle;
mod tree;

pub use branch::*;
pub use node::*;
pub use oracle::*;
pub use tree::*;
