//! Search support for the move engine
//!
//! Contains the per-side candidate frontiers the engine scans.

pub mod frontier;

pub use frontier::{Frontier, Frontiers};
