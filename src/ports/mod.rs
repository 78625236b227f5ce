//! Ports (trait boundaries) for external dependencies.
//!
//! The learning loop depends only on these traits. Progress bars, trace files
//! and random number generators are adapters plugged in from outside.

pub mod observer;
pub mod random;

pub use observer::Observer;
pub use random::{RandomSource, build_rng};
