//! Environment collaborators injected into the rules.
//!
//! The only one the combat core needs is a random source.
mod rng;

pub use rng::{RngSource, ScriptedRng};
