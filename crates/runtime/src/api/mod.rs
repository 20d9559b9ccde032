//! Public runtime API surface.
//!
//! Re-exports error types and the provider traits that clients plug into.
mod errors;
mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{CommandProvider, OpponentPolicy, PromptKind, ScriptedCommandProvider};
