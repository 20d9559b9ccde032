//! Adaptive boss AI.
//!
//! The boss decides through full candidate scoring:
//!
//! 1. A charging boss bypasses scoring and releases its stored move.
//! 2. Every ready move is scored by [`MoveScorer`] from a [`BossContext`]
//!    snapshot.
//! 3. Candidates scoring at least `tie_break_ratio × top` form a pool, and one
//!    is drawn uniformly from it.
//! 4. When nothing scores above zero the move set's fallback is used, so the
//!    boss never stalls.

mod context;
mod scoring;
mod selector;

pub use context::BossContext;
pub use scoring::{MoveScore, MoveScorer};
pub use selector::{Decision, DecisionReason, ScoredBossAi};
