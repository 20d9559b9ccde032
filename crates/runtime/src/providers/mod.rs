//! Opponent decision providers.

pub mod ai;
pub mod monster;

pub use ai::{BossContext, Decision, DecisionReason, MoveScore, MoveScorer, ScoredBossAi};
pub use monster::MonsterAi;
