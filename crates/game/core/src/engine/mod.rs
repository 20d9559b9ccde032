//! Battle state machine.
//!
//! A [`Battle`] owns both combatants for one encounter and advances through
//! [`BattlePhase`]s. It never chooses for either side: the player's action and
//! the opponent's move are fed in by the runtime, and randomness is drawn
//! from the [`crate::env::RngSource`] passed to each step. Every step returns
//! the [`BattleEvent`]s it produced so presentation stays outside the core.

mod battle;
mod errors;
mod event;

pub use battle::{Battle, OpponentKind, OpponentMove, PlayerExchange};
pub use errors::BattleError;
pub use event::{BattleEvent, BattleOutcome, BattlePhase};
