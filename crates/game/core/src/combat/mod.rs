//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! Randomness is injected through [`crate::env::RngSource`]; nothing here
//! touches a global generator.
//!
//! # Core Functions
//!
//! - `resolve`: One hit (band draw, multiplier, defence reduction, floor at 0)
//! - `split_hits`: Even split of a multi-hit roll
//! - `player_hit_chance` / `critical_chance`: Percent formulas
//! - `resolve_player_attack`: Hit check + critical + damage
//! - `MitigationPolicy`: Stance multipliers against boss moves

pub mod damage;
pub mod hit;
pub mod mitigation;
pub mod result;

pub use damage::{defence_reduction, mitigate, resolve, split_hits};
pub use hit::{chance_of, check, critical_chance, player_hit_chance, roll_hit};
pub use mitigation::{Mitigation, MitigationNote, MitigationPolicy};
pub use result::{AttackOutcome, AttackResult, resolve_player_attack, roll_player_damage};
