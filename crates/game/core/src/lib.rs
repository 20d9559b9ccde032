//! Deterministic combat rules shared by the runtime and the terminal client.
//!
//! `game-core` defines the canonical rules (actions, boss moves, mitigation,
//! the battle state machine) and exposes pure APIs over an injected random
//! source. All battle mutation flows through [`engine::Battle`], and the
//! supporting crates depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod moves;
pub mod state;
pub mod stats;

pub use action::{ActionError, PlayerAction};
pub use combat::{AttackOutcome, AttackResult, Mitigation, MitigationNote, MitigationPolicy};
pub use config::{
    BossConfig, ConfigError, GameConfig, MitigationConfig, MonsterConfig, OffenseConfig, PercentFormula,
    ProgressionConfig,
};
pub use engine::{
    Battle, BattleError, BattleEvent, BattleOutcome, BattlePhase, OpponentKind, OpponentMove,
    PlayerExchange,
};
pub use env::{RngSource, ScriptedRng};
pub use error::{ErrorContext, ErrorSeverity, GameError};
pub use moves::{BossMove, MoveId, MoveKind, MoveSet};
pub use state::{
    CharacterSheet, Combatant, Cooldowns, DamageBand, RepairReport, SheetError, Side,
    StatusFlags, Weapon, WeaponError,
};
pub use stats::{SkillKind, SkillSet};
