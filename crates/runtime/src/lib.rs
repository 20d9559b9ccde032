//! Runtime orchestration for the encounter and combat engine.
//!
//! This crate wires the pure rules of `game-core` and the content tables of
//! `game-content` into a playable loop. Clients plug in a
//! [`CommandProvider`] for player input and a [`NarrativeSink`] for output,
//! and drive [`BattleRunner`] and [`EncounterSelector`] from a [`Session`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider traits and the runtime error type
//! - [`providers`] hosts the boss and monster decision logic
//! - [`battle`] runs a single fight to completion
//! - [`encounter`] rolls what exploring turns up
//! - [`progression`] covers levels, items, shopping and treasure
//! - [`events`] turns battle events into narrative lines
//! - [`session`] and [`repository`] keep player progress between runs
pub mod api;
pub mod battle;
pub mod encounter;
pub mod events;
pub mod progression;
pub mod providers;
pub mod repository;
pub mod rng;
pub mod session;

pub use api::{
    CommandProvider, OpponentPolicy, PromptKind, Result, RuntimeError, ScriptedCommandProvider,
};
pub use battle::{BattleReport, BattleRunner, BattleSetup};
pub use encounter::{Encounter, EncounterKind, EncounterSelector};
pub use events::{MemorySink, NarrativeSink, Tone, describe};
pub use progression::{
    ItemError, ItemOutcome, Purchase, ShopError, apply_level_up, buy, equip, level_up_pending,
    open_treasure, parse_choice, spend_skill_point, use_item,
};
pub use providers::{
    BossContext, Decision, DecisionReason, MonsterAi, MoveScore, MoveScorer, ScoredBossAi,
};
pub use repository::{
    FileSaveRepository, InMemorySaveRepository, RepositoryError, SAVE_VERSION, SaveFile,
    SaveRepository,
};
pub use rng::StdRngSource;
pub use session::{Session, ShopkeeperGreeting};
