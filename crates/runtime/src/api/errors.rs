//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the battle engine, repositories, progression and the
//! command provider so clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{BattleError, BattlePhase};

pub use crate::progression::{ItemError, ShopError};
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("command input closed")]
    InputClosed,

    #[error("command input failed: {0}")]
    Input(#[source] std::io::Error),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error("battle stalled in transient phase {0}")]
    UnexpectedPhase(BattlePhase),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Shop(#[from] ShopError),
}
