//! Error types raised by repository implementations.

use game_core::SheetError;
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("corrupted data: {0}")]
    CorruptedData(String),

    #[error("invalid save slot name {0:?}")]
    InvalidSlot(String),

    #[error("save file failed validation: {0}")]
    InvalidSheet(#[from] SheetError),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
