//! Errors for out-of-battle progression.
//!
//! All of these are recoverable: the sheet is left untouched and the caller
//! shows the message and re-prompts.

use game_core::WeaponError;
use thiserror::Error;

/// Item use and equip failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ItemError {
    #[error("you don't have anything to use")]
    EmptyInventory,

    #[error("invalid choice {index}: pick a number from 1 to {len}")]
    InvalidSelection { index: usize, len: usize },

    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("{0} has no known use")]
    Unknown(String),

    #[error("{0} works on its own and can't be used by hand")]
    Passive(String),

    #[error("{0} has already been used")]
    AlreadyUsed(String),

    #[error("{item} needs {requires} to be used first")]
    MissingRequirement { item: String, requires: String },

    #[error(transparent)]
    InvalidWeapon(#[from] WeaponError),
}

/// Purchase failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("invalid choice {index}: pick a number from 1 to {len}")]
    InvalidSelection { index: usize, len: usize },

    #[error("{0:?} is not a number")]
    NotANumber(String),

    #[error("you need {cost} gold but only have {gold}")]
    InsufficientGold { cost: u32, gold: u32 },

    #[error(transparent)]
    InvalidWeapon(#[from] WeaponError),
}
