//! Record validation errors.
//!
//! Errors raised when a weapon or character sheet violates its invariants,
//! typically while loading a save file or building a record from content.

use crate::error::{ErrorSeverity, GameError};

/// Weapon or damage band rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponError {
    /// Minimum damage must be strictly positive.
    #[error("minimum damage must be greater than zero")]
    ZeroMinimum,

    /// Maximum damage must exceed the minimum.
    #[error("maximum damage {max} must be greater than minimum {min}")]
    InvertedBand {
        /// Requested minimum.
        min: u32,
        /// Requested maximum.
        max: u32,
    },

    /// Weapon name is blank.
    #[error("weapon name is empty")]
    EmptyName,
}

impl GameError for WeaponError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMinimum => "WEAPON_ZERO_MINIMUM",
            Self::InvertedBand { .. } => "WEAPON_INVERTED_BAND",
            Self::EmptyName => "WEAPON_EMPTY_NAME",
        }
    }
}

/// Character sheet failed validation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetError {
    /// A weapon in the arsenal is invalid.
    #[error("weapon #{index} is invalid: {source}")]
    InvalidWeapon {
        /// Zero-based index into the arsenal.
        index: usize,
        #[source]
        source: WeaponError,
    },

    /// The arsenal is empty.
    #[error("character has no weapons")]
    NoWeapons,

    /// Equipped index points past the arsenal.
    #[error("equipped index {index} is out of range (weapons: {len})")]
    EquippedOutOfRange { index: usize, len: usize },

    /// Current HP exceeds maximum HP.
    #[error("hp {hp} exceeds max hp {max_hp}")]
    HpAboveMax { hp: u32, max_hp: u32 },

    /// Maximum HP must be positive.
    #[error("max hp must be greater than zero")]
    ZeroMaxHp,

    /// Levels start at 1.
    #[error("level must be at least 1")]
    ZeroLevel,
}

impl GameError for SheetError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidWeapon { .. } => "SHEET_INVALID_WEAPON",
            Self::NoWeapons => "SHEET_NO_WEAPONS",
            Self::EquippedOutOfRange { .. } => "SHEET_EQUIPPED_OUT_OF_RANGE",
            Self::HpAboveMax { .. } => "SHEET_HP_ABOVE_MAX",
            Self::ZeroMaxHp => "SHEET_ZERO_MAX_HP",
            Self::ZeroLevel => "SHEET_ZERO_LEVEL",
        }
    }
}
