//! On-disk save record.

use chrono::{DateTime, Utc};
use game_core::CharacterSheet;
use serde::{Deserialize, Serialize};

/// Current save format version.
pub const SAVE_VERSION: u32 = 1;

/// A saved game: the character sheet plus session settings that survive a
/// restart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveFile {
    #[serde(default = "default_version")]
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub autosave: bool,
    pub sheet: CharacterSheet,
}

fn default_version() -> u32 {
    SAVE_VERSION
}

impl SaveFile {
    /// Stamps `sheet` with the current time.
    pub fn new(session_id: impl Into<String>, autosave: bool, sheet: CharacterSheet) -> Self {
        Self {
            version: SAVE_VERSION,
            saved_at: Utc::now(),
            session_id: session_id.into(),
            autosave,
            sheet,
        }
    }
}
