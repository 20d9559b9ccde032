//! Repository contract for saving and loading character progress.

use super::error::Result;
use super::types::SaveFile;

/// Persistence for save slots.
///
/// `load` rejects sheets that break combat invariants; `load_unchecked` hands
/// back whatever was stored so callers can run [`game_core::CharacterSheet::repair`].
pub trait SaveRepository: Send + Sync {
    /// Save a record under `slot`, replacing any previous one.
    fn save(&self, slot: &str, save: &SaveFile) -> Result<()>;

    /// Load a record without validating the sheet.
    fn load_unchecked(&self, slot: &str) -> Result<Option<SaveFile>>;

    /// Load a record and validate its sheet.
    fn load(&self, slot: &str) -> Result<Option<SaveFile>> {
        match self.load_unchecked(slot)? {
            Some(save) => {
                save.sheet.validate()?;
                Ok(Some(save))
            }
            None => Ok(None),
        }
    }

    /// Check if a slot exists.
    fn exists(&self, slot: &str) -> bool;

    /// Delete a slot. Deleting a missing slot is not an error.
    fn delete(&self, slot: &str) -> Result<()>;

    /// List all slot names, sorted.
    fn list_slots(&self) -> Result<Vec<String>> {
        Ok(vec![])
    }
}

/// Slot names become file names: no separators, no dots up front, not empty.
pub(crate) fn check_slot(slot: &str) -> Result<()> {
    let valid = !slot.is_empty()
        && !slot.starts_with('.')
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(super::RepositoryError::InvalidSlot(slot.to_string()))
    }
}
