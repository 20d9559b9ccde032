//! Per-player session state that lives outside any single battle.

use game_core::{CharacterSheet, GameConfig, RepairReport};

use crate::repository::{Result, SaveFile, SaveRepository};

/// Which line the shopkeeper opens with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopkeeperGreeting {
    /// First meeting: the full introduction.
    Introduction,
    /// Any later visit.
    Returning,
}

/// The active game: the character sheet, its settings and dialogue counters.
#[derive(Clone, Debug)]
pub struct Session {
    sheet: CharacterSheet,
    config: GameConfig,
    session_id: String,
    autosave: bool,
    shopkeeper_visits: u32,
}

impl Session {
    /// A new game.
    pub fn new(session_id: impl Into<String>, config: GameConfig) -> Self {
        Self::with_sheet(session_id, config, CharacterSheet::new_game())
    }

    pub fn with_sheet(
        session_id: impl Into<String>,
        config: GameConfig,
        sheet: CharacterSheet,
    ) -> Self {
        Self {
            sheet,
            config,
            session_id: session_id.into(),
            autosave: false,
            shopkeeper_visits: 0,
        }
    }

    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    pub fn sheet_mut(&mut self) -> &mut CharacterSheet {
        &mut self.sheet
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn autosave_enabled(&self) -> bool {
        self.autosave
    }

    pub fn set_autosave(&mut self, enabled: bool) {
        self.autosave = enabled;
        tracing::info!(enabled, slot = %self.session_id, "autosave toggled");
    }

    pub fn shopkeeper_visits(&self) -> u32 {
        self.shopkeeper_visits
    }

    /// Counts a shopkeeper visit and returns the greeting for it.
    pub fn shopkeeper_visit(&mut self) -> ShopkeeperGreeting {
        self.shopkeeper_visits += 1;
        if self.shopkeeper_visits == 1 {
            ShopkeeperGreeting::Introduction
        } else {
            ShopkeeperGreeting::Returning
        }
    }

    /// Writes the sheet to `slot`.
    pub fn save(&self, repo: &dyn SaveRepository, slot: &str) -> Result<()> {
        let save = SaveFile::new(self.session_id.clone(), self.autosave, self.sheet.clone());
        repo.save(slot, &save)?;
        tracing::info!(slot, level = self.sheet.level, "game saved");
        Ok(())
    }

    /// Saves to the session's own slot when autosave is on. Returns whether a
    /// save happened.
    pub fn autosave(&self, repo: &dyn SaveRepository) -> Result<bool> {
        if !self.autosave {
            return Ok(false);
        }
        self.save(repo, &self.session_id)?;
        Ok(true)
    }

    /// Replaces the sheet with a validated save. Returns false when the slot
    /// does not exist.
    pub fn load(&mut self, repo: &dyn SaveRepository, slot: &str) -> Result<bool> {
        let Some(save) = repo.load(slot)? else {
            return Ok(false);
        };
        self.adopt(save);
        tracing::info!(slot, level = self.sheet.level, "game loaded");
        Ok(true)
    }

    /// Loads a save that may break invariants, repairing what it can.
    ///
    /// Returns `None` when the slot does not exist.
    pub fn load_repaired(
        &mut self,
        repo: &dyn SaveRepository,
        slot: &str,
    ) -> Result<Option<RepairReport>> {
        let Some(mut save) = repo.load_unchecked(slot)? else {
            return Ok(None);
        };
        let report = save.sheet.repair();
        if !report.is_clean() {
            tracing::warn!(slot, fixes = ?report.fixes, "repaired save file");
        }
        save.sheet.validate()?;
        self.adopt(save);
        Ok(Some(report))
    }

    fn adopt(&mut self, save: SaveFile) {
        self.sheet = save.sheet;
        self.autosave = save.autosave;
        if !save.session_id.is_empty() {
            self.session_id = save.session_id;
        }
    }
}
