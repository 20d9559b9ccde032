//! Persisted character sheet.
//!
//! The sheet is the player's state between encounters. The battle engine reads
//! it once at battle start (through [`super::Combatant::player`]) and the
//! runtime folds HP, gold and XP back when the encounter ends.

use crate::stats::SkillSet;

use super::error::SheetError;
use super::weapon::Weapon;

/// Player progress that survives between encounters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    pub level: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub gold: u32,
    pub xp: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weapons: Vec<Weapon>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped: usize,
    #[cfg_attr(feature = "serde", serde(default, rename = "skill_set"))]
    pub skills: SkillSet,
    /// Unspent points granted by level-ups.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill_points: u32,
    /// Item names; duplicates are separate copies.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inventory: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub artifacts: Vec<String>,
    /// One-shot items already consumed.
    #[cfg_attr(feature = "serde", serde(default))]
    pub used_items: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defeated_bosses: Vec<String>,
}

/// What [`CharacterSheet::repair`] changed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepairReport {
    pub fixes: Vec<String>,
}

impl RepairReport {
    pub fn is_clean(&self) -> bool {
        self.fixes.is_empty()
    }
}

impl CharacterSheet {
    /// Level 1, 100/100 HP, bare fists.
    pub fn new_game() -> Self {
        Self {
            level: 1,
            hp: 100,
            max_hp: 100,
            gold: 0,
            xp: 0,
            weapons: vec![Weapon::fists()],
            equipped: 0,
            skills: SkillSet::default(),
            skill_points: 0,
            inventory: Vec::new(),
            artifacts: Vec::new(),
            used_items: Vec::new(),
            defeated_bosses: Vec::new(),
        }
    }

    pub fn equipped_weapon(&self) -> Option<&Weapon> {
        self.weapons.get(self.equipped)
    }

    /// Checks every invariant the combat core relies on.
    pub fn validate(&self) -> Result<(), SheetError> {
        if self.level == 0 {
            return Err(SheetError::ZeroLevel);
        }
        if self.max_hp == 0 {
            return Err(SheetError::ZeroMaxHp);
        }
        if self.hp > self.max_hp {
            return Err(SheetError::HpAboveMax {
                hp: self.hp,
                max_hp: self.max_hp,
            });
        }
        if self.weapons.is_empty() {
            return Err(SheetError::NoWeapons);
        }
        for (index, weapon) in self.weapons.iter().enumerate() {
            weapon
                .check()
                .map_err(|source| SheetError::InvalidWeapon { index, source })?;
        }
        if self.equipped >= self.weapons.len() {
            return Err(SheetError::EquippedOutOfRange {
                index: self.equipped,
                len: self.weapons.len(),
            });
        }
        Ok(())
    }

    /// Fixes recoverable defects in place.
    ///
    /// Invalid weapons are dropped, an empty arsenal gets fists, an out of range
    /// equip index resets to 0, and level/HP are clamped.
    pub fn repair(&mut self) -> RepairReport {
        let mut report = RepairReport::default();

        if self.level == 0 {
            self.level = 1;
            report.fixes.push("level raised to 1".to_string());
        }
        if self.max_hp == 0 {
            self.max_hp = 100;
            report.fixes.push("max hp reset to 100".to_string());
        }
        if self.hp > self.max_hp {
            report
                .fixes
                .push(format!("hp {} clamped to {}", self.hp, self.max_hp));
            self.hp = self.max_hp;
        }

        let before = self.weapons.len();
        self.weapons.retain(|weapon| weapon.check().is_ok());
        let dropped = before - self.weapons.len();
        if dropped > 0 {
            report
                .fixes
                .push(format!("dropped {dropped} invalid weapon(s)"));
        }
        if self.weapons.is_empty() {
            self.weapons.push(Weapon::fists());
            report.fixes.push("arsenal restored with fists".to_string());
        }
        if self.equipped >= self.weapons.len() {
            self.equipped = 0;
            report.fixes.push("equipped weapon reset".to_string());
        }

        report
    }

    /// Distinct item names with their counts, in first-seen order.
    ///
    /// This is the list 1-based item selection indexes into.
    pub fn item_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for item in &self.inventory {
            match counts.iter_mut().find(|(name, _)| name == item) {
                Some((_, count)) => *count += 1,
                None => counts.push((item.clone(), 1)),
            }
        }
        counts
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|item| item == name)
    }

    pub fn has_used(&self, name: &str) -> bool {
        self.used_items.iter().any(|item| item == name)
    }

    /// Removes one copy of `name`. Returns false if none was held.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.inventory.iter().position(|item| item == name) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether an unused revival item is held.
    pub fn can_revive(&self, revival_item: &str) -> bool {
        self.has_item(revival_item) && !self.has_used(revival_item)
    }

    /// Consumes the revival item if available. Returns true when consumed.
    pub fn take_revival(&mut self, revival_item: &str) -> bool {
        if !self.can_revive(revival_item) {
            return false;
        }
        self.remove_item(revival_item);
        self.used_items.push(revival_item.to_string());
        true
    }

    /// Game-over fold-back.
    pub fn apply_defeat_penalty(&mut self) {
        self.hp = 1;
        self.level = (self.level / 2).max(1);
        self.xp = 0;
        self.gold /= 10;
        self.inventory.clear();
        self.used_items.clear();
        self.skills.reset();
        self.skill_points = 0;
    }

    pub fn record_rewards(&mut self, gold: u32, xp: u32) {
        self.gold = self.gold.saturating_add(gold);
        self.xp = self.xp.saturating_add(xp);
    }

    pub fn has_defeated(&self, boss: &str) -> bool {
        self.defeated_bosses.iter().any(|name| name == boss)
    }
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new_game()
    }
}
