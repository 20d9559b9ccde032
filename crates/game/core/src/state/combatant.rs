//! Combatant model shared by the player and every opponent.

use bitflags::bitflags;

use crate::action::PlayerAction;
use crate::stats::SkillSet;

use super::cooldowns::Cooldowns;
use super::sheet::CharacterSheet;
use super::weapon::{DamageBand, Weapon};

bitflags! {
    /// Boss status flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct StatusFlags: u8 {
        /// Committed to releasing the stored move next turn.
        const CHARGING = 1 << 0;
        /// Damage and aggression boosted. Never cleared once set.
        const ENRAGED  = 1 << 1;
    }
}

/// Which side of a battle an entity fights on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

/// A fighting entity for the duration of one encounter.
///
/// `hp` stays within `[0, max_hp]` after every mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct Combatant {
    pub name: String,
    pub side: Side,
    hp: u32,
    max_hp: u32,
    /// Base damage band (weapon band for the player, strike band for monsters).
    pub band: DamageBand,
    pub skills: SkillSet,
    /// Player level; zero for opponents.
    pub level: u32,
    pub cooldowns: Cooldowns,
    flags: StatusFlags,
    /// Most recent action declared by the player, as seen by this combatant.
    pub last_action: Option<PlayerAction>,
}

impl Combatant {
    /// Builds the player combatant from the persisted sheet.
    pub fn player(sheet: &CharacterSheet) -> Self {
        let weapon = sheet.equipped_weapon().cloned().unwrap_or_else(Weapon::fists);
        let max_hp = sheet.max_hp.max(1);
        Self {
            name: weapon.name.clone(),
            side: Side::Player,
            hp: sheet.hp.min(max_hp),
            max_hp,
            band: weapon.band,
            skills: sheet.skills,
            level: sheet.level.max(1),
            cooldowns: Cooldowns::new(),
            flags: StatusFlags::empty(),
            last_action: None,
        }
    }

    /// Builds a fresh opponent at full health.
    pub fn opponent(name: impl Into<String>, max_hp: u32, band: DamageBand) -> Self {
        let max_hp = max_hp.max(1);
        Self {
            name: name.into(),
            side: Side::Opponent,
            hp: max_hp,
            max_hp,
            band,
            skills: SkillSet::default(),
            level: 0,
            cooldowns: Cooldowns::new(),
            flags: StatusFlags::empty(),
            last_action: None,
        }
    }

    /// Re-reads HP, weapon and skills after the sheet changed mid-battle.
    pub fn sync_from_sheet(&mut self, sheet: &CharacterSheet) {
        let weapon = sheet.equipped_weapon().cloned().unwrap_or_else(Weapon::fists);
        self.max_hp = sheet.max_hp.max(1);
        self.hp = sheet.hp.min(self.max_hp);
        self.band = weapon.band;
        self.name = weapon.name;
        self.skills = sheet.skills;
        self.level = sheet.level.max(1);
    }

    pub const fn hp(&self) -> u32 {
        self.hp
    }

    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub const fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// Subtracts up to `amount` HP and returns what was actually removed.
    ///
    /// Overkill is discarded.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.hp);
        self.hp -= applied;
        applied
    }

    /// Adds up to `amount` HP and returns what was actually restored.
    pub fn apply_heal(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.max_hp - self.hp);
        self.hp += applied;
        applied
    }

    /// Sets HP directly, clamped to `[0, max_hp]`.
    pub fn set_hp(&mut self, hp: u32) {
        self.hp = hp.min(self.max_hp);
    }

    /// Must be called exactly once per full round.
    pub fn tick_cooldowns(&mut self) {
        self.cooldowns.tick();
    }

    pub fn hp_ratio(&self) -> f64 {
        if self.max_hp == 0 {
            return 0.0;
        }
        self.hp as f64 / self.max_hp as f64
    }

    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn is_enraged(&self) -> bool {
        self.flags.contains(StatusFlags::ENRAGED)
    }

    pub fn is_charging(&self) -> bool {
        self.flags.contains(StatusFlags::CHARGING)
    }

    /// Sets `ENRAGED` once the HP ratio is at or below `threshold`.
    ///
    /// Returns true only on the transition. The flag is never cleared.
    pub fn refresh_enrage(&mut self, threshold: f64) -> bool {
        if self.is_enraged() || self.hp_ratio() > threshold {
            return false;
        }
        self.flags.insert(StatusFlags::ENRAGED);
        true
    }

    pub fn begin_charge(&mut self) {
        self.flags.insert(StatusFlags::CHARGING);
    }

    /// Clears `CHARGING` after the stored move fires. Returns the previous state.
    pub fn release_charge(&mut self) -> bool {
        let was = self.is_charging();
        self.flags.remove(StatusFlags::CHARGING);
        was
    }

    /// Clears `CHARGING` after the player breaks it. Returns the previous state.
    pub fn interrupt_charge(&mut self) -> bool {
        self.release_charge()
    }
}
