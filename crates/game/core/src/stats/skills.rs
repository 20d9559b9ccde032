//! Skill modifiers.
//!
//! Five non-negative integer skills scale hit chance, damage and mitigation
//! linearly. They are stored on the character sheet and copied into the player
//! combatant at battle start.

/// One of the five trainable skills.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillKind {
    /// Adds flat damage to both ends of the weapon band.
    Strength,
    /// Parry timing, fleeing, dodging monster retaliation.
    Agility,
    /// Critical strike chance.
    Luck,
    /// Hit chance and counter timing.
    Accuracy,
    /// Flat reduction of incoming damage.
    Defence,
}

impl SkillKind {
    /// All skills in display order.
    pub const ALL: [SkillKind; 5] = [
        SkillKind::Strength,
        SkillKind::Agility,
        SkillKind::Luck,
        SkillKind::Accuracy,
        SkillKind::Defence,
    ];
}

/// Skill values of a combatant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SkillSet {
    pub strength: u32,
    pub agility: u32,
    pub luck: u32,
    pub accuracy: u32,
    pub defence: u32,
}

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: SkillKind) -> u32 {
        match kind {
            SkillKind::Strength => self.strength,
            SkillKind::Agility => self.agility,
            SkillKind::Luck => self.luck,
            SkillKind::Accuracy => self.accuracy,
            SkillKind::Defence => self.defence,
        }
    }

    fn slot_mut(&mut self, kind: SkillKind) -> &mut u32 {
        match kind {
            SkillKind::Strength => &mut self.strength,
            SkillKind::Agility => &mut self.agility,
            SkillKind::Luck => &mut self.luck,
            SkillKind::Accuracy => &mut self.accuracy,
            SkillKind::Defence => &mut self.defence,
        }
    }

    /// Raises a skill, returning the new value.
    pub fn add(&mut self, kind: SkillKind, amount: u32) -> u32 {
        let slot = self.slot_mut(kind);
        *slot = slot.saturating_add(amount);
        *slot
    }

    /// Resets every skill to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Iterates `(kind, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (SkillKind, u32)> + '_ {
        SkillKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(SkillKind::from_str("DEFENCE").unwrap(), SkillKind::Defence);
        assert_eq!(SkillKind::Accuracy.to_string(), "accuracy");
    }

    #[test]
    fn add_and_reset() {
        let mut skills = SkillSet::new();
        assert_eq!(skills.add(SkillKind::Agility, 5), 5);
        assert_eq!(skills.add(SkillKind::Agility, 1), 6);
        assert_eq!(skills.get(SkillKind::Agility), 6);
        skills.reset();
        assert_eq!(skills, SkillSet::default());
    }
}
