//! Encounter selection while exploring.

use game_content::{Bestiary, BossDefinition, BossRoster, MonsterTemplate};
use game_core::{CharacterSheet, RngSource};

/// Family of a rolled encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum EncounterKind {
    Monster,
    Treasure,
    Shopkeeper,
}

/// What exploring turned up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Encounter<'a> {
    Monster(&'a MonsterTemplate),
    /// A milestone boss the player has not beaten yet.
    Boss(&'a BossDefinition),
    Treasure,
    Shopkeeper,
}

/// Rolls encounters from the bestiary and boss roster.
///
/// Stateless apart from its content tables; the only input is the sheet.
#[derive(Clone, Debug, Default)]
pub struct EncounterSelector {
    bestiary: Bestiary,
    roster: BossRoster,
}

impl EncounterSelector {
    pub fn new(bestiary: Bestiary, roster: BossRoster) -> Self {
        Self { bestiary, roster }
    }

    pub fn bestiary(&self) -> &Bestiary {
        &self.bestiary
    }

    pub fn roster(&self) -> &BossRoster {
        &self.roster
    }

    /// Partitions a `[0, 100]` roll.
    ///
    /// Monster when `roll ≤ max(43, 89 − 2×level)`, treasure when
    /// `roll ≤ max(77, 99 − 2×level)`, shopkeeper otherwise.
    pub fn classify(level: u32, roll: u32) -> EncounterKind {
        let level = i64::from(level);
        let roll = i64::from(roll);
        if roll <= (89 - 2 * level).max(43) {
            EncounterKind::Monster
        } else if roll <= (99 - 2 * level).max(77) {
            EncounterKind::Treasure
        } else {
            EncounterKind::Shopkeeper
        }
    }

    /// Picks the next encounter. A pending milestone boss preempts the roll.
    pub fn roll(&self, sheet: &CharacterSheet, rng: &mut (impl RngSource + ?Sized)) -> Encounter<'_> {
        if let Some(boss) = self
            .roster
            .pending_for(sheet.level, |name| sheet.has_defeated(name))
        {
            tracing::info!(boss = boss.name, level = sheet.level, "milestone boss encounter");
            return Encounter::Boss(boss);
        }

        let roll = rng.roll_percent();
        let kind = Self::classify(sheet.level, roll);
        tracing::info!(roll, %kind, level = sheet.level, "encounter rolled");
        match kind {
            EncounterKind::Monster => match self.bestiary.roll(sheet.level, rng) {
                Some(monster) => Encounter::Monster(monster),
                None => {
                    tracing::warn!("bestiary has no monsters, awarding treasure instead");
                    Encounter::Treasure
                }
            },
            EncounterKind::Treasure => Encounter::Treasure,
            EncounterKind::Shopkeeper => Encounter::Shopkeeper,
        }
    }
}
