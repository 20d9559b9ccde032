//! Out-of-battle character progression: levels, items, shopping and treasure.

mod error;
mod items;
mod leveling;
mod shop;

pub use error::{ItemError, ShopError};
pub use items::{ItemOutcome, equip, use_item};
pub use leveling::{apply_level_up, level_up_pending, spend_skill_point};
pub use shop::{Purchase, buy};

use game_core::{CharacterSheet, GameConfig, RngSource};

/// Parses a 1-based menu choice typed by the player.
pub fn parse_choice(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

/// Rolls a treasure chest and adds the gold to the sheet.
///
/// Yields `uniform[0, treasure_max] + treasure_per_level × level`.
pub fn open_treasure(
    sheet: &mut CharacterSheet,
    config: &GameConfig,
    rng: &mut (impl RngSource + ?Sized),
) -> u32 {
    let progression = &config.progression;
    let gold = rng
        .uniform_int(0, progression.treasure_max)
        .saturating_add(progression.treasure_per_level.saturating_mul(sheet.level));
    sheet.gold = sheet.gold.saturating_add(gold);
    tracing::info!(gold, total = sheet.gold, "treasure opened");
    gold
}
