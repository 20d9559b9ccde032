//! Experience and level-ups.

use game_core::{CharacterSheet, GameConfig, SkillKind};

fn xp_needed(sheet: &CharacterSheet, config: &GameConfig) -> u32 {
    config
        .progression
        .xp_per_level
        .saturating_mul(sheet.level.max(1))
}

/// Whether the sheet has enough XP for at least one level.
///
/// A zero XP cost never levels; validated configs never carry one.
pub fn level_up_pending(sheet: &CharacterSheet, config: &GameConfig) -> bool {
    let needed = xp_needed(sheet, config);
    needed > 0 && sheet.xp >= needed
}

/// Applies every level the current XP pays for and returns how many.
///
/// Each level costs `xp_per_level × level`, grows max HP by
/// `round(max_hp × max_hp_growth)`, fully heals, and grants one skill point.
pub fn apply_level_up(sheet: &mut CharacterSheet, config: &GameConfig) -> u32 {
    let mut gained = 0;
    while level_up_pending(sheet, config) {
        sheet.xp -= xp_needed(sheet, config);
        sheet.level += 1;
        let growth = (sheet.max_hp as f64 * config.progression.max_hp_growth).round() as u32;
        sheet.max_hp = sheet.max_hp.saturating_add(growth);
        sheet.hp = sheet.max_hp;
        sheet.skill_points += 1;
        gained += 1;
        tracing::info!(level = sheet.level, max_hp = sheet.max_hp, "level up");
    }
    gained
}

/// Spends one skill point on `kind`. Returns the new value, or `None` when
/// no point is available.
pub fn spend_skill_point(sheet: &mut CharacterSheet, kind: SkillKind) -> Option<u32> {
    if sheet.skill_points == 0 {
        return None;
    }
    sheet.skill_points -= 1;
    Some(sheet.skills.add(kind, 1))
}
