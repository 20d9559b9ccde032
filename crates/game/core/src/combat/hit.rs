//! Hit, critical and other percent checks.

use crate::config::{GameConfig, PercentFormula};
use crate::env::RngSource;
use crate::stats::SkillSet;

/// Player hit chance: `base − 3×level + 5×accuracy` with the default table.
///
/// Not clamped; the `[0, 100]` roll clamps it implicitly.
pub fn player_hit_chance(config: &GameConfig, level: u32, skills: &SkillSet) -> i32 {
    chance_of(&config.offense.hit_chance, level, skills)
}

/// Critical chance: `5 + 2×luck` with the default table.
pub fn critical_chance(config: &GameConfig, skills: &SkillSet) -> i32 {
    chance_of(&config.offense.critical_chance, 0, skills)
}

/// Evaluates a percent formula for a combatant.
pub fn chance_of(formula: &PercentFormula, level: u32, skills: &SkillSet) -> i32 {
    formula.evaluate(level, skills.get(formula.skill))
}

/// Rolls `[0, 100]` and succeeds when the roll is strictly below `chance`.
pub fn roll_hit(chance: i32, rng: &mut (impl RngSource + ?Sized)) -> bool {
    let roll = rng.roll_percent();
    let hit = (roll as i64) < i64::from(chance);
    tracing::trace!(roll, chance, hit, "percent check");
    hit
}

/// Evaluates a formula and rolls it in one step.
pub fn check(
    formula: &PercentFormula,
    level: u32,
    skills: &SkillSet,
    rng: &mut (impl RngSource + ?Sized),
) -> bool {
    roll_hit(chance_of(formula, level, skills), rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn hit_chance_scales_with_level_and_accuracy() {
        let config = GameConfig::default();
        let mut skills = SkillSet::default();
        assert_eq!(player_hit_chance(&config, 1, &skills), 72);
        skills.accuracy = 3;
        assert_eq!(player_hit_chance(&config, 5, &skills), 75);
    }

    #[test]
    fn roll_is_strictly_below_chance() {
        let mut rng = ScriptedRng::new().with_ints([71, 72]);
        assert!(roll_hit(72, &mut rng));
        assert!(!roll_hit(72, &mut rng));
    }

    #[test]
    fn extreme_chances() {
        let mut rng = ScriptedRng::new().with_ints([0, 100]);
        assert!(!roll_hit(0, &mut rng));
        assert!(roll_hit(101, &mut rng));
    }

    #[test]
    fn critical_chance_uses_luck() {
        let config = GameConfig::default();
        let skills = SkillSet {
            luck: 4,
            ..SkillSet::default()
        };
        assert_eq!(critical_chance(&config, &skills), 13);
    }
}
