//! Tunable combat constants.
//!
//! Every probability in the rules is a linear percent formula of the player's
//! level and one skill value, evaluated against a `[0, 100]` roll with
//! `roll < chance`. Multipliers are plain scalars applied to rolled damage.

use crate::error::{ErrorSeverity, GameError};
use crate::stats::SkillKind;

/// A percent chance of the form `base + per_level × level + per_skill × skill`.
///
/// The result is deliberately not clamped: a chance above 100 always succeeds
/// and a chance at or below 0 never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PercentFormula {
    pub base: i32,
    pub per_level: i32,
    pub per_skill: i32,
    /// Skill that scales the formula.
    pub skill: SkillKind,
}

impl PercentFormula {
    pub const fn new(base: i32, per_level: i32, per_skill: i32, skill: SkillKind) -> Self {
        Self {
            base,
            per_level,
            per_skill,
            skill,
        }
    }

    /// Evaluates the chance for the given level and skill value.
    pub fn evaluate(&self, level: u32, skill_value: u32) -> i32 {
        self.base
            .saturating_add(self.per_level.saturating_mul(level as i32))
            .saturating_add(self.per_skill.saturating_mul(skill_value as i32))
    }
}

// ============================================================================
// Player Offense
// ============================================================================

/// Player attack tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OffenseConfig {
    /// `75 − 3×level + 5×accuracy`.
    pub hit_chance: PercentFormula,
    /// Flat damage added to both ends of the weapon band per strength point.
    pub strength_damage: u32,
    /// `5 + 2×luck`.
    pub critical_chance: PercentFormula,
    pub critical_multiplier: f64,
    /// Damage removed per point of the defender's defence.
    pub defence_reduction: u32,
}

impl Default for OffenseConfig {
    fn default() -> Self {
        Self {
            hit_chance: PercentFormula::new(75, -3, 5, SkillKind::Accuracy),
            strength_damage: 5,
            critical_chance: PercentFormula::new(5, 0, 2, SkillKind::Luck),
            critical_multiplier: 1.5,
            defence_reduction: 5,
        }
    }
}

// ============================================================================
// Boss Behaviour
// ============================================================================

/// Boss decision and status tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BossConfig {
    /// HP ratio at or below which the boss becomes enraged (sticky).
    pub enrage_threshold: f64,
    /// Enraged damage is multiplied by `uniform[min, max] / 100`.
    pub enrage_damage_percent: (u32, u32),
    /// Enraged score multiplier for every damaging move.
    pub enrage_aggression: f64,

    /// Candidates scoring at least `ratio × top` join the tie-break pool.
    pub tie_break_ratio: f64,

    pub charge_base_score: f64,
    /// Turn after which the charge score starts growing.
    pub charge_ramp_start: u32,
    pub charge_per_turn: f64,
    pub charge_enraged_bonus: f64,
    pub charge_score_cap: f64,

    pub reactive_base_score: f64,
    pub reactive_match_bonus: f64,
    pub heal_score: f64,

    /// Charge cooldown after the stored move is released.
    pub charge_rearm_after_release: u32,
    /// Charge cooldown after the player interrupts the charge.
    pub charge_rearm_after_interrupt: u32,
    /// Percent chance a landed player attack breaks a charge.
    pub charge_interrupt_chance: i32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            enrage_threshold: 0.35,
            enrage_damage_percent: (100, 115),
            enrage_aggression: 1.15,
            tie_break_ratio: 0.8,
            charge_base_score: 25.0,
            charge_ramp_start: 3,
            charge_per_turn: 2.0,
            charge_enraged_bonus: 10.0,
            charge_score_cap: 60.0,
            reactive_base_score: 40.0,
            reactive_match_bonus: 30.0,
            heal_score: 80.0,
            charge_rearm_after_release: 3,
            charge_rearm_after_interrupt: 2,
            charge_interrupt_chance: 85,
        }
    }
}

// ============================================================================
// Reactive Mitigation
// ============================================================================

/// Multipliers and success chances for the player's declared defensive stance.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MitigationConfig {
    pub parry_burst_multiplier: f64,
    /// `30 + 5×accuracy`.
    pub parry_counter_chance: PercentFormula,
    /// `40 + 5×agility`.
    pub parry_guard_break_chance: PercentFormula,
    pub parry_guard_break_multiplier: f64,
    pub defend_multiplier: f64,
    pub defend_guard_break_multiplier: f64,
    /// `40 + 5×accuracy`.
    pub counter_chance: PercentFormula,
    pub counter_multiplier: f64,
}

impl Default for MitigationConfig {
    fn default() -> Self {
        Self {
            parry_burst_multiplier: 0.4,
            parry_counter_chance: PercentFormula::new(30, 0, 5, SkillKind::Accuracy),
            parry_guard_break_chance: PercentFormula::new(40, 0, 5, SkillKind::Agility),
            parry_guard_break_multiplier: 0.2,
            defend_multiplier: 0.75,
            defend_guard_break_multiplier: 0.9,
            counter_chance: PercentFormula::new(40, 0, 5, SkillKind::Accuracy),
            counter_multiplier: 0.6,
        }
    }
}

// ============================================================================
// Plain Monsters
// ============================================================================

/// Plain monster fight tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MonsterConfig {
    /// Lower end of a monster's strike band as a fraction of its damage.
    pub strike_floor: f64,
    /// `75 + 2×level − 5×agility`.
    pub retaliation_after_attack: PercentFormula,
    /// `75 − 3×level + 5×accuracy`.
    pub counter_chance: PercentFormula,
    /// Upper bound of the counter band is `max(weapon max, monster damage) × this`.
    pub counter_damage_multiplier: f64,
    /// `75 − 3×level + 5×agility`.
    pub retaliation_after_failed_counter: PercentFormula,
    /// `60 + 3×level − 5×agility`.
    pub retaliation_after_item: PercentFormula,
    /// `75 − 3×level + 5×agility`.
    pub flee_chance: PercentFormula,
}

impl Default for MonsterConfig {
    fn default() -> Self {
        Self {
            strike_floor: 0.7,
            retaliation_after_attack: PercentFormula::new(75, 2, -5, SkillKind::Agility),
            counter_chance: PercentFormula::new(75, -3, 5, SkillKind::Accuracy),
            counter_damage_multiplier: 1.5,
            retaliation_after_failed_counter: PercentFormula::new(75, -3, 5, SkillKind::Agility),
            retaliation_after_item: PercentFormula::new(60, 3, -5, SkillKind::Agility),
            flee_chance: PercentFormula::new(75, -3, 5, SkillKind::Agility),
        }
    }
}

// ============================================================================
// Progression
// ============================================================================

/// Out-of-battle progression tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProgressionConfig {
    /// XP required per level: `xp_per_level × level`.
    pub xp_per_level: u32,
    /// Max HP growth per level as a fraction of current max HP.
    pub max_hp_growth: f64,
    /// Item that revives the player once at half HP.
    pub revival_item: String,
    /// Treasure chests hold `uniform[0, treasure_max] + treasure_per_level × level`.
    pub treasure_max: u32,
    pub treasure_per_level: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            xp_per_level: 200,
            max_hp_growth: 0.2,
            revival_item: "Phoenix's Feather".to_string(),
            treasure_max: 200,
            treasure_per_level: 10,
        }
    }
}

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    pub offense: OffenseConfig,
    pub boss: BossConfig,
    pub mitigation: MitigationConfig,
    pub monster: MonsterConfig,
    pub progression: ProgressionConfig,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects values the combat rules cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scalars = [
            ("offense.critical_multiplier", self.offense.critical_multiplier),
            ("boss.enrage_threshold", self.boss.enrage_threshold),
            ("boss.enrage_aggression", self.boss.enrage_aggression),
            ("boss.charge_base_score", self.boss.charge_base_score),
            ("boss.charge_per_turn", self.boss.charge_per_turn),
            ("boss.charge_enraged_bonus", self.boss.charge_enraged_bonus),
            ("boss.charge_score_cap", self.boss.charge_score_cap),
            ("boss.reactive_base_score", self.boss.reactive_base_score),
            ("boss.reactive_match_bonus", self.boss.reactive_match_bonus),
            ("boss.heal_score", self.boss.heal_score),
            (
                "mitigation.parry_burst_multiplier",
                self.mitigation.parry_burst_multiplier,
            ),
            (
                "mitigation.parry_guard_break_multiplier",
                self.mitigation.parry_guard_break_multiplier,
            ),
            ("mitigation.defend_multiplier", self.mitigation.defend_multiplier),
            (
                "mitigation.defend_guard_break_multiplier",
                self.mitigation.defend_guard_break_multiplier,
            ),
            ("mitigation.counter_multiplier", self.mitigation.counter_multiplier),
            ("monster.strike_floor", self.monster.strike_floor),
            (
                "monster.counter_damage_multiplier",
                self.monster.counter_damage_multiplier,
            ),
            ("progression.max_hp_growth", self.progression.max_hp_growth),
        ];
        if let Some((field, value)) = scalars.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::NotFinite { field, value });
        }

        let ratio = self.boss.tie_break_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::TieBreakRatio(ratio));
        }
        if self.progression.xp_per_level == 0 {
            return Err(ConfigError::ZeroXpPerLevel);
        }
        Ok(())
    }
}

/// A tunable outside the range the rules accept.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    /// The tie-break pool would exclude the top-scoring move.
    #[error("boss.tie_break_ratio must be in (0, 1], got {0}")]
    TieBreakRatio(f64),

    #[error("progression.xp_per_level must be greater than zero")]
    ZeroXpPerLevel,
}

impl GameError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFinite { .. } => "CONFIG_NOT_FINITE",
            Self::TieBreakRatio(_) => "CONFIG_TIE_BREAK_RATIO",
            Self::ZeroXpPerLevel => "CONFIG_ZERO_XP_PER_LEVEL",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_chance_formula_matches_level_and_accuracy() {
        let config = GameConfig::default();
        assert_eq!(config.offense.hit_chance.evaluate(1, 0), 72);
        assert_eq!(config.offense.hit_chance.evaluate(10, 2), 55);
    }

    #[test]
    fn retaliation_can_drop_below_zero() {
        let config = GameConfig::default();
        assert_eq!(config.monster.retaliation_after_attack.evaluate(1, 20), -23);
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_unusable_tunables() {
        let mut config = GameConfig::default();
        config.boss.tie_break_ratio = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::TieBreakRatio(1.5)));
        config.boss.tie_break_ratio = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::TieBreakRatio(0.0)));

        let mut config = GameConfig::default();
        config.boss.tie_break_ratio = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::TieBreakRatio(_))));

        let mut config = GameConfig::default();
        config.mitigation.defend_multiplier = f64::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite {
                field: "mitigation.defend_multiplier",
                ..
            })
        ));

        let mut config = GameConfig::default();
        config.progression.xp_per_level = 0;
        assert_eq!(config.validate(), Err(ConfigError::ZeroXpPerLevel));
        assert_eq!(
            config.validate().unwrap_err().severity(),
            ErrorSeverity::Validation
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{ "boss": { "tie_break_ratio": 0.5 } }"#).unwrap();
        assert_eq!(config.boss.tie_break_ratio, 0.5);
        assert_eq!(config.boss.heal_score, 80.0);
        assert_eq!(config.offense, OffenseConfig::default());
    }
}
