//! Player attack resolution.

use crate::config::GameConfig;
use crate::env::RngSource;
use crate::state::Combatant;

use super::damage::{defence_reduction, resolve};
use super::hit::{critical_chance, player_hit_chance, roll_hit};

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Attack missed the target.
    Miss,
    /// Attack hit the target.
    Hit,
    /// Attack hit with the critical multiplier.
    Critical,
}

/// Result of a combat resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    /// Whether the attack hit, missed, or was critical.
    pub outcome: AttackOutcome,

    /// Damage dealt (None if miss).
    pub damage: Option<u32>,
}

impl AttackResult {
    pub const fn landed(&self) -> bool {
        !matches!(self.outcome, AttackOutcome::Miss)
    }
}

/// Rolls the player's weapon damage against `defender`.
///
/// The band is the weapon band shifted up by `strength × strength_damage`.
pub fn roll_player_damage(
    config: &GameConfig,
    attacker: &Combatant,
    defender: &Combatant,
    critical: bool,
    rng: &mut (impl RngSource + ?Sized),
) -> u32 {
    let band = attacker
        .band
        .shifted(attacker.skills.strength.saturating_mul(config.offense.strength_damage));
    let multiplier = if critical {
        config.offense.critical_multiplier
    } else {
        1.0
    };
    resolve(
        band.min(),
        band.max(),
        multiplier,
        defence_reduction(&defender.skills, config.offense.defence_reduction),
        rng,
    )
}

/// Resolves a complete player attack (hit check, critical check, damage).
///
/// Draw order: hit roll, then on a hit the critical roll and the band draw.
pub fn resolve_player_attack(
    config: &GameConfig,
    attacker: &Combatant,
    defender: &Combatant,
    rng: &mut (impl RngSource + ?Sized),
) -> AttackResult {
    // 1. Check if attack hits
    let chance = player_hit_chance(config, attacker.level, &attacker.skills);
    if !roll_hit(chance, rng) {
        return AttackResult {
            outcome: AttackOutcome::Miss,
            damage: None,
        };
    }

    // 2. Critical and damage
    let critical = roll_hit(critical_chance(config, &attacker.skills), rng);
    let damage = roll_player_damage(config, attacker, defender, critical, rng);

    AttackResult {
        outcome: if critical {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        damage: Some(damage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::state::{CharacterSheet, DamageBand};

    fn setup() -> (GameConfig, Combatant, Combatant) {
        let mut sheet = CharacterSheet::new_game();
        sheet.skills.strength = 2;
        (
            GameConfig::default(),
            Combatant::player(&sheet),
            Combatant::opponent("Slime", 90, DamageBand::from_peak(28, 0.7)),
        )
    }

    #[test]
    fn miss_rolls_nothing_else() {
        let (config, player, slime) = setup();
        let mut rng = ScriptedRng::new().with_ints([72, 5, 5]);
        let result = resolve_player_attack(&config, &player, &slime, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Miss);
        assert_eq!(rng.remaining_ints(), 2);
    }

    #[test]
    fn hit_uses_strength_shifted_band() {
        let (config, player, slime) = setup();
        // hit roll 0, crit roll 99 (no crit), band draw clamped to 15..=25 → 25
        let mut rng = ScriptedRng::new().with_ints([0, 99, 1000]);
        let result = resolve_player_attack(&config, &player, &slime, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Hit);
        assert_eq!(result.damage, Some(25));
    }

    #[test]
    fn critical_multiplies_damage() {
        let (config, player, slime) = setup();
        let mut rng = ScriptedRng::new().with_ints([0, 0, 20]);
        let result = resolve_player_attack(&config, &player, &slime, &mut rng);
        assert_eq!(result.outcome, AttackOutcome::Critical);
        assert_eq!(result.damage, Some(30));
    }
}
