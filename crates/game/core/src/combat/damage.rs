//! Damage rolls and reduction.

use crate::env::RngSource;
use crate::stats::SkillSet;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Flat reduction a defender applies to every incoming hit.
pub fn defence_reduction(defender: &SkillSet, per_point: u32) -> u32 {
    defender.defence.saturating_mul(per_point)
}

/// Applies a multiplier and a flat reduction to a raw roll.
///
/// # Formula
///
/// ```text
/// applied = max(0, round(raw × multiplier) − reduction)
/// ```
pub fn mitigate(raw: u32, multiplier: f64, reduction: u32) -> u32 {
    let scaled = (raw as f64 * multiplier.max(0.0)).round() as u32;
    scaled.saturating_sub(reduction)
}

/// Resolves one hit.
///
/// Draws a uniform integer in `[base_min, base_max]`, scales it by
/// `multiplier` (rounded to nearest), subtracts `reduction` and floors at 0.
/// The same formula applies whichever side is attacking.
///
/// # Arguments
///
/// * `base_min`, `base_max` - Damage band of the move or weapon
/// * `multiplier` - Context multiplier (critical, enrage, mitigation)
/// * `reduction` - Defender's flat reduction, see [`defence_reduction`]
/// * `rng` - Random source for the band draw
pub fn resolve(
    base_min: u32,
    base_max: u32,
    multiplier: f64,
    reduction: u32,
    rng: &mut (impl RngSource + ?Sized),
) -> u32 {
    let raw = rng.uniform_int(base_min, base_max);
    let applied = mitigate(raw, multiplier, reduction);
    tracing::debug!(raw, multiplier, reduction, applied, "resolved hit");
    applied
}

/// Splits `total` into `hits` near-equal shares; earlier shares take the remainder.
pub fn split_hits(total: u32, hits: u8) -> Vec<u32> {
    let hits = u32::from(hits.max(1));
    let share = total / hits;
    let remainder = total % hits;
    (0..hits)
        .map(|i| if i < remainder { share + 1 } else { share })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    #[test]
    fn resolve_subtracts_defence() {
        let mut rng = ScriptedRng::new().with_ints([750]);
        let defender = SkillSet {
            defence: 10,
            ..SkillSet::default()
        };
        let damage = resolve(500, 1000, 1.0, defence_reduction(&defender, 5), &mut rng);
        assert_eq!(damage, 700);
    }

    #[test]
    fn resolve_never_goes_negative() {
        let defender = SkillSet {
            defence: 100,
            ..SkillSet::default()
        };
        for draw in 10..=20 {
            let mut rng = ScriptedRng::new().with_ints([draw]);
            assert_eq!(
                resolve(10, 20, 1.0, defence_reduction(&defender, 5), &mut rng),
                0
            );
        }
    }

    #[test]
    fn multiplier_rounds_to_nearest() {
        assert_eq!(mitigate(101, 0.4, 0), 40);
        assert_eq!(mitigate(103, 0.4, 0), 41);
        assert_eq!(mitigate(100, 1.5, 20), 130);
    }

    #[test]
    fn split_hits_preserves_total() {
        assert_eq!(split_hits(1001, 2), vec![501, 500]);
        assert_eq!(split_hits(50, 2), vec![25, 25]);
        assert_eq!(split_hits(7, 0), vec![7]);
        assert_eq!(split_hits(10, 3).iter().sum::<u32>(), 10);
    }
}
