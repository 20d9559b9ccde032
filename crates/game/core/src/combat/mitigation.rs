//! Reactive mitigation against boss moves.
//!
//! The player's declared stance (`defend`, `parry`, `counter`) is resolved when
//! the boss's move lands. Each stance is one strategy; the move's [`MoveKind`]
//! decides which branch of that strategy applies.
//!
//! | Stance  | Burst (strike, release)      | Guard-break                 | Multi-hit          |
//! |---------|------------------------------|-----------------------------|--------------------|
//! | parry   | ×0.4, counter-strike roll    | roll: ×0.2 + hit, else ×1.0 | ×1.0 (slips past)  |
//! | defend  | ×0.75                        | ×0.9                        | ×0.75              |
//! | counter | roll: ×0.6 + hit, else ×1.0  | same as burst               | ×1.0 (ruined)      |
//!
//! Enraged bosses multiply the result by `uniform[100, 115] / 100`.

use crate::action::PlayerAction;
use crate::config::{GameConfig, MitigationConfig};
use crate::env::RngSource;
use crate::moves::MoveKind;
use crate::stats::SkillSet;

use super::hit::check;

/// How the declared stance played out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MitigationNote {
    /// No defensive stance declared.
    Unopposed,
    Defended,
    /// Parry absorbed most of the blow.
    Parried,
    /// Parry timing failed against a guard-break.
    Mistimed,
    /// Parry was useless against a multi-hit flurry.
    FlurrySlips,
    /// Counter was ruined by a multi-hit flurry.
    Ruined,
    /// Counter landed.
    Countered,
    CounterFailed,
}

/// Result of a mitigation evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mitigation {
    /// Scalar applied to each rolled (sub-)hit.
    pub multiplier: f64,
    /// The player strikes back before the incoming damage lands.
    pub counter_hit: bool,
    pub note: MitigationNote,
}

impl Mitigation {
    const fn plain(multiplier: f64, note: MitigationNote) -> Self {
        Self {
            multiplier,
            counter_hit: false,
            note,
        }
    }

    const fn with_counter(multiplier: f64, note: MitigationNote) -> Self {
        Self {
            multiplier,
            counter_hit: true,
            note,
        }
    }
}

/// Evaluates a player's stance against a boss move.
#[derive(Clone, Copy, Debug)]
pub struct MitigationPolicy<'a> {
    config: &'a MitigationConfig,
    enrage_percent: (u32, u32),
}

impl<'a> MitigationPolicy<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config: &config.mitigation,
            enrage_percent: config.boss.enrage_damage_percent,
        }
    }

    /// Computes the multiplier for one incoming move.
    ///
    /// Draw order: the stance roll (if the stance needs one), then the enrage
    /// roll (if enraged). Non-damaging moves are never mitigated.
    pub fn evaluate(
        &self,
        stance: Option<PlayerAction>,
        kind: MoveKind,
        level: u32,
        skills: &SkillSet,
        enraged: bool,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Mitigation {
        if !kind.is_damaging() {
            return Mitigation::plain(1.0, MitigationNote::Unopposed);
        }

        let mut mitigation = match stance {
            Some(PlayerAction::Parry) => self.parry(kind, level, skills, rng),
            Some(PlayerAction::Defend) => self.defend(kind),
            Some(PlayerAction::Counter) => self.counter(kind, level, skills, rng),
            _ => Mitigation::plain(1.0, MitigationNote::Unopposed),
        };

        if enraged {
            let (lo, hi) = self.enrage_percent;
            let boost = rng.uniform_int(lo, hi) as f64 / 100.0;
            mitigation.multiplier *= boost;
        }

        tracing::debug!(
            ?stance,
            ?kind,
            enraged,
            multiplier = mitigation.multiplier,
            counter_hit = mitigation.counter_hit,
            note = ?mitigation.note,
            "mitigation evaluated"
        );
        mitigation
    }

    fn parry(
        &self,
        kind: MoveKind,
        level: u32,
        skills: &SkillSet,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Mitigation {
        match kind {
            MoveKind::MultiHit { .. } => Mitigation::plain(1.0, MitigationNote::FlurrySlips),
            MoveKind::GuardBreak => {
                if check(&self.config.parry_guard_break_chance, level, skills, rng) {
                    Mitigation::with_counter(
                        self.config.parry_guard_break_multiplier,
                        MitigationNote::Parried,
                    )
                } else {
                    Mitigation::plain(1.0, MitigationNote::Mistimed)
                }
            }
            _ => {
                let counter = check(&self.config.parry_counter_chance, level, skills, rng);
                Mitigation {
                    multiplier: self.config.parry_burst_multiplier,
                    counter_hit: counter,
                    note: MitigationNote::Parried,
                }
            }
        }
    }

    fn defend(&self, kind: MoveKind) -> Mitigation {
        let multiplier = match kind {
            MoveKind::GuardBreak => self.config.defend_guard_break_multiplier,
            _ => self.config.defend_multiplier,
        };
        Mitigation::plain(multiplier, MitigationNote::Defended)
    }

    fn counter(
        &self,
        kind: MoveKind,
        level: u32,
        skills: &SkillSet,
        rng: &mut (impl RngSource + ?Sized),
    ) -> Mitigation {
        if let MoveKind::MultiHit { .. } = kind {
            return Mitigation::plain(1.0, MitigationNote::Ruined);
        }
        if check(&self.config.counter_chance, level, skills, rng) {
            Mitigation::with_counter(self.config.counter_multiplier, MitigationNote::Countered)
        } else {
            Mitigation::plain(1.0, MitigationNote::CounterFailed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;

    const MULTI: MoveKind = MoveKind::MultiHit { hits: 2 };

    fn eval(
        stance: Option<PlayerAction>,
        kind: MoveKind,
        enraged: bool,
        rng: &mut ScriptedRng,
    ) -> Mitigation {
        let config = GameConfig::default();
        MitigationPolicy::new(&config).evaluate(
            stance,
            kind,
            1,
            &SkillSet::default(),
            enraged,
            rng,
        )
    }

    #[test]
    fn parry_vs_burst_reduces_and_may_counter() {
        // 29 < 30 so the counter-strike lands.
        let mut rng = ScriptedRng::new().with_ints([29]);
        let m = eval(Some(PlayerAction::Parry), MoveKind::Release, false, &mut rng);
        assert_eq!(m.multiplier, 0.4);
        assert!(m.counter_hit);

        let mut rng = ScriptedRng::new().with_ints([30]);
        let m = eval(Some(PlayerAction::Parry), MoveKind::Strike, false, &mut rng);
        assert_eq!(m.multiplier, 0.4);
        assert!(!m.counter_hit);
    }

    #[test]
    fn parry_vs_guard_break_is_binary() {
        let mut rng = ScriptedRng::new().with_ints([0]);
        let m = eval(Some(PlayerAction::Parry), MoveKind::GuardBreak, false, &mut rng);
        assert_eq!(m.multiplier, 0.2);
        assert!(m.counter_hit);
        assert_eq!(m.note, MitigationNote::Parried);

        let mut rng = ScriptedRng::new().with_ints([40]);
        let m = eval(Some(PlayerAction::Parry), MoveKind::GuardBreak, false, &mut rng);
        assert_eq!(m.multiplier, 1.0);
        assert!(!m.counter_hit);
        assert_eq!(m.note, MitigationNote::Mistimed);
    }

    #[test]
    fn defend_is_weaker_against_guard_break() {
        let mut rng = ScriptedRng::new();
        let vs_strike = eval(Some(PlayerAction::Defend), MoveKind::Strike, false, &mut rng);
        let vs_guard = eval(Some(PlayerAction::Defend), MoveKind::GuardBreak, false, &mut rng);
        assert_eq!(vs_strike.multiplier, 0.75);
        assert_eq!(vs_guard.multiplier, 0.9);
        assert!(vs_guard.multiplier > vs_strike.multiplier);
    }

    #[test]
    fn counter_vs_multi_hit_is_ruined_without_a_roll() {
        let mut rng = ScriptedRng::new().with_ints([0]);
        let m = eval(Some(PlayerAction::Counter), MULTI, false, &mut rng);
        assert_eq!(m.multiplier, 1.0);
        assert_eq!(m.note, MitigationNote::Ruined);
        assert_eq!(rng.remaining_ints(), 1);
    }

    #[test]
    fn counter_vs_single_hit() {
        let mut rng = ScriptedRng::new().with_ints([10, 90]);
        let landed = eval(Some(PlayerAction::Counter), MoveKind::GuardBreak, false, &mut rng);
        assert_eq!(landed.multiplier, 0.6);
        assert!(landed.counter_hit);
        let failed = eval(Some(PlayerAction::Counter), MoveKind::Strike, false, &mut rng);
        assert_eq!(failed.multiplier, 1.0);
        assert_eq!(failed.note, MitigationNote::CounterFailed);
    }

    #[test]
    fn parry_vs_multi_hit_slips_past() {
        let mut rng = ScriptedRng::new();
        let m = eval(Some(PlayerAction::Parry), MULTI, false, &mut rng);
        assert_eq!(m.multiplier, 1.0);
        assert_eq!(m.note, MitigationNote::FlurrySlips);
    }

    #[test]
    fn enrage_scales_unopposed_hits() {
        let mut rng = ScriptedRng::new().with_ints([115]);
        let m = eval(None, MoveKind::Strike, true, &mut rng);
        assert!((m.multiplier - 1.15).abs() < 1e-9);
        let mut rng = ScriptedRng::new().with_ints([100]);
        let m = eval(Some(PlayerAction::Attack), MoveKind::Strike, true, &mut rng);
        assert_eq!(m.multiplier, 1.0);
    }

    #[test]
    fn heal_is_never_mitigated() {
        let mut rng = ScriptedRng::new().with_ints([0]);
        let m = eval(Some(PlayerAction::Parry), MoveKind::Heal, true, &mut rng);
        assert_eq!(m.note, MitigationNote::Unopposed);
        assert_eq!(rng.remaining_ints(), 1);
    }
}
