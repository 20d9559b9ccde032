//! Per-move utility scores.
//!
//! # Score Formula
//!
//! ```text
//! value = is_possible × (situation + bonus) × modifier
//! ```
//!
//! `situation` is the move family's base priority, `bonus` rewards reacting to
//! the player's last action, and `modifier` carries the enrage aggression.

use game_core::{BossMove, MoveKind};

use super::BossContext;

/// Scoring result for one boss move.
///
/// Components stay separate so the debug trace shows why a move won.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveScore {
    /// Ready, and allowed by the move's own gate (heal threshold, no charge
    /// while charging, release only by override).
    pub is_possible: bool,
    pub situation: f64,
    /// Reactive bonus when the player's last action matches.
    pub bonus: f64,
    /// Multiplier, 1.0 unless enraged.
    pub modifier: f64,
}

impl MoveScore {
    pub const fn new(situation: f64, bonus: f64, modifier: f64) -> Self {
        Self {
            is_possible: true,
            situation,
            bonus,
            modifier,
        }
    }

    pub const fn impossible() -> Self {
        Self {
            is_possible: false,
            situation: 0.0,
            bonus: 0.0,
            modifier: 0.0,
        }
    }

    pub fn value(&self) -> f64 {
        if !self.is_possible {
            return 0.0;
        }
        (self.situation + self.bonus) * self.modifier
    }
}

/// Scores boss moves against a [`BossContext`].
pub struct MoveScorer;

impl MoveScorer {
    /// Scores a single move. Moves on cooldown are impossible.
    pub fn score(boss_move: &BossMove, ctx: &BossContext<'_>) -> MoveScore {
        if !ctx.cooldowns.is_ready(boss_move.id) {
            return MoveScore::impossible();
        }

        let config = ctx.config;
        let aggression = if ctx.enraged && boss_move.kind.is_damaging() {
            config.enrage_aggression
        } else {
            1.0
        };

        match boss_move.kind {
            MoveKind::Release => MoveScore::impossible(),
            MoveKind::Charge => {
                if ctx.charging {
                    return MoveScore::impossible();
                }
                MoveScore::new(Self::charge_score(ctx), 0.0, 1.0)
            }
            MoveKind::Heal => match boss_move.heal_threshold {
                Some(threshold) if ctx.boss_hp_ratio() <= threshold => {
                    MoveScore::new(config.heal_score, 0.0, 1.0)
                }
                _ => MoveScore::impossible(),
            },
            MoveKind::Strike | MoveKind::GuardBreak | MoveKind::MultiHit { .. } => {
                let bonus = if boss_move.reacts_to(ctx.player_last_action) {
                    config.reactive_match_bonus
                } else {
                    0.0
                };
                MoveScore::new(config.reactive_base_score, bonus, aggression)
            }
        }
    }

    /// `base + per_turn × max(0, turn − ramp_start)`, plus the enraged bonus,
    /// capped.
    fn charge_score(ctx: &BossContext<'_>) -> f64 {
        let config = ctx.config;
        let ramp = ctx.turn.saturating_sub(config.charge_ramp_start) as f64;
        let mut score = config.charge_base_score + config.charge_per_turn * ramp;
        if ctx.enraged {
            score += config.charge_enraged_bonus;
        }
        score.min(config.charge_score_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{BossConfig, Cooldowns, MoveId, MoveSet, PlayerAction};

    fn moves() -> MoveSet {
        MoveSet::new(
            vec![
                BossMove::new("charge", "Charge", MoveKind::Charge),
                BossMove::new("flame_breath", "Flame Breath", MoveKind::Release)
                    .with_band(500, 1000),
                BossMove::new("tail_swipe", "Tail Swipe", MoveKind::GuardBreak)
                    .with_band(750, 1200)
                    .with_cooldown(2)
                    .reacting_to(&[PlayerAction::Defend]),
                BossMove::new("heal", "Heal", MoveKind::Heal)
                    .with_band(100, 500)
                    .with_cooldown(4)
                    .with_heal_threshold(0.33),
            ],
            BossMove::new("basic_attack", "Basic Attack", MoveKind::Strike).with_band(200, 400),
        )
    }

    fn ctx<'a>(
        moves: &'a MoveSet,
        cooldowns: &'a Cooldowns,
        config: &'a BossConfig,
    ) -> BossContext<'a> {
        BossContext {
            turn: 1,
            boss_hp: 2500,
            boss_max_hp: 2500,
            player_hp: 100,
            player_last_action: None,
            charging: false,
            enraged: false,
            cooldowns,
            moves,
            config,
        }
    }

    fn score_of(moves: &MoveSet, id: &'static str, ctx: &BossContext<'_>) -> f64 {
        MoveScorer::score(moves.get(MoveId::new(id)).unwrap(), ctx).value()
    }

    #[test]
    fn score_value_combines_components() {
        assert_eq!(MoveScore::new(40.0, 30.0, 1.0).value(), 70.0);
        assert_eq!(MoveScore::impossible().value(), 0.0);
    }

    #[test]
    fn charge_ramps_with_turn_and_caps() {
        let (moves, cooldowns, config) = (moves(), Cooldowns::new(), BossConfig::default());
        let mut ctx = ctx(&moves, &cooldowns, &config);
        assert_eq!(score_of(&moves, "charge", &ctx), 25.0);
        ctx.turn = 8;
        assert_eq!(score_of(&moves, "charge", &ctx), 35.0);
        ctx.enraged = true;
        assert_eq!(score_of(&moves, "charge", &ctx), 45.0);
        ctx.turn = 40;
        assert_eq!(score_of(&moves, "charge", &ctx), 60.0);
    }

    #[test]
    fn reactive_move_gets_bonus_for_matching_action() {
        let (moves, cooldowns, config) = (moves(), Cooldowns::new(), BossConfig::default());
        let mut ctx = ctx(&moves, &cooldowns, &config);
        assert_eq!(score_of(&moves, "tail_swipe", &ctx), 40.0);
        ctx.player_last_action = Some(PlayerAction::Defend);
        assert_eq!(score_of(&moves, "tail_swipe", &ctx), 70.0);
        ctx.enraged = true;
        assert!((score_of(&moves, "tail_swipe", &ctx) - 80.5).abs() < 1e-9);
    }

    #[test]
    fn heal_only_under_threshold_and_off_cooldown() {
        let (moves, mut cooldowns, config) = (moves(), Cooldowns::new(), BossConfig::default());
        {
            let mut ctx = ctx(&moves, &cooldowns, &config);
            assert_eq!(score_of(&moves, "heal", &ctx), 0.0);
            ctx.boss_hp = 800;
            assert_eq!(score_of(&moves, "heal", &ctx), 80.0);
        }
        cooldowns.set(MoveId::new("heal"), 2);
        let mut ctx = ctx(&moves, &cooldowns, &config);
        ctx.boss_hp = 800;
        assert_eq!(score_of(&moves, "heal", &ctx), 0.0);
    }

    #[test]
    fn release_is_never_scored() {
        let (moves, cooldowns, config) = (moves(), Cooldowns::new(), BossConfig::default());
        let mut ctx = ctx(&moves, &cooldowns, &config);
        ctx.charging = true;
        assert_eq!(score_of(&moves, "flame_breath", &ctx), 0.0);
        assert_eq!(score_of(&moves, "charge", &ctx), 0.0);
    }
}
