//! Boss move selection over scored candidates.

use game_core::{Battle, BossMove, OpponentMove, RngSource};

use super::{BossContext, MoveScore, MoveScorer};
use crate::api::OpponentPolicy;

/// Why a move was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum DecisionReason {
    /// The boss was charging; scoring was skipped.
    ForcedRelease,
    /// Drawn from the tie-break pool.
    Scored,
    /// Nothing scored above zero.
    Fallback,
}

/// A chosen boss move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decision {
    pub boss_move: BossMove,
    pub reason: DecisionReason,
}

/// Utility-scored boss AI.
///
/// Given the same context and random draws the same move is chosen; the only
/// randomness is the uniform pick inside the tie-break pool.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoredBossAi;

impl ScoredBossAi {
    pub fn new() -> Self {
        Self
    }

    /// Chooses the boss's next move.
    pub fn select(&self, ctx: &BossContext<'_>, rng: &mut (impl RngSource + ?Sized)) -> Decision {
        if ctx.charging {
            let boss_move = *ctx.moves.release_move();
            tracing::debug!(id = %boss_move.id, "ScoredBossAi: charging, forced release");
            return Decision {
                boss_move,
                reason: DecisionReason::ForcedRelease,
            };
        }

        let scored = Self::evaluate_all(ctx);
        for (boss_move, score) in &scored {
            tracing::debug!(
                "  Move {}: score={:.2} (possible={}, sit={}, bonus={}, mod={})",
                boss_move.id,
                score.value(),
                score.is_possible,
                score.situation,
                score.bonus,
                score.modifier
            );
        }

        let top = scored
            .iter()
            .map(|(_, score)| score.value())
            .fold(0.0_f64, f64::max);
        if top <= 0.0 {
            let boss_move = *ctx.moves.fallback();
            tracing::warn!(id = %boss_move.id, "no move available, using fallback");
            return Decision {
                boss_move,
                reason: DecisionReason::Fallback,
            };
        }

        // The top-scoring move always qualifies, whatever the ratio.
        let cutoff = (top * ctx.config.tie_break_ratio).min(top);
        let pool: Vec<BossMove> = scored
            .iter()
            .filter(|(_, score)| score.value() > 0.0 && score.value() >= cutoff)
            .map(|(boss_move, _)| *boss_move)
            .collect();
        let Some(&boss_move) = pool.get(rng.pick_index(pool.len())) else {
            let boss_move = *ctx.moves.fallback();
            tracing::warn!(id = %boss_move.id, "empty tie-break pool, using fallback");
            return Decision {
                boss_move,
                reason: DecisionReason::Fallback,
            };
        };

        tracing::debug!(
            "ScoredBossAi: chose {} from a pool of {} (top={:.2})",
            boss_move.id,
            pool.len(),
            top
        );
        Decision {
            boss_move,
            reason: DecisionReason::Scored,
        }
    }

    /// Scores every move in registry order, including impossible ones.
    pub fn evaluate_all(ctx: &BossContext<'_>) -> Vec<(BossMove, MoveScore)> {
        ctx.moves
            .iter()
            .map(|boss_move| (*boss_move, MoveScorer::score(boss_move, ctx)))
            .collect()
    }
}

impl OpponentPolicy for ScoredBossAi {
    fn choose(&self, battle: &Battle, rng: &mut dyn RngSource) -> OpponentMove {
        match BossContext::from_battle(battle) {
            Some(ctx) => OpponentMove::Boss(self.select(&ctx, rng).boss_move),
            None => OpponentMove::Strike,
        }
    }
}
