//! Error types for the battle state machine.

use crate::action::ActionError;
use crate::error::{ErrorContext, ErrorSeverity, GameError};

use super::BattlePhase;

/// Errors surfaced while driving a [`super::Battle`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// The declared action was rejected; no turn was consumed.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// A step was called in the wrong phase.
    #[error("battle step requires phase {expected}, but battle is in {found}")]
    OutOfPhase {
        expected: BattlePhase,
        found: BattlePhase,
        context: ErrorContext,
    },

    /// A boss move was submitted against a plain monster.
    #[error("boss move submitted in a monster fight")]
    NotABoss { context: ErrorContext },
}

impl BattleError {
    pub(crate) fn out_of_phase(expected: BattlePhase, found: BattlePhase, turn: u32) -> Self {
        Self::OutOfPhase {
            expected,
            found,
            context: ErrorContext::new(turn).with_message("battle step called out of order"),
        }
    }

    pub(crate) fn not_a_boss(turn: u32) -> Self {
        Self::NotABoss {
            context: ErrorContext::new(turn),
        }
    }
}

impl GameError for BattleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Action(err) => err.severity(),
            Self::OutOfPhase { .. } | Self::NotABoss { .. } => ErrorSeverity::Internal,
        }
    }

    fn context(&self) -> Option<&ErrorContext> {
        match self {
            Self::Action(_) => None,
            Self::OutOfPhase { context, .. } | Self::NotABoss { context } => Some(context),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Action(err) => err.error_code(),
            Self::OutOfPhase { .. } => "BATTLE_OUT_OF_PHASE",
            Self::NotABoss { .. } => "BATTLE_NOT_A_BOSS",
        }
    }
}
