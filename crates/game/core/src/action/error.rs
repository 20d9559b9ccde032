//! Player input errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while interpreting a declared action.
///
/// None of these consume a turn; the caller re-prompts.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// Input did not match any action token.
    #[error("unrecognized action '{0}'")]
    Unrecognized(String),

    /// Bosses cannot be fled from.
    #[error("there is no escaping this fight")]
    RunForbidden,
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Unrecognized(_) => "ACTION_UNRECOGNIZED",
            Self::RunForbidden => "ACTION_RUN_FORBIDDEN",
        }
    }
}
