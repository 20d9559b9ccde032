//! Player action vocabulary.

use super::error::ActionError;

/// One of the fixed battle actions a player can declare.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "lowercase")]
pub enum PlayerAction {
    Attack,
    Defend,
    Parry,
    Counter,
    #[strum(to_string = "use item")]
    UseItem,
    Run,
}

impl PlayerAction {
    /// Every action in prompt order.
    pub const ALL: [PlayerAction; 6] = [
        PlayerAction::Attack,
        PlayerAction::Defend,
        PlayerAction::Parry,
        PlayerAction::Counter,
        PlayerAction::UseItem,
        PlayerAction::Run,
    ];

    /// Parses a free-text line: trimmed, case-insensitive.
    ///
    /// `use item` also accepts `useitem` and `use_item`. Unknown input is an
    /// [`ActionError::Unrecognized`] and must not consume a turn.
    pub fn parse(input: &str) -> Result<Self, ActionError> {
        let token = input.trim().to_ascii_lowercase();
        let action = match token.as_str() {
            "attack" => Self::Attack,
            "defend" => Self::Defend,
            "parry" => Self::Parry,
            "counter" => Self::Counter,
            "use item" | "useitem" | "use_item" => Self::UseItem,
            "run" => Self::Run,
            _ => return Err(ActionError::Unrecognized(input.trim().to_string())),
        };
        Ok(action)
    }

    /// Defensive actions are resolved as stances during the opponent's move.
    pub const fn is_defensive(&self) -> bool {
        matches!(self, Self::Defend | Self::Parry | Self::Counter)
    }

    /// Text label as typed by the player.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defend => "defend",
            Self::Parry => "parry",
            Self::Counter => "counter",
            Self::UseItem => "use item",
            Self::Run => "run",
        }
    }
}

impl core::str::FromStr for PlayerAction {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_and_ignores_case() {
        assert_eq!(PlayerAction::parse("  ATTACK "), Ok(PlayerAction::Attack));
        assert_eq!(PlayerAction::parse("Defend"), Ok(PlayerAction::Defend));
        assert_eq!(PlayerAction::parse("use item"), Ok(PlayerAction::UseItem));
        assert_eq!(PlayerAction::parse("useItem"), Ok(PlayerAction::UseItem));
    }

    #[test]
    fn parse_rejects_unknown_tokens() {
        assert_eq!(
            PlayerAction::parse(" dance "),
            Err(ActionError::Unrecognized("dance".to_string()))
        );
        assert!(PlayerAction::parse("").is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        for action in PlayerAction::ALL {
            assert_eq!(PlayerAction::parse(&action.to_string()), Ok(action));
            assert_eq!(action.to_string(), action.label());
        }
    }

    #[test]
    fn defensive_set() {
        assert!(PlayerAction::Parry.is_defensive());
        assert!(PlayerAction::Counter.is_defensive());
        assert!(!PlayerAction::Attack.is_defensive());
        assert!(!PlayerAction::UseItem.is_defensive());
    }
}
