//! Out-of-battle commands typed at the main prompt.
use std::fmt;

/// A parsed top-level command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Explore,
    Status,
    Shop,
    UseItem,
    Equip,
    Save(Option<String>),
    Load(Option<String>),
    /// `None` toggles.
    Autosave(Option<bool>),
    Help,
    Quit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl fmt::Display for UnknownCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown command '{}', type 'help' for a list", self.0)
    }
}

impl std::error::Error for UnknownCommand {}

impl Command {
    /// Parses a trimmed, case-insensitive command with an optional argument.
    pub fn parse(line: &str) -> Result<Self, UnknownCommand> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or_default().to_ascii_lowercase();
        let arg = words.next().map(str::to_string);

        let command = match head.as_str() {
            "explore" | "e" => Self::Explore,
            "status" | "stats" | "s" => Self::Status,
            "shop" => Self::Shop,
            "use" | "item" | "u" => Self::UseItem,
            "equip" => Self::Equip,
            "save" => Self::Save(arg),
            "load" => Self::Load(arg),
            "autosave" => match arg.as_deref() {
                None => Self::Autosave(None),
                Some(raw) => match crate::config::parse_flag(raw) {
                    Some(enabled) => Self::Autosave(Some(enabled)),
                    None => return Err(UnknownCommand(line.trim().to_string())),
                },
            },
            "help" | "h" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            _ => return Err(UnknownCommand(line.trim().to_string())),
        };
        Ok(command)
    }
}

pub const HELP: &[(&str, &str)] = &[
    ("explore", "venture out and see what you find"),
    ("status", "show your level, HP, gold, weapons and skills"),
    ("shop", "buy potions, gear and weapons"),
    ("use", "use an item from your inventory"),
    ("equip", "pick which weapon to wield"),
    ("save [slot]", "save the game"),
    ("load [slot]", "load a saved game"),
    ("autosave [on|off]", "save after every command"),
    ("help", "show this list"),
    ("quit", "leave the game"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands_case_insensitively() {
        assert_eq!(Command::parse("  EXPLORE "), Ok(Command::Explore));
        assert_eq!(Command::parse("Status"), Ok(Command::Status));
        assert_eq!(Command::parse("use"), Ok(Command::UseItem));
        assert_eq!(Command::parse("q"), Ok(Command::Quit));
    }

    #[test]
    fn keeps_slot_arguments() {
        assert_eq!(
            Command::parse("save hero"),
            Ok(Command::Save(Some("hero".to_string())))
        );
        assert_eq!(Command::parse("load"), Ok(Command::Load(None)));
    }

    #[test]
    fn autosave_switch() {
        assert_eq!(Command::parse("autosave"), Ok(Command::Autosave(None)));
        assert_eq!(Command::parse("autosave ON"), Ok(Command::Autosave(Some(true))));
        assert_eq!(Command::parse("autosave off"), Ok(Command::Autosave(Some(false))));
        assert!(Command::parse("autosave sometimes").is_err());
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert_eq!(
            Command::parse("dance"),
            Err(UnknownCommand("dance".to_string()))
        );
        assert!(Command::parse("   ").is_err());
    }
}
