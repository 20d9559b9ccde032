//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Settings for one run of the terminal client.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Where save files live; platform data dir when unset.
    pub save_dir: Option<PathBuf>,
    /// TOML file overriding the default game constants.
    pub game_config: Option<PathBuf>,
    /// RON file replacing the built-in bestiary.
    pub bestiary: Option<PathBuf>,
    pub session_id: Option<String>,
    pub autosave: bool,
    /// Per-character delay of the typewriter effect. Zero prints lines at once.
    pub text_delay: Duration,
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DOODLE_SAVE_DIR` - Directory for save files (default: platform-specific)
    /// - `DOODLE_CONFIG` - TOML file with game constants (default: built-in table)
    /// - `DOODLE_BESTIARY` - RON file with per-level monsters (default: built-in)
    /// - `DOODLE_SESSION_ID` - Session name, also the autosave slot (default: generated)
    /// - `DOODLE_AUTOSAVE` - Save after every command (default: false)
    /// - `DOODLE_TEXT_DELAY_MS` - Typewriter delay per character (default: 0)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let mut config = Self {
            save_dir: read("DOODLE_SAVE_DIR").map(PathBuf::from),
            game_config: read("DOODLE_CONFIG").map(PathBuf::from),
            bestiary: read("DOODLE_BESTIARY").map(PathBuf::from),
            session_id: read("DOODLE_SESSION_ID"),
            ..Self::default()
        };

        if let Some(raw) = read("DOODLE_AUTOSAVE") {
            config.autosave = parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(value = %raw, "ignoring unrecognized DOODLE_AUTOSAVE");
                false
            });
        }

        if let Some(ms) = read("DOODLE_TEXT_DELAY_MS").and_then(|raw| parse_env::<u64>(&raw)) {
            config.text_delay = Duration::from_millis(ms.min(200));
        }

        config
    }
}

/// Accepts the usual spellings of a boolean switch.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_env<T>(raw: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    raw.trim().parse().ok()
}
