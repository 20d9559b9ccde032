//! Game configuration loader.

use std::path::Path;

use game_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing sections and fields keep their default values, so a file only
    /// needs to list what it changes.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a config and rejects tunables the combat rules cannot run with.
    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_overrides_only_listed_fields() {
        let config = ConfigLoader::parse(
            r#"
            [boss]
            enrage_threshold = 0.5

            [offense]
            critical_multiplier = 2.0
            "#,
        )
        .unwrap();
        let defaults = GameConfig::default();
        assert_eq!(config.boss.enrage_threshold, 0.5);
        assert_eq!(config.offense.critical_multiplier, 2.0);
        assert_eq!(config.boss.heal_score, defaults.boss.heal_score);
        assert_eq!(config.mitigation, defaults.mitigation);
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[progression]\nxp_per_level = 150").unwrap();
        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.progression.xp_per_level, 150);
    }

    #[test]
    fn tie_break_ratio_outside_unit_range_is_rejected() {
        let err = ConfigLoader::parse("[boss]\ntie_break_ratio = 1.5\n").unwrap_err();
        assert!(err.to_string().contains("tie_break_ratio"));
        assert!(ConfigLoader::parse("[boss]\ntie_break_ratio = nan\n").is_err());
        assert!(ConfigLoader::parse("[boss]\ntie_break_ratio = 0.0\n").is_err());
        assert!(ConfigLoader::parse("[boss]\ntie_break_ratio = 1.0\n").is_ok());
    }

    #[test]
    fn non_finite_multiplier_is_rejected() {
        let err = ConfigLoader::parse("[offense]\ncritical_multiplier = inf\n").unwrap_err();
        assert!(err.to_string().contains("critical_multiplier"));
    }

    #[test]
    fn zero_xp_per_level_is_rejected() {
        let err = ConfigLoader::parse("[progression]\nxp_per_level = 0\n").unwrap_err();
        assert!(err.to_string().contains("xp_per_level"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(ConfigLoader::load(&dir.path().join("absent.toml")).is_err());
    }
}
