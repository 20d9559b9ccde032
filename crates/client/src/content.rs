//! Game content for a run: built-in tables with optional file overrides.
use anyhow::{Context, Result};
use game_content::{
    Bestiary, BestiaryLoader, BossRoster, ConfigLoader, ItemCatalog, ShopCatalog,
};
use game_core::GameConfig;

use crate::config::ClientConfig;

#[derive(Clone, Debug, Default)]
pub struct Content {
    pub config: GameConfig,
    pub bestiary: Bestiary,
    pub roster: BossRoster,
    pub items: ItemCatalog,
    pub shop: ShopCatalog,
}

impl Content {
    /// Loads the TOML config and RON bestiary named in `client`, if any.
    pub fn load(client: &ClientConfig) -> Result<Self> {
        let mut content = Self::default();

        if let Some(path) = &client.game_config {
            content.config = ConfigLoader::load(path)
                .with_context(|| format!("loading game config {}", path.display()))?;
            tracing::info!(path = %path.display(), "game config loaded");
        }

        if let Some(path) = &client.bestiary {
            content.bestiary = BestiaryLoader::load(path)
                .with_context(|| format!("loading bestiary {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                tables = content.bestiary.tables().len(),
                "bestiary loaded"
            );
        }

        Ok(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_overrides() {
        let content = Content::load(&ClientConfig::default()).unwrap();
        assert_eq!(content.config, GameConfig::default());
        assert!(!content.bestiary.tables().is_empty());
    }

    #[test]
    fn missing_override_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let client = ClientConfig {
            game_config: Some(dir.path().join("absent.toml")),
            ..ClientConfig::default()
        };
        let err = Content::load(&client).unwrap_err();
        assert!(format!("{err:#}").contains("absent.toml"));
    }

    #[test]
    fn config_override_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "[boss]\nenrage_threshold = 0.5\n").unwrap();
        let client = ClientConfig {
            game_config: Some(path),
            ..ClientConfig::default()
        };
        let content = Content::load(&client).unwrap();
        assert_eq!(content.config.boss.enrage_threshold, 0.5);
    }
}
