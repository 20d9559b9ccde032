//! Bestiary loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::bestiary::{Bestiary, LevelTable};
use crate::loaders::{LoadResult, read_file};

/// Bestiary file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BestiaryFile {
    pub tables: Vec<LevelTable>,
}

/// Loader for per-level monster tables from RON files.
pub struct BestiaryLoader;

impl BestiaryLoader {
    pub fn load(path: &Path) -> LoadResult<Bestiary> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a bestiary and rejects tables a roll could never resolve.
    pub fn parse(content: &str) -> LoadResult<Bestiary> {
        let file: BestiaryFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse bestiary RON: {}", e))?;

        if file.tables.is_empty() {
            anyhow::bail!("Bestiary has no level tables");
        }
        for table in &file.tables {
            if table.monsters.is_empty() {
                anyhow::bail!("Bestiary table for level {} is empty", table.level);
            }
            if let Some(monster) = table.monsters.iter().find(|m| m.damage == 0 || m.hp == 0) {
                anyhow::bail!(
                    "Monster {} at level {} needs non-zero hp and damage",
                    monster.name,
                    table.level
                );
            }
        }

        Ok(Bestiary::new(file.tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"(
        tables: [
            (
                level: 5,
                monsters: [
                    (name: "Ogre", hp: 300, damage: 60, gold: 100, chance: 100, xp: 120),
                ],
            ),
            (
                level: 1,
                monsters: [
                    (name: "Slime", hp: 90, damage: 28, gold: 50, chance: 60, xp: 55),
                    (name: "Rat", hp: 95, damage: 32, gold: 54, chance: 100, xp: 58),
                ],
            ),
        ],
    )"#;

    #[test]
    fn parses_and_orders_tables() {
        let bestiary = BestiaryLoader::parse(SAMPLE).unwrap();
        assert_eq!(bestiary.tables()[0].level, 1);
        assert_eq!(bestiary.select(3, 61).unwrap().name, "Rat");
        assert_eq!(bestiary.select(9, 0).unwrap().name, "Ogre");
    }

    #[test]
    fn rejects_empty_tables() {
        let err = BestiaryLoader::parse("(tables: [(level: 1, monsters: [])])").unwrap_err();
        assert!(err.to_string().contains("level 1"));
        assert!(BestiaryLoader::parse("(tables: [])").is_err());
    }

    #[test]
    fn rejects_zero_damage() {
        let content = r#"(tables: [(level: 1, monsters: [
            (name: "Ghost", hp: 10, damage: 0, gold: 1, chance: 100, xp: 1),
        ])])"#;
        assert!(BestiaryLoader::parse(content).is_err());
    }
}
