//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders that override it:
//! - Per-level monster tables (built in, or RON via [`loaders::BestiaryLoader`])
//! - Boss definitions and their milestone levels
//! - Item catalog
//! - Shop and shopkeeper stock
//! - Game configuration (TOML via [`loaders::ConfigLoader`])
//!
//! Content is consumed by the runtime and never appears in battle state.

pub mod bestiary;
pub mod bosses;
pub mod items;
pub mod shop;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bestiary::{Bestiary, LevelTable, MonsterTemplate};
pub use bosses::{BossDefinition, BossRoster, drago, spidey};
pub use items::{ItemCatalog, ItemDefinition, ItemKind, PHOENIX_FEATHER};
pub use shop::{ShopCatalog, ShopEntry, ShopStock};

#[cfg(feature = "loaders")]
pub use loaders::{BestiaryLoader, ConfigLoader};
