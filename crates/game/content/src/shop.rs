//! Shop and shopkeeper catalogs.

use crate::items::PHOENIX_FEATHER;

/// What a purchase hands over.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShopStock {
    /// Copies of a catalog item added to the inventory.
    Item,
    /// A weapon record added to the arsenal.
    Weapon { min: u32, max: u32 },
    /// One immediate level, without the HP growth of a regular level-up.
    LevelUp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopEntry {
    pub name: &'static str,
    pub cost: u32,
    pub min_level: u32,
    pub stock: ShopStock,
}

impl ShopEntry {
    const fn item(name: &'static str, cost: u32, min_level: u32) -> Self {
        Self {
            name,
            cost,
            min_level,
            stock: ShopStock::Item,
        }
    }

    const fn weapon(name: &'static str, cost: u32, min_level: u32, min: u32, max: u32) -> Self {
        Self {
            name,
            cost,
            min_level,
            stock: ShopStock::Weapon { min, max },
        }
    }

    pub const fn is_weapon(&self) -> bool {
        matches!(self.stock, ShopStock::Weapon { .. })
    }
}

const STANDARD_STOCK: &[ShopEntry] = &[
    ShopEntry::item("Small Health Potion", 20, 1),
    ShopEntry::weapon("Wooden Sword", 35, 1, 15, 30),
    ShopEntry::item("Medium Health Potion", 50, 2),
    ShopEntry::weapon("Stone Axe", 60, 2, 20, 40),
    ShopEntry::item("Wooden Shield", 80, 2),
    ShopEntry::item("Large Health Potion", 200, 3),
    ShopEntry::item("Assassin's Cloak", 300, 4),
    ShopEntry::weapon("Iron Sword", 350, 4, 45, 60),
    ShopEntry::item(PHOENIX_FEATHER, 400, 5),
    ShopEntry::item("Elite Health Potion", 400, 5),
    ShopEntry::weapon("Revolver", 450, 6, 100, 120),
    ShopEntry::item("Assassin Build Scroll", 550, 7),
    ShopEntry::item("Legendary Health Potion", 550, 7),
    ShopEntry::item("Divine Health Potion", 1000, 10),
    ShopEntry::weapon("Reaper's Scythe", 1000, 10, 150, 300),
    ShopEntry::item("Mystic Cloak", 1200, 12),
];

/// Entries the shop can sell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopCatalog {
    entries: Vec<ShopEntry>,
}

impl ShopCatalog {
    pub fn new(entries: Vec<ShopEntry>) -> Self {
        Self { entries }
    }

    /// Entries unlocked at `level`, in catalog order. Purchase indices are
    /// 1-based over this list.
    pub fn available_for_level(&self, level: u32) -> Vec<&ShopEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.min_level <= level)
            .collect()
    }

    /// The shopkeeper's specials; the level-up price scales with `level`.
    pub fn shopkeeper_specials(level: u32) -> Vec<ShopEntry> {
        vec![
            ShopEntry::item("Infinity Heal", 300, 1),
            ShopEntry::item("Infinity Buff", 300, 1),
            ShopEntry {
                name: "Level Up",
                cost: 300u32.saturating_mul(level),
                min_level: 1,
                stock: ShopStock::LevelUp,
            },
        ]
    }
}

impl Default for ShopCatalog {
    fn default() -> Self {
        Self::new(STANDARD_STOCK.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_gates_stock() {
        let catalog = ShopCatalog::default();
        let names: Vec<_> = catalog
            .available_for_level(1)
            .iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(names, vec!["Small Health Potion", "Wooden Sword"]);
        assert_eq!(catalog.available_for_level(12).len(), STANDARD_STOCK.len());
    }

    #[test]
    fn weapons_carry_bands() {
        let catalog = ShopCatalog::default();
        let axe = catalog
            .available_for_level(2)
            .into_iter()
            .find(|entry| entry.name == "Stone Axe")
            .unwrap();
        assert_eq!(axe.stock, ShopStock::Weapon { min: 20, max: 40 });
        assert!(axe.is_weapon());
    }

    #[test]
    fn level_up_price_scales() {
        let specials = ShopCatalog::shopkeeper_specials(7);
        let level_up = specials.iter().find(|e| e.stock == ShopStock::LevelUp).unwrap();
        assert_eq!(level_up.cost, 2100);
    }
}
