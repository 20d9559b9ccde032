//! Item catalog.
//!
//! Definitions are static data; applying an effect to a character sheet is
//! the runtime's job.

use game_core::SkillKind;

/// Revival item consumed automatically when the player falls.
pub const PHOENIX_FEATHER: &str = "Phoenix's Feather";

/// What using an item does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemKind {
    /// Restores HP, clamped at max HP.
    Heal(u32),
    /// Restores HP to max.
    FullHeal,
    /// Raises the listed skills.
    Boost(&'static [(SkillKind, u32)]),
    /// Raises every skill by the same amount.
    BoostAll(u32),
    /// Adds a weapon and raises the listed skills.
    Arsenal {
        weapon: &'static str,
        min: u32,
        max: u32,
        boosts: &'static [(SkillKind, u32)],
    },
    /// Shifts every weapon band up, raises max HP and restores HP to max.
    Empower { weapon_bonus: u32, max_hp_bonus: u32 },
    /// Passive; triggers on defeat and cannot be used by hand.
    Revival,
}

/// One catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ItemDefinition {
    pub name: &'static str,
    pub kind: ItemKind,
    /// Usable once per save; recorded in the sheet's used items.
    pub one_shot: bool,
    /// Another one-shot item that must have been used first.
    pub requires: Option<&'static str>,
}

impl ItemDefinition {
    const fn new(name: &'static str, kind: ItemKind) -> Self {
        Self {
            name,
            kind,
            one_shot: false,
            requires: None,
        }
    }

    const fn once(mut self) -> Self {
        self.one_shot = true;
        self
    }

    const fn requiring(mut self, item: &'static str) -> Self {
        self.requires = Some(item);
        self
    }

    pub const fn is_passive(&self) -> bool {
        matches!(self.kind, ItemKind::Revival)
    }
}

const ASSASSIN_BOOST: &[(SkillKind, u32)] = &[(SkillKind::Agility, 5), (SkillKind::Accuracy, 5)];

const STANDARD_ITEMS: &[ItemDefinition] = &[
    ItemDefinition::new("Small Health Potion", ItemKind::Heal(20)),
    ItemDefinition::new("Medium Health Potion", ItemKind::Heal(50)),
    ItemDefinition::new("Large Health Potion", ItemKind::Heal(90)),
    ItemDefinition::new("Elite Health Potion", ItemKind::Heal(150)),
    ItemDefinition::new("Legendary Health Potion", ItemKind::Heal(200)),
    ItemDefinition::new("Divine Health Potion", ItemKind::Heal(300)),
    ItemDefinition::new("Wooden Shield", ItemKind::Boost(&[(SkillKind::Defence, 1)])),
    ItemDefinition::new("Assassin's Cloak", ItemKind::Boost(ASSASSIN_BOOST)).once(),
    ItemDefinition::new(
        "Assassin Build Scroll",
        ItemKind::Arsenal {
            weapon: "Assassin's Dagger",
            min: 100,
            max: 200,
            boosts: ASSASSIN_BOOST,
        },
    )
    .once()
    .requiring("Assassin's Cloak"),
    ItemDefinition::new(
        "Mystic Cloak",
        ItemKind::Empower {
            weapon_bonus: 50,
            max_hp_bonus: 50,
        },
    )
    .once(),
    ItemDefinition::new(PHOENIX_FEATHER, ItemKind::Revival),
    ItemDefinition::new("Infinity Heal", ItemKind::FullHeal),
    ItemDefinition::new("Infinity Buff", ItemKind::BoostAll(1)),
];

/// Lookup table from item name to definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemCatalog {
    items: Vec<ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(items: Vec<ItemDefinition>) -> Self {
        Self { items }
    }

    pub fn get(&self, name: &str) -> Option<&ItemDefinition> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemDefinition> {
        self.items.iter()
    }
}

impl Default for ItemCatalog {
    fn default() -> Self {
        Self::new(STANDARD_ITEMS.to_vec())
    }
}
