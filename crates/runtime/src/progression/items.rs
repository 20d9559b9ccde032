//! Item use and weapon selection outside the battle engine.

use game_content::{ItemCatalog, ItemKind};
use game_core::{CharacterSheet, SkillKind, Weapon};

use super::error::ItemError;

/// What an item did to the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ItemOutcome {
    Healed { item: String, amount: u32, hp: u32 },
    Boosted { item: String, skills: Vec<(SkillKind, u32)> },
    WeaponGained { item: String, weapon: String },
    Empowered { item: String, max_hp: u32 },
}

impl std::fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healed { item, amount, hp } => {
                write!(f, "{item} restores {amount} HP. You now have {hp} HP.")
            }
            Self::Boosted { item, skills } => {
                write!(f, "{item} takes effect:")?;
                for (kind, value) in skills {
                    write!(f, " {kind} {value}")?;
                }
                Ok(())
            }
            Self::WeaponGained { item, weapon } => {
                write!(f, "{item} grants you the {weapon}!")
            }
            Self::Empowered { item, max_hp } => {
                write!(f, "{item} empowers every weapon. Max HP is now {max_hp}.")
            }
        }
    }
}

/// Uses the item at 1-based `index` of [`CharacterSheet::item_counts`].
///
/// Any error leaves the sheet unchanged. A successful use consumes one copy;
/// one-shot items are also recorded as used.
pub fn use_item(
    sheet: &mut CharacterSheet,
    catalog: &ItemCatalog,
    index: usize,
) -> Result<ItemOutcome, ItemError> {
    let counts = sheet.item_counts();
    if counts.is_empty() {
        return Err(ItemError::EmptyInventory);
    }
    let Some((name, _)) = index.checked_sub(1).and_then(|i| counts.get(i)) else {
        return Err(ItemError::InvalidSelection {
            index,
            len: counts.len(),
        });
    };
    let name = name.clone();

    let definition = catalog
        .get(&name)
        .ok_or_else(|| ItemError::Unknown(name.clone()))?;
    if definition.is_passive() {
        return Err(ItemError::Passive(name));
    }
    if definition.one_shot && sheet.has_used(&name) {
        return Err(ItemError::AlreadyUsed(name));
    }
    if let Some(requires) = definition.requires.filter(|item| !sheet.has_used(item)) {
        return Err(ItemError::MissingRequirement {
            item: name,
            requires: requires.to_string(),
        });
    }

    // Validate anything fallible before mutating.
    let granted = match definition.kind {
        ItemKind::Arsenal { weapon, min, max, .. } => Some(Weapon::new(weapon, min, max)?),
        _ => None,
    };

    let outcome = match definition.kind {
        ItemKind::Heal(amount) => {
            let applied = amount.min(sheet.max_hp.saturating_sub(sheet.hp));
            sheet.hp += applied;
            ItemOutcome::Healed {
                item: name.clone(),
                amount: applied,
                hp: sheet.hp,
            }
        }
        ItemKind::FullHeal => {
            let applied = sheet.max_hp.saturating_sub(sheet.hp);
            sheet.hp = sheet.max_hp;
            ItemOutcome::Healed {
                item: name.clone(),
                amount: applied,
                hp: sheet.hp,
            }
        }
        ItemKind::Boost(boosts) => ItemOutcome::Boosted {
            item: name.clone(),
            skills: apply_boosts(sheet, boosts.iter().copied()),
        },
        ItemKind::BoostAll(amount) => ItemOutcome::Boosted {
            item: name.clone(),
            skills: apply_boosts(sheet, SkillKind::ALL.into_iter().map(|kind| (kind, amount))),
        },
        ItemKind::Arsenal { boosts, .. } => {
            apply_boosts(sheet, boosts.iter().copied());
            let weapon = granted.ok_or_else(|| ItemError::Unknown(name.clone()))?;
            let weapon_name = weapon.name.clone();
            sheet.weapons.push(weapon);
            ItemOutcome::WeaponGained {
                item: name.clone(),
                weapon: weapon_name,
            }
        }
        ItemKind::Empower {
            weapon_bonus,
            max_hp_bonus,
        } => {
            for weapon in &mut sheet.weapons {
                weapon.empower(weapon_bonus);
            }
            sheet.max_hp = sheet.max_hp.saturating_add(max_hp_bonus);
            sheet.hp = sheet.max_hp;
            ItemOutcome::Empowered {
                item: name.clone(),
                max_hp: sheet.max_hp,
            }
        }
        ItemKind::Revival => return Err(ItemError::Passive(name)),
    };

    sheet.remove_item(&name);
    if definition.one_shot {
        sheet.used_items.push(name);
    }
    tracing::info!(?outcome, "item used");
    Ok(outcome)
}

fn apply_boosts(
    sheet: &mut CharacterSheet,
    boosts: impl Iterator<Item = (SkillKind, u32)>,
) -> Vec<(SkillKind, u32)> {
    boosts
        .map(|(kind, amount)| (kind, sheet.skills.add(kind, amount)))
        .collect()
}

/// Equips the weapon at 1-based `index`.
pub fn equip(sheet: &mut CharacterSheet, index: usize) -> Result<&Weapon, ItemError> {
    let len = sheet.weapons.len();
    match index.checked_sub(1).filter(|&i| i < len) {
        Some(slot) => {
            sheet.equipped = slot;
            Ok(&sheet.weapons[slot])
        }
        None => Err(ItemError::InvalidSelection { index, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::PHOENIX_FEATHER;

    fn sheet_with(items: &[&str]) -> CharacterSheet {
        let mut sheet = CharacterSheet::new_game();
        sheet.inventory = items.iter().map(|s| s.to_string()).collect();
        sheet
    }

    #[test]
    fn potion_heals_and_clamps() {
        let catalog = ItemCatalog::default();
        let mut sheet = sheet_with(&["Medium Health Potion"]);
        sheet.hp = 80;
        let outcome = use_item(&mut sheet, &catalog, 1).unwrap();
        assert_eq!(
            outcome,
            ItemOutcome::Healed {
                item: "Medium Health Potion".into(),
                amount: 20,
                hp: 100
            }
        );
        assert!(sheet.inventory.is_empty());
    }

    #[test]
    fn out_of_range_index_leaves_sheet_unchanged() {
        let catalog = ItemCatalog::default();
        let mut sheet = sheet_with(&["Small Health Potion", "Small Health Potion"]);
        sheet.hp = 10;
        let before = sheet.clone();
        assert_eq!(
            use_item(&mut sheet, &catalog, 2),
            Err(ItemError::InvalidSelection { index: 2, len: 1 })
        );
        assert_eq!(use_item(&mut sheet, &catalog, 0).unwrap_err(), ItemError::InvalidSelection { index: 0, len: 1 });
        assert_eq!(sheet, before);
    }

    #[test]
    fn empty_inventory() {
        let catalog = ItemCatalog::default();
        let mut sheet = CharacterSheet::new_game();
        assert_eq!(use_item(&mut sheet, &catalog, 1), Err(ItemError::EmptyInventory));
    }

    #[test]
    fn feather_cannot_be_used_by_hand() {
        let catalog = ItemCatalog::default();
        let mut sheet = sheet_with(&[PHOENIX_FEATHER]);
        assert!(matches!(
            use_item(&mut sheet, &catalog, 1),
            Err(ItemError::Passive(_))
        ));
        assert_eq!(sheet.inventory.len(), 1);
    }

    #[test]
    fn build_scroll_needs_cloak_then_grants_dagger() {
        let catalog = ItemCatalog::default();
        let mut sheet = sheet_with(&["Assassin Build Scroll", "Assassin's Cloak"]);
        assert!(matches!(
            use_item(&mut sheet, &catalog, 1),
            Err(ItemError::MissingRequirement { .. })
        ));

        use_item(&mut sheet, &catalog, 2).unwrap();
        assert_eq!(sheet.skills.agility, 5);
        assert!(sheet.has_used("Assassin's Cloak"));

        let outcome = use_item(&mut sheet, &catalog, 1).unwrap();
        assert!(matches!(outcome, ItemOutcome::WeaponGained { .. }));
        assert_eq!(sheet.weapons.last().unwrap().name, "Assassin's Dagger");
        assert_eq!(sheet.skills.accuracy, 10);
    }

    #[test]
    fn one_shot_item_is_refused_the_second_time() {
        let catalog = ItemCatalog::default();
        let mut sheet = sheet_with(&["Assassin's Cloak", "Assassin's Cloak"]);
        use_item(&mut sheet, &catalog, 1).unwrap();
        assert_eq!(
            use_item(&mut sheet, &catalog, 1),
            Err(ItemError::AlreadyUsed("Assassin's Cloak".into()))
        );
        assert_eq!(sheet.skills.agility, 5);
    }

    #[test]
    fn mystic_cloak_empowers_every_weapon() {
        let catalog = ItemCatalog::default();
        let mut sheet = sheet_with(&["Mystic Cloak"]);
        sheet.weapons.push(Weapon::new("Stone Axe", 20, 40).unwrap());
        sheet.hp = 3;
        use_item(&mut sheet, &catalog, 1).unwrap();
        assert_eq!(sheet.max_hp, 150);
        assert_eq!(sheet.hp, 150);
        assert_eq!(sheet.weapons[0].band.min(), 55);
        assert_eq!(sheet.weapons[1].band.max(), 90);
    }

    #[test]
    fn equip_checks_range() {
        let mut sheet = CharacterSheet::new_game();
        sheet.weapons.push(Weapon::new("Iron Sword", 45, 60).unwrap());
        assert_eq!(equip(&mut sheet, 2).unwrap().name, "Iron Sword");
        assert_eq!(sheet.equipped, 1);
        assert_eq!(
            equip(&mut sheet, 3),
            Err(ItemError::InvalidSelection { index: 3, len: 2 })
        );
        assert_eq!(sheet.equipped, 1);
    }
}
