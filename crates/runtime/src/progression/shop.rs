//! Purchases from the shop and the shopkeeper.

use game_content::{ShopEntry, ShopStock};
use game_core::{CharacterSheet, Weapon};

use super::error::ShopError;

/// What a purchase added to the sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Purchase {
    Weapon(String),
    Items { name: String, count: u32 },
    Level(u32),
    /// A zero-count order; nothing changed hands.
    Nothing,
}

/// Buys the entry at 1-based `index` of `entries`.
///
/// Weapons and level-ups ignore `count`. Gold is only taken once every check
/// has passed.
pub fn buy(
    sheet: &mut CharacterSheet,
    entries: &[&ShopEntry],
    index: usize,
    count: u32,
) -> Result<Purchase, ShopError> {
    let entry = index
        .checked_sub(1)
        .and_then(|i| entries.get(i))
        .ok_or(ShopError::InvalidSelection {
            index,
            len: entries.len(),
        })?;

    let units = match entry.stock {
        ShopStock::Item => count,
        ShopStock::Weapon { .. } | ShopStock::LevelUp => 1,
    };
    if units == 0 {
        return Ok(Purchase::Nothing);
    }

    let cost = entry.cost.saturating_mul(units);
    if cost > sheet.gold {
        return Err(ShopError::InsufficientGold {
            cost,
            gold: sheet.gold,
        });
    }

    let purchase = match entry.stock {
        ShopStock::Weapon { min, max } => {
            let weapon = Weapon::new(entry.name, min, max)?;
            sheet.weapons.push(weapon);
            Purchase::Weapon(entry.name.to_string())
        }
        ShopStock::Item => {
            sheet
                .inventory
                .extend(std::iter::repeat_n(entry.name.to_string(), units as usize));
            Purchase::Items {
                name: entry.name.to_string(),
                count: units,
            }
        }
        ShopStock::LevelUp => {
            sheet.level += 1;
            Purchase::Level(sheet.level)
        }
    };
    sheet.gold -= cost;
    tracing::info!(?purchase, cost, gold = sheet.gold, "purchase complete");
    Ok(purchase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_content::ShopCatalog;

    #[test]
    fn buying_potions_adds_copies() {
        let catalog = ShopCatalog::default();
        let entries = catalog.available_for_level(1);
        let mut sheet = CharacterSheet::new_game();
        sheet.gold = 100;

        let purchase = buy(&mut sheet, &entries, 1, 3).unwrap();
        assert_eq!(
            purchase,
            Purchase::Items {
                name: "Small Health Potion".into(),
                count: 3
            }
        );
        assert_eq!(sheet.gold, 40);
        assert_eq!(sheet.inventory.len(), 3);
    }

    #[test]
    fn weapon_ignores_count() {
        let catalog = ShopCatalog::default();
        let entries = catalog.available_for_level(1);
        let mut sheet = CharacterSheet::new_game();
        sheet.gold = 100;

        buy(&mut sheet, &entries, 2, 5).unwrap();
        assert_eq!(sheet.gold, 65);
        assert_eq!(sheet.weapons.len(), 2);
        assert_eq!(sheet.weapons[1].band.max(), 30);
    }

    #[test]
    fn not_enough_gold_changes_nothing() {
        let catalog = ShopCatalog::default();
        let entries = catalog.available_for_level(1);
        let mut sheet = CharacterSheet::new_game();
        sheet.gold = 30;
        let before = sheet.clone();

        assert_eq!(
            buy(&mut sheet, &entries, 1, 2),
            Err(ShopError::InsufficientGold { cost: 40, gold: 30 })
        );
        assert_eq!(
            buy(&mut sheet, &entries, 3, 1),
            Err(ShopError::InvalidSelection { index: 3, len: 2 })
        );
        assert_eq!(sheet, before);
    }

    #[test]
    fn level_up_special() {
        let specials = ShopCatalog::shopkeeper_specials(2);
        let entries: Vec<_> = specials.iter().collect();
        let mut sheet = CharacterSheet::new_game();
        sheet.level = 2;
        sheet.gold = 700;

        assert_eq!(buy(&mut sheet, &entries, 3, 1).unwrap(), Purchase::Level(3));
        assert_eq!(sheet.gold, 100);
        assert_eq!(sheet.max_hp, 100);
    }
}
