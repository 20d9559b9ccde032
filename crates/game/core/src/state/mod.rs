//! Battle and persisted player state.
//!
//! [`Combatant`] is the per-encounter fighting entity; [`CharacterSheet`] is
//! what survives between encounters. Battles mutate combatants only through
//! [`crate::engine::Battle`].
pub mod combatant;
pub mod cooldowns;
pub mod error;
pub mod sheet;
pub mod weapon;

pub use combatant::{Combatant, Side, StatusFlags};
pub use cooldowns::Cooldowns;
pub use error::{SheetError, WeaponError};
pub use sheet::{CharacterSheet, RepairReport};
pub use weapon::{DamageBand, Weapon};
