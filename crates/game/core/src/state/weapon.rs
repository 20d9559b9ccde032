//! Weapons and damage bands.
//!
//! Bands deserialize without checks so that a damaged save can still be read
//! and repaired; [`DamageBand::check`] is the gate every loaded record passes.

use super::error::WeaponError;

/// Inclusive `[min, max]` damage range with `0 < min < max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageBand {
    min: u32,
    max: u32,
}

impl DamageBand {
    /// Creates a validated band.
    pub fn new(min: u32, max: u32) -> Result<Self, WeaponError> {
        let band = Self { min, max };
        band.check()?;
        Ok(band)
    }

    /// Normalizes arbitrary bounds into a valid band.
    ///
    /// `min` is raised to at least 1 and `max` to at least `min + 1`. Used for
    /// compiled-in move tables where the bounds are known to be sane.
    pub const fn clamped(min: u32, max: u32) -> Self {
        let min = if min == 0 { 1 } else { min };
        let max = if max <= min { min + 1 } else { max };
        Self { min, max }
    }

    /// Band whose lower end is `round(floor × peak)`, as used for monster strikes.
    pub fn from_peak(peak: u32, floor: f64) -> Self {
        let min = ((peak as f64) * floor).round() as u32;
        Self::clamped(min.min(peak.saturating_sub(1)), peak)
    }

    #[cfg(test)]
    pub(crate) const fn unchecked(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Verifies `0 < min < max`.
    pub fn check(&self) -> Result<(), WeaponError> {
        if self.min == 0 {
            return Err(WeaponError::ZeroMinimum);
        }
        if self.max <= self.min {
            return Err(WeaponError::InvertedBand {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    /// Shifts both ends up by `bonus`.
    #[must_use]
    pub fn shifted(&self, bonus: u32) -> Self {
        Self {
            min: self.min.saturating_add(bonus),
            max: self.max.saturating_add(bonus),
        }
    }
}

impl core::fmt::Display for DamageBand {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} - {}", self.min, self.max)
    }
}

/// A named weapon in the player's arsenal.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub band: DamageBand,
}

impl Weapon {
    pub fn new(name: impl Into<String>, min: u32, max: u32) -> Result<Self, WeaponError> {
        let weapon = Self {
            name: name.into(),
            band: DamageBand { min, max },
        };
        weapon.check()?;
        Ok(weapon)
    }

    /// The bare-handed starting weapon.
    pub fn fists() -> Self {
        Self {
            name: "Fists".to_string(),
            band: DamageBand { min: 5, max: 15 },
        }
    }

    pub fn check(&self) -> Result<(), WeaponError> {
        if self.name.trim().is_empty() {
            return Err(WeaponError::EmptyName);
        }
        self.band.check()
    }

    /// Raises both ends of the band.
    pub fn empower(&mut self, bonus: u32) {
        self.band = self.band.shifted(bonus);
    }
}

impl core::fmt::Display for Weapon {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {} dmg", self.name, self.band)
    }
}
