//! Boss move registry.
//!
//! Every boss move is a data record: an identifier, a damage band, a cooldown,
//! the player actions it reacts to and a [`MoveKind`] that selects the
//! mitigation rules applied against it. Move behaviour never branches on the
//! move's name.

use crate::action::PlayerAction;
use crate::state::{Cooldowns, DamageBand};

/// Stable identifier of a boss move, used as the cooldown key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MoveId(&'static str);

impl MoveId {
    pub const fn new(id: &'static str) -> Self {
        Self(id)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl core::fmt::Display for MoveId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.0)
    }
}

/// Behavioural family of a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Single burst of damage.
    Strike,
    /// Single hit designed to punish `defend`.
    GuardBreak,
    /// Damage split into `hits` equal sub-hits, designed to punish `counter`.
    MultiHit { hits: u8 },
    /// Commits the boss to releasing its stored move next turn. No damage.
    Charge,
    /// The stored move. Only selectable while charging.
    Release,
    /// Restores the boss's own HP.
    Heal,
}

impl MoveKind {
    /// Whether the move deals damage to the player.
    pub const fn is_damaging(&self) -> bool {
        matches!(
            self,
            Self::Strike | Self::GuardBreak | Self::MultiHit { .. } | Self::Release
        )
    }

    /// Number of sub-hits the rolled damage is split into.
    pub const fn hit_count(&self) -> u8 {
        match self {
            Self::MultiHit { hits } if *hits > 1 => *hits,
            _ => 1,
        }
    }
}

/// A single boss move record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BossMove {
    pub id: MoveId,
    /// Display name used in narration.
    pub name: &'static str,
    /// Flavor line announced when the move is chosen.
    pub note: &'static str,
    pub kind: MoveKind,
    /// Damage (or heal amount for [`MoveKind::Heal`]). `None` for a charge.
    pub band: Option<DamageBand>,
    /// Cooldown applied on execution.
    pub cooldown: u32,
    /// Player actions this move is favored against.
    pub reacts_to: &'static [PlayerAction],
    /// HP ratio at or below which a heal becomes eligible.
    pub heal_threshold: Option<f64>,
}

impl BossMove {
    pub const fn new(id: &'static str, name: &'static str, kind: MoveKind) -> Self {
        Self {
            id: MoveId::new(id),
            name,
            note: "",
            kind,
            band: None,
            cooldown: 0,
            reacts_to: &[],
            heal_threshold: None,
        }
    }

    #[must_use]
    pub const fn with_note(mut self, note: &'static str) -> Self {
        self.note = note;
        self
    }

    #[must_use]
    pub const fn with_band(mut self, min: u32, max: u32) -> Self {
        self.band = Some(DamageBand::clamped(min, max));
        self
    }

    #[must_use]
    pub const fn with_cooldown(mut self, turns: u32) -> Self {
        self.cooldown = turns;
        self
    }

    #[must_use]
    pub const fn reacting_to(mut self, actions: &'static [PlayerAction]) -> Self {
        self.reacts_to = actions;
        self
    }

    #[must_use]
    pub const fn with_heal_threshold(mut self, ratio: f64) -> Self {
        self.heal_threshold = Some(ratio);
        self
    }

    /// Whether this move is favored against the given player action.
    pub fn reacts_to(&self, action: Option<PlayerAction>) -> bool {
        action.is_some_and(|action| self.reacts_to.contains(&action))
    }
}

/// All moves a boss can use, plus the fallback used when nothing else scores.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveSet {
    moves: Vec<BossMove>,
    fallback: BossMove,
}

impl MoveSet {
    pub fn new(moves: Vec<BossMove>, fallback: BossMove) -> Self {
        Self { moves, fallback }
    }

    pub fn get(&self, id: MoveId) -> Option<&BossMove> {
        self.moves.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BossMove> {
        self.moves.iter()
    }

    /// Moves whose cooldown is zero.
    pub fn ready_moves<'a>(
        &'a self,
        cooldowns: &'a Cooldowns,
    ) -> impl Iterator<Item = &'a BossMove> + 'a {
        self.moves.iter().filter(|m| cooldowns.is_ready(m.id))
    }

    /// The stored move executed after a charge. Falls back to the desperate
    /// attack when the set has no release move.
    pub fn release_move(&self) -> &BossMove {
        self.moves
            .iter()
            .find(|m| m.kind == MoveKind::Release)
            .unwrap_or(&self.fallback)
    }

    pub fn charge_move(&self) -> Option<&BossMove> {
        self.moves.iter().find(|m| m.kind == MoveKind::Charge)
    }

    pub fn fallback(&self) -> &BossMove {
        &self.fallback
    }
}
