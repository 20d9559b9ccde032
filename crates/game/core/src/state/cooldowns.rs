//! Per-move cooldown counters.

use std::collections::BTreeMap;

use crate::moves::MoveId;

/// Turns remaining before each move becomes selectable again.
///
/// Moves without an entry are ready. Values never go below zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cooldowns {
    remaining: BTreeMap<MoveId, u32>,
}

impl Cooldowns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: MoveId) -> u32 {
        self.remaining.get(&id).copied().unwrap_or(0)
    }

    pub fn set(&mut self, id: MoveId, turns: u32) {
        self.remaining.insert(id, turns);
    }

    /// A move is selectable only when its counter is exactly zero.
    pub fn is_ready(&self, id: MoveId) -> bool {
        self.get(id) == 0
    }

    /// Decrements every counter by one, floored at zero.
    pub fn tick(&mut self) {
        for turns in self.remaining.values_mut() {
            *turns = turns.saturating_sub(1);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoveId, u32)> + '_ {
        self.remaining.iter().map(|(id, turns)| (*id, *turns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAL: MoveId = MoveId::new("heal");
    const TAIL: MoveId = MoveId::new("tail_swipe");

    #[test]
    fn tick_decrements_and_floors() {
        let mut cooldowns = Cooldowns::new();
        cooldowns.set(HEAL, 2);
        cooldowns.set(TAIL, 0);
        cooldowns.tick();
        assert_eq!(cooldowns.get(HEAL), 1);
        assert_eq!(cooldowns.get(TAIL), 0);
        cooldowns.tick();
        cooldowns.tick();
        assert_eq!(cooldowns.get(HEAL), 0);
        assert!(cooldowns.is_ready(HEAL));
    }

    #[test]
    fn tick_on_zeroed_map_is_idempotent() {
        let mut cooldowns = Cooldowns::new();
        cooldowns.set(HEAL, 0);
        cooldowns.set(TAIL, 0);
        let before = cooldowns.clone();
        cooldowns.tick();
        assert_eq!(cooldowns, before);
    }

    #[test]
    fn tick_matches_saturating_decrement_for_every_value() {
        for start in 0..6u32 {
            let mut cooldowns = Cooldowns::new();
            cooldowns.set(HEAL, start);
            cooldowns.tick();
            assert_eq!(cooldowns.get(HEAL), start.saturating_sub(1));
            assert_eq!(cooldowns.is_ready(HEAL), start <= 1);
        }
    }

    #[test]
    fn unknown_move_is_ready() {
        assert!(Cooldowns::new().is_ready(MoveId::new("anything")));
    }
}
