//! Injectable random source.
//!
//! Combat rules never reach for a global generator: every roll goes through a
//! [`RngSource`] handed in by the caller. The runtime wraps a real PRNG, tests
//! feed a [`ScriptedRng`] so they can force hits, misses and exact damage.

use std::collections::VecDeque;

/// Random source consumed by the resolver and the decision engine.
///
/// There is no seeding contract; implementations only promise that draws stay
/// inside the requested bounds.
pub trait RngSource {
    /// Uniform integer in `[lo, hi]` inclusive. Returns `lo` when `hi <= lo`.
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32;

    /// Returns true with probability `p` (clamped to `[0, 1]`).
    fn chance(&mut self, p: f64) -> bool;

    /// Uniform percent roll in `[0, 100]` inclusive.
    fn roll_percent(&mut self) -> u32 {
        self.uniform_int(0, 100)
    }

    /// Uniform index in `[0, len)`. Returns 0 for an empty collection.
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.uniform_int(0, (len - 1) as u32) as usize
    }
}

impl<R: RngSource + ?Sized> RngSource for &mut R {
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        (**self).uniform_int(lo, hi)
    }

    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }
}

/// Deterministic random source for tests and scripted demos.
///
/// Integer draws pop from a queue and are clamped into the requested range;
/// an empty queue falls back to the configured default (or `lo`). Boolean draws
/// behave the same way with their own queue.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    ints: VecDeque<u32>,
    bools: VecDeque<bool>,
    default_int: Option<u32>,
    default_bool: bool,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues integer draws in order.
    #[must_use]
    pub fn with_ints(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.ints.extend(values);
        self
    }

    /// Queues boolean draws in order.
    #[must_use]
    pub fn with_bools(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.bools.extend(values);
        self
    }

    /// Value used once the integer queue is exhausted (clamped per draw).
    #[must_use]
    pub fn with_default_int(mut self, value: u32) -> Self {
        self.default_int = Some(value);
        self
    }

    #[must_use]
    pub fn with_default_bool(mut self, value: bool) -> Self {
        self.default_bool = value;
        self
    }

    pub fn push_int(&mut self, value: u32) {
        self.ints.push_back(value);
    }

    pub fn push_bool(&mut self, value: bool) {
        self.bools.push_back(value);
    }

    /// Number of queued integer draws not yet consumed.
    pub fn remaining_ints(&self) -> usize {
        self.ints.len()
    }
}

impl RngSource for ScriptedRng {
    fn uniform_int(&mut self, lo: u32, hi: u32) -> u32 {
        let hi = hi.max(lo);
        match self.ints.pop_front().or(self.default_int) {
            Some(value) => value.clamp(lo, hi),
            None => lo,
        }
    }

    fn chance(&mut self, _p: f64) -> bool {
        self.bools.pop_front().unwrap_or(self.default_bool)
    }
}
