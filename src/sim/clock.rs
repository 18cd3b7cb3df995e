//! Tick clock and seeded randomness
//!
//! All timers are expressed as "current tick + offset". The host loop owns
//! the clock and advances it once per frame; nothing here reads wall time.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Monotonic frame counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameClock {
    ticks: u64,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `ticks` (useful when a scene begins mid-run)
    pub fn starting_at(ticks: u64) -> Self {
        Self { ticks }
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advance by one frame
    pub fn advance(&mut self) {
        self.ticks += 1;
    }

    /// Deadline `offset` ticks from now
    #[inline]
    pub fn after(&self, offset: u64) -> u64 {
        self.ticks + offset
    }
}

/// Seeded RNG for content that wants variety but must replay identically
#[derive(Debug, Clone)]
pub struct SimRng {
    seed: u64,
    rng: Pcg32,
}

impl SimRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Random integer in `lo..=hi` (bounds may be given in either order)
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        self.rng.random_range(lo..=hi)
    }
}
