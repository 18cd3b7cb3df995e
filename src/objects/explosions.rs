//! Short-lived explosion effects
//!
//! Stored in a `SlotPool` like bullets: a fixed number of records, new
//! effects dropped when all of them are busy.

use glam::IVec2;

use crate::consts::EXPLOSION_POOL_SIZE;
use crate::renderer::{Renderer, SpriteId};
use crate::sim::slots::SlotPool;

/// First sprite of the explosion animation
const FIRST_FRAME: SpriteId = 16;
/// Number of animation frames
const FRAME_COUNT: u64 = 5;
/// Ticks each frame is held
const FRAME_TICKS: u64 = 6;
/// Total lifetime in ticks
pub const EXPLOSION_TICKS: u64 = FRAME_COUNT * FRAME_TICKS;

/// One explosion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explosion {
    pub pos: IVec2,
    /// Tick the explosion started on
    pub born: u64,
    pub sprite: SpriteId,
}

/// Fixed pool of explosions
#[derive(Debug, Clone)]
pub struct Explosions {
    records: SlotPool<Explosion>,
}

impl Default for Explosions {
    fn default() -> Self {
        Self::new()
    }
}

impl Explosions {
    pub fn new() -> Self {
        let blank = Explosion {
            pos: IVec2::ZERO,
            born: 0,
            sprite: FIRST_FRAME,
        };
        Self {
            records: SlotPool::from_records(vec![blank; EXPLOSION_POOL_SIZE]),
        }
    }

    pub fn live_count(&self) -> usize {
        self.records.live_count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Explosion> {
        self.records.live().iter()
    }

    /// Start an explosion centred on (`x`, `y`); ignored when the pool is full
    pub fn create(&mut self, x: i32, y: i32, tick: u64) {
        if let Some(explosion) = self.records.acquire() {
            *explosion = Explosion {
                pos: IVec2::new(x, y),
                born: tick,
                sprite: FIRST_FRAME,
            };
        }
    }

    /// Advance animations and retire finished explosions
    pub fn update(&mut self, tick: u64) {
        self.records.retain_live(|explosion| {
            let age = tick.saturating_sub(explosion.born);
            if age >= EXPLOSION_TICKS {
                return false;
            }
            explosion.sprite = FIRST_FRAME + (age / FRAME_TICKS) as SpriteId;
            true
        });
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for explosion in self.iter() {
            renderer.sprite(explosion.sprite, explosion.pos.x - 8, explosion.pos.y - 8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animates_then_retires() {
        let mut explosions = Explosions::new();
        explosions.create(50, 180, 100);

        explosions.update(100);
        assert_eq!(explosions.iter().next().unwrap().sprite, FIRST_FRAME);
        explosions.update(113);
        assert_eq!(explosions.iter().next().unwrap().sprite, FIRST_FRAME + 2);
        explosions.update(100 + EXPLOSION_TICKS - 1);
        assert_eq!(explosions.live_count(), 1);
        explosions.update(100 + EXPLOSION_TICKS);
        assert_eq!(explosions.live_count(), 0);
    }

    #[test]
    fn test_full_pool_drops_new_explosions() {
        let mut explosions = Explosions::new();
        for i in 0..EXPLOSION_POOL_SIZE as i32 + 4 {
            explosions.create(i, 0, 0);
        }
        assert_eq!(explosions.live_count(), EXPLOSION_POOL_SIZE);
    }

    #[test]
    fn test_retired_slots_are_reused() {
        let mut explosions = Explosions::new();
        for i in 0..EXPLOSION_POOL_SIZE as i32 {
            explosions.create(i, 0, i as u64);
        }
        // Only the ones born at ticks 0 and 1 have run their course
        explosions.update(EXPLOSION_TICKS + 1);
        assert_eq!(explosions.live_count(), EXPLOSION_POOL_SIZE - 2);

        explosions.create(200, 100, EXPLOSION_TICKS + 1);
        explosions.create(201, 100, EXPLOSION_TICKS + 1);
        explosions.create(202, 100, EXPLOSION_TICKS + 1);
        assert_eq!(explosions.live_count(), EXPLOSION_POOL_SIZE);
        assert_eq!(explosions.iter().filter(|e| e.pos.y == 100).count(), 2);
        assert!(explosions.iter().all(|e| e.pos.x > 1));
    }
}
