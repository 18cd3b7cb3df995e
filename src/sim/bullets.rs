//! Fixed-capacity bullet pool
//!
//! Every bullet record is allocated once when the pool is built and lives in
//! a `SlotPool`. Firing claims the first free record; reclaiming hands it
//! back. Shots fired while every record is live are dropped.

use glam::IVec2;
use log::trace;

use super::collision::{Collidable, CollisionType, Hitbox, is_colliding};
use super::slots::SlotPool;
use crate::consts::{BULLET_DAMAGE, BULLET_POOL_SIZE, BULLET_SIZE};
use crate::renderer::{Renderer, SpriteId};

/// A pooled bullet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bullet {
    pub hitbox: Hitbox,
    pub sprite: SpriteId,
    pub damage: i32,
    /// Vertical speed in pixels per tick; bullets never move sideways
    pub direction: i32,
}

impl Bullet {
    fn blank() -> Self {
        Self {
            hitbox: Hitbox::new(
                IVec2::ZERO,
                IVec2::splat(BULLET_SIZE),
                CollisionType::Bullet,
                0,
            ),
            sprite: 0,
            damage: BULLET_DAMAGE,
            direction: 0,
        }
    }
}

impl Collidable for Bullet {
    fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }
}

/// Bullet manager with a fixed record budget
#[derive(Debug, Clone)]
pub struct BulletPool {
    bullets: SlotPool<Bullet>,
}

impl Default for BulletPool {
    fn default() -> Self {
        Self::new()
    }
}

impl BulletPool {
    /// Pool with the standard ten records
    pub fn new() -> Self {
        Self::with_capacity(BULLET_POOL_SIZE)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bullets: SlotPool::from_records((0..capacity).map(|_| Bullet::blank()).collect()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.bullets.capacity()
    }

    pub fn live_count(&self) -> usize {
        self.bullets.live_count()
    }

    pub fn free_count(&self) -> usize {
        self.bullets.free_count()
    }

    /// No record left to fire
    pub fn is_exhausted(&self) -> bool {
        self.bullets.is_exhausted()
    }

    /// Live bullets (order is unspecified)
    pub fn iter(&self) -> impl Iterator<Item = &Bullet> {
        self.bullets.live().iter()
    }

    /// Fire a bullet centred on (`x`, `y`)
    ///
    /// Dropped without any effect if the pool is exhausted.
    pub fn create(&mut self, x: i32, y: i32, direction: i32, sprite: SpriteId, mask: u32) {
        let Some(bullet) = self.bullets.acquire() else {
            trace!("Bullet pool exhausted, dropping shot at ({}, {})", x, y);
            return;
        };

        bullet.hitbox.pos = IVec2::new(x, y);
        bullet.hitbox.mask = mask;
        bullet.sprite = sprite;
        bullet.damage = BULLET_DAMAGE;
        bullet.direction = direction;
    }

    /// Move every live bullet and reclaim the ones that left the playfield
    pub fn update(&mut self) {
        self.bullets.retain_live(|bullet| {
            // Saturates so any speed still ends up out of bounds
            bullet.hitbox.pos.y = bullet.hitbox.pos.y.saturating_add(bullet.direction);
            !bullet.hitbox.is_out_of_bounds()
        });
    }

    /// Draw each live bullet centred on its position
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for bullet in self.iter() {
            let corner = bullet.hitbox.top_left();
            renderer.sprite(bullet.sprite, corner.x, corner.y);
        }
    }

    /// Reclaim the first live bullet that hits `target`
    ///
    /// Stops at the first hit, so at most one bullet is consumed per call.
    pub fn check_collision(&mut self, target: &impl Collidable) -> bool {
        self.bullets.release_first(|bullet| is_colliding(bullet, target))
    }

    /// Return every live bullet to the free list
    pub fn clear(&mut self) {
        self.bullets.clear();
    }
}
