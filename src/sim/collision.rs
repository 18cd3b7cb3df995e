//! Rectangle collision with type tags and masks
//!
//! Every collidable thing carries a centre-anchored hitbox, a type tag and a
//! bitmask naming the tags it wants to hit. Two hitboxes collide when either
//! mask selects the other's tag and the rectangles overlap.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// What kind of thing a hitbox belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionType {
    Player,
    Enemy,
    Bullet,
    /// Scenery that can still be shot (the taco stand)
    Prop,
}

impl CollisionType {
    /// Bit this tag occupies in a collision mask
    #[inline]
    pub fn bits(self) -> u32 {
        match self {
            CollisionType::Player => 1 << 0,
            CollisionType::Enemy => 1 << 1,
            CollisionType::Bullet => 1 << 2,
            CollisionType::Prop => 1 << 3,
        }
    }

    /// Build a mask selecting every tag in `kinds`
    pub fn mask_of(kinds: &[CollisionType]) -> u32 {
        kinds.iter().fold(0, |mask, kind| mask | kind.bits())
    }
}

/// Axis-aligned rectangle centred on `pos`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hitbox {
    /// Centre of the rectangle
    pub pos: IVec2,
    /// Full width and height
    pub size: IVec2,
    pub kind: CollisionType,
    /// Tags this hitbox collides with
    pub mask: u32,
}

impl Hitbox {
    pub fn new(pos: IVec2, size: IVec2, kind: CollisionType, mask: u32) -> Self {
        Self {
            pos,
            size,
            kind,
            mask,
        }
    }

    /// Top-left corner, where a sprite covering this box is drawn
    #[inline]
    pub fn top_left(&self) -> IVec2 {
        self.pos - self.size / 2
    }

    /// Whether this hitbox wants to hit `kind`
    #[inline]
    pub fn selects(&self, kind: CollisionType) -> bool {
        self.mask & kind.bits() != 0
    }

    /// Origin lies outside the playfield (edges count as inside)
    pub fn is_out_of_bounds(&self) -> bool {
        self.pos.x < 0 || self.pos.x > SCREEN_WIDTH || self.pos.y < 0 || self.pos.y > SCREEN_HEIGHT
    }

    /// Strict rectangle overlap, ignoring tags and masks
    pub fn overlaps(&self, other: &Hitbox) -> bool {
        // Doubled distances against summed extents, widened so far-off
        // coordinates cannot overflow
        let delta = (self.pos.as_i64vec2() - other.pos.as_i64vec2()).abs() * 2;
        let reach = self.size.as_i64vec2() + other.size.as_i64vec2();
        delta.x < reach.x && delta.y < reach.y
    }
}

/// Anything exposing a hitbox
pub trait Collidable {
    fn hitbox(&self) -> &Hitbox;
}

impl Collidable for Hitbox {
    fn hitbox(&self) -> &Hitbox {
        self
    }
}

/// Check whether two collidables hit each other
pub fn is_colliding(a: &impl Collidable, b: &impl Collidable) -> bool {
    let a = a.hitbox();
    let b = b.hitbox();
    (a.selects(b.kind) || b.selects(a.kind)) && a.overlaps(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bullet_at(x: i32, y: i32, mask: u32) -> Hitbox {
        Hitbox::new(IVec2::new(x, y), IVec2::splat(16), CollisionType::Bullet, mask)
    }

    fn enemy_at(x: i32, y: i32) -> Hitbox {
        Hitbox::new(IVec2::new(x, y), IVec2::splat(16), CollisionType::Enemy, 0)
    }

    #[test]
    fn test_overlap_requires_mask() {
        let enemy = enemy_at(50, 50);
        assert!(is_colliding(&bullet_at(52, 48, CollisionType::Enemy.bits()), &enemy));
        assert!(!is_colliding(&bullet_at(52, 48, CollisionType::Player.bits()), &enemy));
    }

    #[test]
    fn test_either_mask_is_enough() {
        let bullet = bullet_at(10, 10, 0);
        let player = Hitbox::new(
            IVec2::new(12, 12),
            IVec2::splat(8),
            CollisionType::Player,
            CollisionType::Bullet.bits(),
        );
        assert!(is_colliding(&bullet, &player));
        assert!(is_colliding(&player, &bullet));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let enemy = enemy_at(50, 50);
        let mask = CollisionType::Enemy.bits();
        // 16 wide boxes whose centres are 16 apart share only an edge
        assert!(!is_colliding(&bullet_at(66, 50, mask), &enemy));
        assert!(is_colliding(&bullet_at(65, 50, mask), &enemy));
        assert!(!is_colliding(&bullet_at(50, 34, mask), &enemy));
    }

    #[test]
    fn test_distant_boxes_never_overlap() {
        let mask = CollisionType::Enemy.bits();
        let near = bullet_at(100, 100, mask);
        assert!(!is_colliding(&near, &enemy_at(1_200_000_000, 100)));
        assert!(!is_colliding(&bullet_at(i32::MIN, i32::MIN, mask), &enemy_at(i32::MAX, i32::MAX)));

        let huge = Hitbox::new(IVec2::ZERO, IVec2::splat(i32::MAX), CollisionType::Enemy, 0);
        assert!(is_colliding(&near, &huge));
    }

    #[test]
    fn test_out_of_bounds_edges() {
        assert!(!bullet_at(0, 0, 0).is_out_of_bounds());
        assert!(!bullet_at(SCREEN_WIDTH, SCREEN_HEIGHT, 0).is_out_of_bounds());
        assert!(bullet_at(-1, 10, 0).is_out_of_bounds());
        assert!(bullet_at(10, SCREEN_HEIGHT + 1, 0).is_out_of_bounds());
    }

    #[test]
    fn test_mask_of() {
        let mask = CollisionType::mask_of(&[CollisionType::Enemy, CollisionType::Prop]);
        assert_eq!(mask, 0b1010);
        assert_eq!(bullet_at(0, 0, 0).top_left(), IVec2::new(-8, -8));
    }
}
