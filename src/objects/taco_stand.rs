//! The taco stand: the intro's doomed landmark and a shootable prop

use glam::IVec2;
use log::debug;

use crate::renderer::{Renderer, SpriteId};
use crate::sim::{Collidable, CollisionType, Hitbox};

const SPRITE_IDLE: SpriteId = 32;
const SPRITE_PANIC: [SpriteId; 2] = [33, 34];
const SPRITE_RUBBLE: SpriteId = 35;

/// Ticks each panic frame is held
const PANIC_FRAME_TICKS: u64 = 8;

/// Where the stand sits on screen
pub const STAND_POSITION: IVec2 = IVec2::new(128, 190);

/// Current state of the stand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandMode {
    /// Business as usual
    Idle,
    /// Under attack, flashing
    Panic,
    /// A smoking ruin
    Destroyed,
}

/// The taco stand
#[derive(Debug, Clone)]
pub struct TacoStand {
    hitbox: Hitbox,
    mode: StandMode,
    sprite: SpriteId,
}

impl Default for TacoStand {
    fn default() -> Self {
        Self::new(STAND_POSITION)
    }
}

impl TacoStand {
    pub fn new(pos: IVec2) -> Self {
        Self {
            hitbox: Hitbox::new(pos, IVec2::splat(16), CollisionType::Prop, 0),
            mode: StandMode::Idle,
            sprite: SPRITE_IDLE,
        }
    }

    pub fn mode(&self) -> StandMode {
        self.mode
    }

    pub fn sprite(&self) -> SpriteId {
        self.sprite
    }

    /// Start panicking. A destroyed stand stays destroyed.
    pub fn panic(&mut self) {
        if self.mode == StandMode::Idle {
            debug!("Taco stand panicking");
            self.mode = StandMode::Panic;
        }
    }

    pub fn destroy(&mut self) {
        debug!("Taco stand destroyed");
        self.mode = StandMode::Destroyed;
    }

    /// Pick the animation frame for `tick`
    pub fn update(&mut self, tick: u64) {
        self.sprite = match self.mode {
            StandMode::Idle => SPRITE_IDLE,
            StandMode::Panic => SPRITE_PANIC[((tick / PANIC_FRAME_TICKS) % 2) as usize],
            StandMode::Destroyed => SPRITE_RUBBLE,
        };
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        let corner = self.hitbox.top_left();
        renderer.sprite(self.sprite, corner.x, corner.y);
    }
}

impl Collidable for TacoStand {
    fn hitbox(&self) -> &Hitbox {
        &self.hitbox
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_animates() {
        let mut stand = TacoStand::default();
        stand.update(0);
        assert_eq!(stand.sprite(), SPRITE_IDLE);

        stand.panic();
        stand.update(0);
        assert_eq!(stand.sprite(), 33);
        stand.update(8);
        assert_eq!(stand.sprite(), 34);
        stand.update(16);
        assert_eq!(stand.sprite(), 33);
    }

    #[test]
    fn test_destroyed_ignores_panic() {
        let mut stand = TacoStand::default();
        stand.destroy();
        stand.panic();
        stand.update(3);
        assert_eq!(stand.mode(), StandMode::Destroyed);
        assert_eq!(stand.sprite(), SPRITE_RUBBLE);
    }
}
