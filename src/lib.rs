//! Taco Stand - scripted cutscenes and pooled projectiles for a tiny 2D shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (action sequencer, bullet pool, collisions, clock)
//! - `objects`: Managed game objects driven by cutscene actions
//! - `cinematics`: Scripted cutscenes built on the sequencer
//! - `renderer`: Draw command recording
//! - `audio`: Sound slot management

pub mod audio;
pub mod cinematics;
pub mod objects;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield width in pixels
    pub const SCREEN_WIDTH: i32 = 256;
    /// Playfield height in pixels
    pub const SCREEN_HEIGHT: i32 = 224;

    /// Simulation rate the tick counter is expressed in
    pub const TICKS_PER_SECOND: u64 = 60;

    /// Number of preallocated bullet records
    pub const BULLET_POOL_SIZE: usize = 10;
    /// Bullet hitbox edge length
    pub const BULLET_SIZE: i32 = 16;
    /// Damage every fresh bullet carries
    pub const BULLET_DAMAGE: i32 = 1;

    /// Most explosions alive at once
    pub const EXPLOSION_POOL_SIZE: usize = 16;
}
