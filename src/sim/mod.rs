//! Deterministic simulation module
//!
//! Gameplay primitives that know nothing about content. This module must be
//! pure and deterministic:
//! - Tick-driven only, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies beyond the `Renderer` trait

pub mod bullets;
pub mod clock;
pub mod collision;
pub mod sequencer;
pub(crate) mod slots;

pub use bullets::{Bullet, BulletPool};
pub use clock::{GameClock, SimRng};
pub use collision::{Collidable, CollisionType, Hitbox, is_colliding};
pub use sequencer::{Action, ActionSequencer, SequencerState};
