//! Managed game objects
//!
//! Scenery and effects that cutscene actions drive through their context.
//! Each object exposes its own update/draw pair; mode changes such as
//! `panic` or `destroy` are plain method calls.

pub mod explosions;
pub mod starfield;
pub mod taco_stand;

pub use explosions::{Explosion, Explosions};
pub use starfield::{Star, Starfield};
pub use taco_stand::{StandMode, TacoStand};
