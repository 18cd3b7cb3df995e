//! Scripted cutscenes
//!
//! Each cutscene is a list of [`Action`](crate::sim::Action)s plus the
//! context they share, ready to hand to an
//! [`ActionSequencer`](crate::sim::ActionSequencer).

pub mod intro;

pub use intro::{IntroContext, intro_actions, intro_sequence};
