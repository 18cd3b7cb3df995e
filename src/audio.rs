//! Sound slot management
//!
//! The console exposes numbered sound slots: load a file into a slot, play
//! it on a channel at some volume, free the slot when done. [`AudioManager`]
//! sits in front of whatever backend the host provides and applies the
//! player's volume settings.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::Settings;

/// Numbered sound slot
pub type SoundSlot = u8;

/// Loudest volume the backend accepts
pub const MAX_VOLUME: u8 = 128;

/// Host audio primitives
pub trait AudioBackend {
    fn load_sound(&mut self, slot: SoundSlot, path: &str);
    fn free_sound(&mut self, slot: SoundSlot);
    fn play_sound(&mut self, slot: SoundSlot, channel: u8, volume: u8);
}

/// Lets the host keep a handle on a backend the manager owns
impl<B: AudioBackend> AudioBackend for Rc<RefCell<B>> {
    fn load_sound(&mut self, slot: SoundSlot, path: &str) {
        self.borrow_mut().load_sound(slot, path);
    }

    fn free_sound(&mut self, slot: SoundSlot) {
        self.borrow_mut().free_sound(slot);
    }

    fn play_sound(&mut self, slot: SoundSlot, channel: u8, volume: u8) {
        self.borrow_mut().play_sound(slot, channel, volume);
    }
}

/// A recorded backend call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum AudioCommand {
    Load { slot: SoundSlot, path: String },
    Free { slot: SoundSlot },
    Play { slot: SoundSlot, channel: u8, volume: u8 },
}

/// Backend that only remembers what it was asked to do
#[derive(Debug, Clone, Default)]
pub struct AudioLog {
    pub commands: Vec<AudioCommand>,
    loaded: Vec<SoundSlot>,
}

impl AudioLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `slot` currently holds a sound
    pub fn is_loaded(&self, slot: SoundSlot) -> bool {
        self.loaded.contains(&slot)
    }

    /// Number of play requests seen for `slot`
    pub fn plays_of(&self, slot: SoundSlot) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, AudioCommand::Play { slot: s, .. } if *s == slot))
            .count()
    }
}

impl AudioBackend for AudioLog {
    fn load_sound(&mut self, slot: SoundSlot, path: &str) {
        if !self.loaded.contains(&slot) {
            self.loaded.push(slot);
        }
        self.commands.push(AudioCommand::Load {
            slot,
            path: path.to_string(),
        });
    }

    fn free_sound(&mut self, slot: SoundSlot) {
        self.loaded.retain(|s| *s != slot);
        self.commands.push(AudioCommand::Free { slot });
    }

    fn play_sound(&mut self, slot: SoundSlot, channel: u8, volume: u8) {
        if !self.loaded.contains(&slot) {
            warn!("Playing sound slot {} before it was loaded", slot);
        }
        self.commands.push(AudioCommand::Play {
            slot,
            channel,
            volume,
        });
    }
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>) -> Self {
        Self {
            backend,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Create a manager honouring the player's audio settings
    pub fn with_settings(backend: Box<dyn AudioBackend>, settings: &Settings) -> Self {
        let mut audio = Self::new(backend);
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Scale a requested volume by the player's settings
    pub fn scaled_volume(&self, volume: u8) -> u8 {
        let volume = volume.min(MAX_VOLUME) as f32 * self.effective_volume();
        volume.round() as u8
    }

    pub fn load(&mut self, slot: SoundSlot, path: &str) {
        debug!("Loading sound slot {} from {}", slot, path);
        self.backend.load_sound(slot, path);
    }

    pub fn free(&mut self, slot: SoundSlot) {
        debug!("Freeing sound slot {}", slot);
        self.backend.free_sound(slot);
    }

    /// Play a loaded sound; silent requests never reach the backend
    pub fn play(&mut self, slot: SoundSlot, channel: u8, volume: u8) {
        let volume = self.scaled_volume(volume);
        if volume == 0 {
            return;
        }
        self.backend.play_sound(slot, channel, volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_volume_scaling() {
        let shared = Rc::new(RefCell::new(AudioLog::new()));
        let mut audio = AudioManager::new(Box::new(shared.clone()));
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(1.0);

        audio.load(0, "sounds/explode.wav");
        audio.play(0, 0, 128);

        let log = shared.borrow();
        assert!(log.is_loaded(0));
        assert_eq!(
            log.commands.last(),
            Some(&AudioCommand::Play {
                slot: 0,
                channel: 0,
                volume: 64
            })
        );
    }

    #[test]
    fn test_muted_play_is_dropped() {
        let shared = Rc::new(RefCell::new(AudioLog::new()));
        let mut audio = AudioManager::new(Box::new(shared.clone()));
        audio.set_muted(true);
        audio.play(1, 0, 128);
        assert_eq!(shared.borrow().plays_of(1), 0);
    }

    #[test]
    fn test_free_unloads_slot() {
        let mut log = AudioLog::new();
        log.load_sound(3, "a.wav");
        log.free_sound(3);
        assert!(!log.is_loaded(3));
        assert_eq!(log.commands.len(), 2);
    }
}
