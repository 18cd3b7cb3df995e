//! Game settings and preferences
//!
//! Persisted as JSON next to the executable (or wherever the host points).

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(QualityPreset::Low),
            "medium" | "med" => Some(QualityPreset::Medium),
            "high" => Some(QualityPreset::High),
            _ => None,
        }
    }

    /// Number of background stars for this preset
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 16,
            QualityPreset::Medium => 48,
            QualityPreset::High => 96,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Explosion effects during cutscenes
    pub explosions: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Simulation ===
    /// Fixed RNG seed; a fresh one is picked when unset
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,

            explosions: true,

            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            seed: None,
        }
    }
}

impl Settings {
    /// Create settings from a quality preset (applies preset defaults)
    pub fn from_preset(preset: QualityPreset) -> Self {
        let mut settings = Self::default();
        settings.apply_preset(preset);
        settings
    }

    /// Apply a quality preset (updates quality-dependent settings)
    pub fn apply_preset(&mut self, preset: QualityPreset) {
        self.quality = preset;

        // Low preset disables effects for performance
        if preset == QualityPreset::Low {
            self.explosions = false;
        }
    }

    /// Apply a preset given by name (e.g. from the command line)
    ///
    /// Unknown names leave the settings untouched and return `false`.
    pub fn apply_preset_named(&mut self, name: &str) -> bool {
        match QualityPreset::from_str(name) {
            Some(preset) => {
                self.apply_preset(preset);
                log::info!("Quality preset set to {}", preset.as_str());
                true
            }
            None => {
                log::warn!("Unknown quality preset {:?}, keeping {}", name, self.quality.as_str());
                false
            }
        }
    }

    /// Star count for the current quality
    pub fn star_count(&self) -> usize {
        self.quality.star_count()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
                Err(err) => log::warn!("Ignoring malformed settings {}: {}", path.display(), err),
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => log::warn!("Could not read settings {}: {}", path.display(), err),
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings as pretty JSON
    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}
