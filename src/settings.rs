//! Player preferences
//!
//! Persisted separately from the high score in `cute_shooter_settings.json`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence;

/// Default settings file name
pub const SETTINGS_FILE: &str = "cute_shooter_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// Silence everything
    pub muted: bool,

    // === Controls ===
    /// Start sessions with mouse aiming on
    pub aim_with_mouse: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            music_volume: 1.0,
            muted: false,
            aim_with_mouse: true,
            show_fps: false,
        }
    }
}

impl Settings {
    /// Clamp volumes into 0..=1 (NaN becomes 0)
    pub fn sanitized(mut self) -> Self {
        for v in [
            &mut self.master_volume,
            &mut self.sfx_volume,
            &mut self.music_volume,
        ] {
            *v = if v.is_nan() { 0.0 } else { (*v).clamp(0.0, 1.0) };
        }
        self
    }

    /// Gain applied to a sound effect's base volume
    pub fn effective_sfx_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Gain applied to the music's base volume
    pub fn effective_music_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.music_volume
        }
    }

    /// Load from `path`. A missing file is created with defaults; an
    /// unreadable one is left alone and defaults are used.
    pub fn load_from(path: &Path) -> Self {
        match persistence::load_json::<Self>(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) if e.is_not_found() => {
                log::info!("No settings file, writing defaults to {}", path.display());
                let settings = Self::default();
                settings.save_to(path);
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        Self::load_from(Path::new(SETTINGS_FILE))
    }

    pub fn save_to(&self, path: &Path) {
        if let Err(e) = persistence::save_json(path, self) {
            log::warn!("Failed to save settings: {}", e);
        }
    }
}
