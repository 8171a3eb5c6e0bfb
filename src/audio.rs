//! Audio system using macroquad's mixer
//!
//! Sound cues and the background loop are loaded from `assets/`. A missing
//! or undecodable file silences that cue only.

use macroquad::audio::{self as mqa, PlaySoundParams, Sound};

use crate::settings::Settings;
use crate::sim::SoundEffect;

pub const SHOOT_PATH: &str = "assets/shoot.wav";
pub const PICKUP_PATH: &str = "assets/pickup.wav";
pub const EXPLOSION_PATH: &str = "assets/explosion.wav";
pub const MUSIC_PATH: &str = "assets/background.ogg";

/// Background music base volume
pub const MUSIC_VOLUME: f32 = 0.28;

/// Base volume for each cue before settings are applied
pub fn base_volume(effect: SoundEffect) -> f32 {
    match effect {
        SoundEffect::Shoot => 0.45,
        SoundEffect::Pickup => 0.6,
        SoundEffect::Explosion => 0.5,
    }
}

async fn load_optional(path: &str) -> Option<Sound> {
    match mqa::load_sound(path).await {
        Ok(sound) => {
            log::info!("Loaded {}", path);
            Some(sound)
        }
        Err(e) => {
            log::warn!("Sound unavailable ({}): {:?}", path, e);
            None
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    shoot: Option<Sound>,
    pickup: Option<Sound>,
    explosion: Option<Sound>,
    music: Option<Sound>,
    music_playing: bool,
    /// Volume preferences
    settings: Settings,
}

impl AudioManager {
    /// Load every cue; volumes come from `settings`
    pub async fn load(settings: &Settings) -> Self {
        Self {
            shoot: load_optional(SHOOT_PATH).await,
            pickup: load_optional(PICKUP_PATH).await,
            explosion: load_optional(EXPLOSION_PATH).await,
            music: load_optional(MUSIC_PATH).await,
            music_playing: false,
            settings: settings.clone().sanitized(),
        }
    }

    fn sfx_gain(&self) -> f32 {
        self.settings.effective_sfx_volume()
    }

    fn music_gain(&self) -> f32 {
        self.settings.effective_music_volume()
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let sound = match effect {
            SoundEffect::Shoot => &self.shoot,
            SoundEffect::Pickup => &self.pickup,
            SoundEffect::Explosion => &self.explosion,
        };
        let Some(sound) = sound else { return };

        let volume = base_volume(effect) * self.sfx_gain();
        if volume <= 0.0 {
            return;
        }
        mqa::play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume,
            },
        );
    }

    /// Start the background loop unless it is already playing
    pub fn start_music(&mut self) {
        if self.music_playing {
            return;
        }
        let Some(music) = &self.music else { return };
        mqa::play_sound(
            music,
            PlaySoundParams {
                looped: true,
                volume: MUSIC_VOLUME * self.music_gain(),
            },
        );
        self.music_playing = true;
    }

    pub fn stop_music(&mut self) {
        if let Some(music) = &self.music {
            mqa::stop_sound(music);
        }
        self.music_playing = false;
    }

    pub fn is_music_playing(&self) -> bool {
        self.music_playing
    }
}
