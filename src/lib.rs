//! Cute Shooter - A pastel 2D arcade shooter
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (entities, collisions, scoring, game phases)
//! - `renderer`: Drawing-primitive abstraction and scene composition
//! - `platform`: Window, input polling and frame pacing (macroquad)
//! - `audio`: Sound cues and background music
//! - `persistence`: JSON file store used by high scores and settings

pub mod audio;
pub mod highscores;
pub mod palette;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScoreRecord;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play area dimensions (pixels)
    pub const WIDTH: f32 = 900.0;
    pub const HEIGHT: f32 = 600.0;

    /// Target frame rate; all timers below count frames at this rate
    pub const FPS: u32 = 60;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_START_HP: u8 = 3;
    pub const PLAYER_MAX_HP: u8 = 5;
    /// Keep the player this far from every screen edge
    pub const PLAYER_MARGIN: f32 = 30.0;
    /// Half extent of the square box used for power-up pickup
    pub const PLAYER_PICKUP_HALF: f32 = 20.0;
    /// Frames between shots
    pub const SHOOT_COOLDOWN: u32 = 10;
    /// Frames of invulnerability after taking a hit (1 second)
    pub const INVULN_FRAMES: u32 = 60;
    /// Frames of triple shot granted by a pickup (8 seconds)
    pub const TRIPLE_SHOT_FRAMES: u32 = 8 * 60;
    /// Angular spread of the triple shot (degrees)
    pub const TRIPLE_SHOT_SPREAD_DEG: f32 = 12.0;

    /// Bullet defaults
    pub const BULLET_SPEED: f32 = 9.0;
    pub const BULLET_RADIUS: f32 = 6.0;
    /// Bullets die once their centre is this far outside the screen
    pub const BULLET_MARGIN: f32 = 10.0;

    /// Enemy defaults
    pub const ENEMY_MIN_RADIUS: u32 = 14;
    pub const ENEMY_MAX_RADIUS: u32 = 24;
    /// Enemies at or above this radius take two hits
    pub const ENEMY_TOUGH_RADIUS: f32 = 20.0;
    pub const ENEMY_BASE_SPEED: f32 = 1.6;
    pub const ENEMY_SPEED_PER_LEVEL: f32 = 0.08;
    pub const ENEMY_MAX_LEVEL_BONUS: f32 = 3.0;
    pub const ENEMY_SPEED_JITTER: f32 = 1.2;
    pub const ENEMY_MAX_DRIFT: f32 = 0.8;
    /// Enemies are removed once their top edge is this far below the screen
    pub const ENEMY_EXIT_MARGIN: f32 = 40.0;

    /// Spawner
    pub const SPAWN_COOLDOWN_START: i32 = 45;
    pub const SPAWN_COOLDOWN_MIN: i32 = 12;
    pub const SPAWN_COOLDOWN_PER_LEVEL: f32 = 1.7;

    /// Power-ups
    pub const POWERUP_SPEED: f32 = 2.2;
    pub const POWERUP_HALF: f32 = 12.0;
    pub const POWERUP_EXIT_MARGIN: f32 = 30.0;
    pub const POWERUP_DROP_CHANCE: f64 = 0.15;

    /// Scoring
    pub const SCORE_PER_KILL: u64 = 10;
    pub const SCORE_PER_LEVEL: u64 = 100;

    /// Cosmetics
    pub const STAR_COUNT: usize = 90;
    pub const PARTICLES_ENEMY_HIT: usize = 10;
    pub const PARTICLES_PICKUP: usize = 15;
    pub const PARTICLES_PLAYER_HIT: usize = 20;
    pub const PARTICLE_GRAVITY: f32 = 0.05;
}

/// Clamp `v` into `[lo, hi]`
#[inline]
pub fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.max(lo).min(hi)
}

/// Unit direction for an angle given in degrees (screen space, y down)
#[inline]
pub fn direction_from_degrees(angle_deg: f32) -> glam::Vec2 {
    let rad = angle_deg.to_radians();
    glam::Vec2::new(rad.cos(), rad.sin())
}

/// Angle in degrees from `from` toward `to`
#[inline]
pub fn angle_toward_degrees(from: glam::Vec2, to: glam::Vec2) -> f32 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}
