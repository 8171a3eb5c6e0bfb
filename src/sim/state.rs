//! Game session state
//!
//! Owns every entity collection plus score, level, spawn timers and the
//! current phase. All randomness flows through the session's seeded RNG.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::actors::{Enemy, Player};
use super::entities::{Bullet, Particle, PowerUp, PowerUpKind, Star};
use crate::consts::*;
use crate::palette::Rgb;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, waiting for Enter
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen gameplay with an overlay
    Paused,
    /// Run ended, waiting for restart or menu
    GameOver,
}

/// Sound cues requested by the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player fired
    Shoot,
    /// Enemy destroyed
    Explosion,
    /// Power-up collected
    Pickup,
}

/// Side effects the run loop must carry out after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundEffect),
    /// Start background music unless it is already playing
    StartMusic,
    StopMusic,
    /// Persist the given high score
    SaveHighScore(u64),
}

/// Spawn interval for a level, floored at `SPAWN_COOLDOWN_MIN`
pub fn spawn_cooldown_for(level: u32) -> i32 {
    let reduction = (level as f32 * SPAWN_COOLDOWN_PER_LEVEL) as i32;
    (SPAWN_COOLDOWN_START - reduction).max(SPAWN_COOLDOWN_MIN)
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the session RNG was created from
    pub seed: u64,
    rng: Pcg32,
    pub phase: GamePhase,
    pub player: Player,
    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub powerups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,
    pub score: u64,
    /// Starts at 1, +1 per `SCORE_PER_LEVEL` points
    pub level: u32,
    /// Frames until the next enemy spawn
    pub spawn_timer: i32,
    pub spawn_cooldown: i32,
    /// Frames spent in the Playing phase this run
    pub time_played: u64,
    /// Best score across runs; survives `reset()`
    pub highscore: u64,
    /// Aim with the mouse (cursor stays visible while playing); survives `reset()`
    pub aim_with_mouse: bool,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session in the Menu phase
    pub fn new(seed: u64, highscore: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT).map(|_| Star::new(&mut rng)).collect();
        Self {
            seed,
            rng,
            phase: GamePhase::Menu,
            player: Player::new(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            stars,
            score: 0,
            level: 1,
            spawn_timer: 0,
            spawn_cooldown: SPAWN_COOLDOWN_START,
            time_played: 0,
            highscore,
            aim_with_mouse: true,
            events: Vec::new(),
        }
    }

    /// Back to a fresh run in the Menu phase.
    /// Keeps `highscore` and `aim_with_mouse`; requests the music to stop.
    pub fn reset(&mut self) {
        self.push_event(GameEvent::StopMusic);

        self.phase = GamePhase::Menu;
        self.player = Player::new();
        self.bullets.clear();
        self.enemies.clear();
        self.powerups.clear();
        self.particles.clear();
        self.stars = (0..STAR_COUNT).map(|_| Star::new(&mut self.rng)).collect();
        self.score = 0;
        self.level = 1;
        self.spawn_timer = 0;
        self.spawn_cooldown = SPAWN_COOLDOWN_START;
        self.time_played = 0;
    }

    pub fn update_stars(&mut self) {
        for star in &mut self.stars {
            star.update(&mut self.rng);
        }
    }

    /// Count the spawn timer down and spawn an enemy when it expires
    pub fn update_spawner(&mut self) {
        self.spawn_timer -= 1;
        if self.spawn_timer <= 0 {
            self.spawn_enemy();
            self.spawn_cooldown = spawn_cooldown_for(self.level);
            self.spawn_timer = self.spawn_cooldown;
        }
    }

    pub fn spawn_enemy(&mut self) {
        let enemy = Enemy::spawn(self.level, &mut self.rng);
        self.enemies.push(enemy);
    }

    /// Roll for a power-up drop at `pos`. Returns the dropped kind, if any.
    pub fn maybe_drop_powerup(&mut self, pos: Vec2) -> Option<PowerUpKind> {
        if self.rng.random::<f64>() >= POWERUP_DROP_CHANCE {
            return None;
        }
        let kind = PowerUpKind::roll(&mut self.rng);
        self.powerups.push(PowerUp::new(pos, kind));
        Some(kind)
    }

    /// Emit `count` cosmetic particles
    pub fn burst(&mut self, pos: Vec2, color: Rgb, count: usize) {
        Particle::burst(&mut self.particles, pos, color, count, &mut self.rng);
    }

    /// Drop bullets, enemies and power-ups marked dead this frame
    pub fn sweep_dead(&mut self) {
        self.bullets.retain(|b| b.alive);
        self.enemies.retain(|e| e.alive);
        self.powerups.retain(|p| p.alive);
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Pending events (oldest first)
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cursor is hidden only while playing with mouse aim turned off
    pub fn cursor_visible(&self) -> bool {
        self.phase != GamePhase::Playing || self.aim_with_mouse
    }

    /// Whole seconds of triple shot left (for the HUD)
    pub fn triple_shot_secs(&self) -> u32 {
        self.player.triple_shot / FPS
    }
}
