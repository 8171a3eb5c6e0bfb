//! Passive point entities: bullets, power-ups, particles and stars
//!
//! Each kind advances itself one frame at a time. Gameplay kinds carry an
//! `alive` flag that the collision pass clears; the session sweeps dead
//! entries once per frame.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;
use crate::direction_from_degrees;
use crate::palette::{self, Rgb};
use crate::sim::collision::Aabb;

/// A player projectile
#[derive(Debug, Clone)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
}

impl Bullet {
    /// Bullet travelling at `BULLET_SPEED` along `angle_deg`
    pub fn new(pos: Vec2, angle_deg: f32) -> Self {
        Self {
            pos,
            vel: direction_from_degrees(angle_deg) * BULLET_SPEED,
            radius: BULLET_RADIUS,
            alive: true,
        }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        if !Self::in_play_area(self.pos) {
            self.alive = false;
        }
    }

    /// True while the centre is inside the screen grown by `BULLET_MARGIN`
    pub fn in_play_area(pos: Vec2) -> bool {
        pos.x >= -BULLET_MARGIN
            && pos.x <= WIDTH + BULLET_MARGIN
            && pos.y >= -BULLET_MARGIN
            && pos.y <= HEIGHT + BULLET_MARGIN
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// +1 hp, capped at `PLAYER_MAX_HP`
    Heart,
    /// Three-way fire for `TRIPLE_SHOT_FRAMES`
    TripleShot,
}

/// Drop table for power-ups; kinds are picked by uniform index
pub const POWERUP_TABLE: [PowerUpKind; 4] = [
    PowerUpKind::Heart,
    PowerUpKind::TripleShot,
    PowerUpKind::TripleShot,
    PowerUpKind::Heart,
];

impl PowerUpKind {
    /// Uniform pick from `POWERUP_TABLE`
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        POWERUP_TABLE[rng.random_range(0..POWERUP_TABLE.len())]
    }
}

/// A falling pickup
#[derive(Debug, Clone)]
pub struct PowerUp {
    pub pos: Vec2,
    pub vy: f32,
    pub kind: PowerUpKind,
    pub alive: bool,
}

impl PowerUp {
    pub fn new(pos: Vec2, kind: PowerUpKind) -> Self {
        Self {
            pos,
            vy: POWERUP_SPEED,
            kind,
            alive: true,
        }
    }

    pub fn update(&mut self) {
        self.pos.y += self.vy;
        if self.pos.y > HEIGHT + POWERUP_EXIT_MARGIN {
            self.alive = false;
        }
    }

    /// Pickup box (24x24)
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, POWERUP_HALF)
    }
}

/// Cosmetic spark. No gameplay effect.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames remaining
    pub life: i32,
    pub size: f32,
    pub color: Rgb,
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(pos: Vec2, color: Rgb, rng: &mut R) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-1.5..=1.5), rng.random_range(-2.0..=-0.5)),
            life: rng.random_range(20..=40),
            size: rng.random_range(2..=4) as f32,
            color,
        }
    }

    /// Emit `count` particles at `pos`
    pub fn burst<R: Rng + ?Sized>(
        out: &mut Vec<Particle>,
        pos: Vec2,
        color: Rgb,
        count: usize,
        rng: &mut R,
    ) {
        out.extend((0..count).map(|_| Particle::new(pos, color, &mut *rng)));
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        self.vel.y += PARTICLE_GRAVITY;
        self.life -= 1;
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }
}

/// Background star, wraps to the top after leaving the bottom
#[derive(Debug, Clone)]
pub struct Star {
    pub pos: Vec2,
    pub speed: f32,
    pub size: f32,
}

impl Star {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0..=WIDTH as u32) as f32,
                rng.random_range(0..=HEIGHT as u32) as f32,
            ),
            speed: rng.random_range(0.2..=1.0),
            size: rng.random_range(1..=3) as f32,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pos.y += self.speed;
        if self.pos.y > HEIGHT {
            self.pos.y = 0.0;
            self.pos.x = rng.random_range(0..=WIDTH as u32) as f32;
        }
    }

    pub fn color(&self) -> Rgb {
        palette::STAR
    }
}
