//! Player and enemy actors
//!
//! Actors have hit points and a circular collision footprint.

use glam::Vec2;
use rand::Rng;

use super::collision::Aabb;
use super::entities::Bullet;
use super::input::TickInput;
use crate::consts::*;
use crate::palette::{self, Rgb};
use crate::{angle_toward_degrees, clamp};

/// Diagonal movement scale, 1/√2 to four places
const DIAGONAL_SCALE: f32 = 0.7071;

/// The player's cat
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub speed: f32,
    pub radius: f32,
    pub hp: u8,
    /// Frames of invulnerability remaining
    pub invuln: u32,
    /// Frames until the next shot is allowed
    pub shoot_cooldown: u32,
    /// Frames of triple shot remaining
    pub triple_shot: u32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(WIDTH / 2.0, HEIGHT - 80.0),
            speed: PLAYER_SPEED,
            radius: PLAYER_RADIUS,
            hp: PLAYER_START_HP,
            invuln: 0,
            shoot_cooldown: 0,
            triple_shot: 0,
        }
    }
}

impl Player {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move from digital input and count timers down
    pub fn update(&mut self, input: &TickInput) {
        let mut dir = input.axis();
        if dir.x != 0.0 && dir.y != 0.0 {
            dir *= DIAGONAL_SCALE;
        }

        self.pos += dir * self.speed;
        self.pos.x = clamp(self.pos.x, PLAYER_MARGIN, WIDTH - PLAYER_MARGIN);
        self.pos.y = clamp(self.pos.y, PLAYER_MARGIN, HEIGHT - PLAYER_MARGIN);

        self.shoot_cooldown = self.shoot_cooldown.saturating_sub(1);
        self.invuln = self.invuln.saturating_sub(1);
        self.triple_shot = self.triple_shot.saturating_sub(1);
    }

    /// Fire toward `target`. Returns false while the cooldown is running.
    pub fn shoot(&mut self, target: Vec2, bullets: &mut Vec<Bullet>) -> bool {
        if self.shoot_cooldown > 0 {
            return false;
        }

        let angle = angle_toward_degrees(self.pos, target);
        if self.triple_shot > 0 {
            for offset in [-TRIPLE_SHOT_SPREAD_DEG, 0.0, TRIPLE_SHOT_SPREAD_DEG] {
                bullets.push(Bullet::new(self.pos, angle + offset));
            }
        } else {
            bullets.push(Bullet::new(self.pos, angle));
        }

        self.shoot_cooldown = SHOOT_COOLDOWN;
        true
    }

    /// Take one point of damage unless invulnerable.
    /// Returns true when damage was applied.
    pub fn hit(&mut self) -> bool {
        if self.invuln > 0 {
            return false;
        }
        self.hp = self.hp.saturating_sub(1);
        self.invuln = INVULN_FRAMES;
        true
    }

    /// +1 hp, capped at the maximum
    pub fn heal(&mut self) {
        self.hp = (self.hp + 1).min(PLAYER_MAX_HP);
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Square box used for power-up pickup
    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, PLAYER_PICKUP_HALF)
    }

    /// Blink phase while invulnerable (eyes dim every 5 frames)
    pub fn blink_on(&self) -> bool {
        (self.invuln / 5) % 2 == 1
    }
}

/// A descending jelly
#[derive(Debug, Clone)]
pub struct Enemy {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub hp: u8,
    pub color: Rgb,
    pub alive: bool,
}

impl Enemy {
    /// Spawn just above the screen with level-scaled descent speed
    pub fn spawn<R: Rng + ?Sized>(level: u32, rng: &mut R) -> Self {
        let radius = rng.random_range(ENEMY_MIN_RADIUS..=ENEMY_MAX_RADIUS);
        let x = rng.random_range(radius..=WIDTH as u32 - radius) as f32;
        let radius = radius as f32;

        let base = Self::base_speed(level);
        let vy = rng.random_range(base..=base + ENEMY_SPEED_JITTER);
        let vx = rng.random_range(-ENEMY_MAX_DRIFT..=ENEMY_MAX_DRIFT);
        let color = palette::ENEMY_COLORS[rng.random_range(0..palette::ENEMY_COLORS.len())];

        Self::new(Vec2::new(x, -radius - 10.0), Vec2::new(vx, vy), radius, color)
    }

    /// Enemy with hp derived from its radius
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgb) -> Self {
        Self {
            pos,
            vel,
            radius,
            hp: Self::hp_for_radius(radius),
            color,
            alive: true,
        }
    }

    /// Minimum descent speed for a level
    pub fn base_speed(level: u32) -> f32 {
        ENEMY_BASE_SPEED + (level as f32 * ENEMY_SPEED_PER_LEVEL).min(ENEMY_MAX_LEVEL_BONUS)
    }

    pub fn hp_for_radius(radius: f32) -> u8 {
        if radius < ENEMY_TOUGH_RADIUS { 1 } else { 2 }
    }

    pub fn update(&mut self) {
        self.pos += self.vel;
        if self.pos.x < self.radius || self.pos.x > WIDTH - self.radius {
            self.vel.x = -self.vel.x;
        }
        if self.pos.y - self.radius > HEIGHT + ENEMY_EXIT_MARGIN {
            self.alive = false;
        }
    }

    /// Apply one point of damage. Returns true on the hit that kills.
    pub fn damage(&mut self) -> bool {
        if self.hp == 0 {
            return false;
        }
        self.hp -= 1;
        self.hp == 0
    }
}
