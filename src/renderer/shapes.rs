//! Shape drawing for every entity kind
//!
//! Coordinates are pixel offsets from the entity's position.

use glam::Vec2;
use std::f32::consts::PI;

use super::Canvas;
use crate::palette::{self, Rgb};
use crate::sim::{Bullet, Enemy, Particle, Player, PowerUp, PowerUpKind, Star};

/// Segments used to approximate the player's body ellipse
const ELLIPSE_SEGMENTS: u32 = 28;

/// Points on an axis-aligned ellipse
pub fn ellipse_points(center: Vec2, half: Vec2, segments: u32) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let theta = (i as f32 / segments as f32) * 2.0 * PI;
            center + Vec2::new(half.x * theta.cos(), half.y * theta.sin())
        })
        .collect()
}

/// Two round lobes over a downward triangle
fn heart<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Vec2,
    lobe_radius: f32,
    lobe_y: f32,
    base_y: f32,
    tip_y: f32,
) {
    let color = palette::HOT_PINK;
    canvas.fill_circle(center + Vec2::new(-6.0, lobe_y), lobe_radius, color);
    canvas.fill_circle(center + Vec2::new(6.0, lobe_y), lobe_radius, color);
    canvas.fill_polygon(
        &[
            center + Vec2::new(-12.0, base_y),
            center + Vec2::new(12.0, base_y),
            center + Vec2::new(0.0, tip_y),
        ],
        color,
    );
}

/// Cat: oval body, two ears, eyes and whiskers. Eyes and whiskers dim
/// while the invulnerability blink is on.
pub fn player<C: Canvas + ?Sized>(canvas: &mut C, player: &Player) {
    let p = player.pos;
    let body = palette::PLUM;

    canvas.fill_polygon(
        &ellipse_points(p, Vec2::new(24.0, 20.0), ELLIPSE_SEGMENTS),
        body,
    );

    // Ears
    for side in [-1.0f32, 1.0] {
        canvas.fill_polygon(
            &[
                p + Vec2::new(12.0 * side, -12.0),
                p + Vec2::new(2.0 * side, -30.0),
                p + Vec2::new(20.0 * side, -24.0),
            ],
            body,
        );
    }

    let face = if player.blink_on() {
        palette::SOFT_GREY
    } else {
        palette::INK
    };

    canvas.fill_circle(p + Vec2::new(-8.0, -3.0), 4.0, face);
    canvas.fill_circle(p + Vec2::new(8.0, -3.0), 4.0, face);

    // Whiskers
    for side in [-1.0f32, 1.0] {
        canvas.line(
            p + Vec2::new(16.0 * side, 4.0),
            p + Vec2::new(30.0 * side, 2.0),
            2.0,
            face,
        );
        canvas.line(
            p + Vec2::new(16.0 * side, 8.0),
            p + Vec2::new(30.0 * side, 10.0),
            2.0,
            face,
        );
    }
}

/// Jelly: filled disc with a small shine towards the top-left
pub fn enemy<C: Canvas + ?Sized>(canvas: &mut C, enemy: &Enemy) {
    canvas.fill_circle(enemy.pos, enemy.radius, enemy.color);

    let r = enemy.radius.floor();
    let shine = enemy.pos - Vec2::new((r / 3.0).floor(), (r / 4.0).floor());
    canvas.fill_circle(shine, (r / 5.0).floor().max(2.0), palette::WHITE);
}

pub fn bullet<C: Canvas + ?Sized>(canvas: &mut C, bullet: &Bullet) {
    canvas.fill_circle(bullet.pos, bullet.radius, palette::BLUE);
}

pub fn powerup<C: Canvas + ?Sized>(canvas: &mut C, powerup: &PowerUp) {
    match powerup.kind {
        PowerUpKind::Heart => heart(canvas, powerup.pos, 6.0, -4.0, -2.0, 12.0),
        PowerUpKind::TripleShot => {
            canvas.fill_rounded_rect(
                powerup.pos - Vec2::splat(10.0),
                Vec2::splat(20.0),
                6.0,
                palette::GOLD,
            );
            canvas.fill_circle(powerup.pos, 3.0, palette::WHITE);
        }
    }
}

/// Life indicator in the HUD, slightly larger than the pickup heart
pub fn hud_heart<C: Canvas + ?Sized>(canvas: &mut C, center: Vec2) {
    heart(canvas, center, 7.0, 0.0, 2.0, 16.0);
}

pub fn particle<C: Canvas + ?Sized>(canvas: &mut C, particle: &Particle) {
    if particle.is_alive() {
        canvas.fill_circle(particle.pos, particle.size, particle.color);
    }
}

pub fn star<C: Canvas + ?Sized>(canvas: &mut C, star: &Star) {
    canvas.fill_circle(star.pos, star.size, star.color());
}

/// Color helper for backends that want floats
pub fn rgb_to_f32(color: Rgb) -> [f32; 3] {
    [
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    ]
}
