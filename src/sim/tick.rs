//! Frame-stepped simulation tick
//!
//! `tick` advances the Playing phase by one frame; `handle_command` drives
//! the phase state machine from key presses.

use glam::Vec2;

use super::collision::circles_overlap;
use super::entities::PowerUpKind;
use super::input::{Command, TickInput};
use super::state::{GameEvent, GamePhase, GameState, SoundEffect};
use crate::consts::*;
use crate::palette;

/// Apply a key-press command to the phase state machine
pub fn handle_command(state: &mut GameState, command: Command) {
    if command == Command::ToggleAim {
        state.aim_with_mouse = !state.aim_with_mouse;
        log::debug!("Mouse aim: {}", state.aim_with_mouse);
        return;
    }

    match (state.phase, command) {
        (GamePhase::Menu, Command::Confirm) => {
            state.phase = GamePhase::Playing;
            state.push_event(GameEvent::StartMusic);
        }
        (GamePhase::Playing, Command::TogglePause) => {
            state.phase = GamePhase::Paused;
        }
        (GamePhase::Paused, Command::TogglePause) => {
            state.phase = GamePhase::Playing;
        }
        (GamePhase::Paused, Command::Back) | (GamePhase::GameOver, Command::Back) => {
            state.reset();
        }
        (GamePhase::GameOver, Command::Confirm) => {
            state.reset();
            state.phase = GamePhase::Playing;
            state.push_event(GameEvent::StartMusic);
        }
        _ => return,
    }

    log::info!("Phase -> {:?}", state.phase);
}

/// Advance the session by one frame. No-op outside the Playing phase.
pub fn tick(state: &mut GameState, input: &TickInput) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.player.update(input);

    // Left mouse aims at the cursor, Space fires straight up
    if let Some(target) = input.fire_at {
        fire(state, target);
    }
    if input.fire_up {
        let target = state.player.pos - Vec2::new(0.0, 1000.0);
        fire(state, target);
    }

    for bullet in &mut state.bullets {
        bullet.update();
    }
    for enemy in &mut state.enemies {
        enemy.update();
    }
    for powerup in &mut state.powerups {
        powerup.update();
    }
    state.update_stars();

    state.update_spawner();

    resolve_bullet_hits(state);
    if state.player.is_alive() {
        collect_powerups(state);
    }
    resolve_player_hits(state);

    for particle in &mut state.particles {
        particle.update();
    }
    state.particles.retain(|p| p.is_alive());

    if !state.player.is_alive() {
        end_run(state);
    }

    state.time_played += 1;
    state.sweep_dead();
}

fn fire(state: &mut GameState, target: Vec2) {
    if state.player.shoot(target, &mut state.bullets) {
        state.push_event(GameEvent::Sound(SoundEffect::Shoot));
    }
}

/// Bullet x enemy. Every overlapping bullet is consumed, even by an enemy
/// already killed this frame; the kill reward is granted once.
fn resolve_bullet_hits(state: &mut GameState) {
    for ei in 0..state.enemies.len() {
        if !state.enemies[ei].alive {
            continue;
        }
        for bi in 0..state.bullets.len() {
            let bullet = &state.bullets[bi];
            let enemy = &state.enemies[ei];
            if !bullet.alive || !circles_overlap(enemy.pos, enemy.radius, bullet.pos, bullet.radius)
            {
                continue;
            }

            state.bullets[bi].alive = false;
            let killed = state.enemies[ei].damage();
            let (pos, color) = (state.enemies[ei].pos, state.enemies[ei].color);
            state.burst(pos, color, PARTICLES_ENEMY_HIT);

            if killed {
                state.push_event(GameEvent::Sound(SoundEffect::Explosion));
                state.score += SCORE_PER_KILL;
                state.maybe_drop_powerup(pos);
                state.enemies[ei].alive = false;
                if state.score % SCORE_PER_LEVEL == 0 {
                    state.level += 1;
                    log::info!("Level up: {} (score {})", state.level, state.score);
                }
            }
        }
    }
}

/// Player x power-up, tested with axis-aligned boxes
fn collect_powerups(state: &mut GameState) {
    let player_box = state.player.bounds();
    for i in 0..state.powerups.len() {
        let powerup = &state.powerups[i];
        if !powerup.alive || !player_box.intersects(&powerup.bounds()) {
            continue;
        }

        let (kind, pos) = (powerup.kind, powerup.pos);
        match kind {
            PowerUpKind::Heart => state.player.heal(),
            PowerUpKind::TripleShot => state.player.triple_shot = TRIPLE_SHOT_FRAMES,
        }
        state.push_event(GameEvent::Sound(SoundEffect::Pickup));
        state.burst(pos, palette::GOLD, PARTICLES_PICKUP);
        state.powerups[i].alive = false;
        log::debug!("Picked up {:?}", kind);
    }
}

/// Enemy x player. Each overlapping enemy attempts damage; the
/// invulnerability window absorbs all but the first.
fn resolve_player_hits(state: &mut GameState) {
    for i in 0..state.enemies.len() {
        let enemy = &state.enemies[i];
        if !enemy.alive
            || !circles_overlap(enemy.pos, enemy.radius, state.player.pos, state.player.radius)
        {
            continue;
        }
        if state.player.hit() {
            let pos = state.player.pos;
            state.burst(pos, palette::PINK, PARTICLES_PLAYER_HIT);
            log::debug!("Player hit, hp {}", state.player.hp);
        }
    }
}

fn end_run(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    state.highscore = state.highscore.max(state.score);
    let highscore = state.highscore;
    state.push_event(GameEvent::SaveHighScore(highscore));
    state.push_event(GameEvent::StopMusic);
    log::info!(
        "Game over: score {}, best {}, {} frames",
        state.score,
        state.highscore,
        state.time_played
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actors::Enemy;
    use crate::sim::entities::{Bullet, PowerUp};

    fn playing_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed, 0);
        handle_command(&mut state, Command::Confirm);
        state.drain_events();
        // Keep the spawner quiet so tests control every enemy
        state.spawn_timer = i32::MAX;
        state
    }

    fn still_enemy(pos: Vec2, radius: f32) -> Enemy {
        Enemy::new(pos, Vec2::ZERO, radius, palette::BLUE)
    }

    #[test]
    fn test_menu_to_playing_starts_music() {
        let mut state = GameState::new(1, 0);
        handle_command(&mut state, Command::Confirm);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.events(), &[GameEvent::StartMusic]);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut state = playing_state(1);
        handle_command(&mut state, Command::TogglePause);
        assert_eq!(state.phase, GamePhase::Paused);

        // Paused sessions do not advance
        let before = state.time_played;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_played, before);

        handle_command(&mut state, Command::TogglePause);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_escape_from_pause_returns_to_menu() {
        let mut state = playing_state(1);
        state.score = 40;
        handle_command(&mut state, Command::TogglePause);
        handle_command(&mut state, Command::Back);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_illegal_transitions_ignored() {
        let mut state = GameState::new(1, 0);
        for cmd in [Command::TogglePause, Command::Back] {
            handle_command(&mut state, cmd);
            assert_eq!(state.phase, GamePhase::Menu);
        }

        let mut state = playing_state(1);
        for cmd in [Command::Confirm, Command::Back] {
            handle_command(&mut state, cmd);
            assert_eq!(state.phase, GamePhase::Playing);
        }

        state.phase = GamePhase::GameOver;
        handle_command(&mut state, Command::TogglePause);
        assert_eq!(state.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_toggle_aim_in_any_phase() {
        let mut state = GameState::new(1, 0);
        assert!(state.aim_with_mouse);
        handle_command(&mut state, Command::ToggleAim);
        assert!(!state.aim_with_mouse);
        assert_eq!(state.phase, GamePhase::Menu);
        handle_command(&mut state, Command::Confirm);
        handle_command(&mut state, Command::ToggleAim);
        assert!(state.aim_with_mouse);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_restart_after_game_over_keeps_highscore() {
        let mut state = playing_state(3);
        state.score = 90;
        state.player.hp = 0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.highscore, 90);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::SaveHighScore(90)));
        assert!(events.contains(&GameEvent::StopMusic));

        handle_command(&mut state, Command::Confirm);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.highscore, 90);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::StopMusic, GameEvent::StartMusic]
        );

        state.phase = GamePhase::GameOver;
        handle_command(&mut state, Command::Back);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.highscore, 90);
    }

    #[test]
    fn test_lower_score_does_not_replace_highscore() {
        let mut state = GameState::new(3, 500);
        handle_command(&mut state, Command::Confirm);
        state.spawn_timer = i32::MAX;
        state.score = 30;
        state.player.hp = 0;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.highscore, 500);
        assert!(state.events().contains(&GameEvent::SaveHighScore(500)));
    }

    #[test]
    fn test_first_playing_frame_spawns_enemy() {
        let mut state = GameState::new(11, 0);
        handle_command(&mut state, Command::Confirm);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.spawn_timer, 44);
        assert_eq!(state.time_played, 1);
    }

    #[test]
    fn test_shooting_queues_sound() {
        let mut state = playing_state(1);
        let input = TickInput {
            fire_up: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.bullets.len(), 1);
        assert_eq!(state.events(), &[GameEvent::Sound(SoundEffect::Shoot)]);
        // Straight up
        assert!(state.bullets[0].vel.x.abs() < 1e-4);
        assert!(state.bullets[0].vel.y < 0.0);
    }

    #[test]
    fn test_mouse_and_space_share_cooldown() {
        let mut state = playing_state(1);
        let input = TickInput {
            fire_at: Some(Vec2::new(100.0, 100.0)),
            fire_up: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.bullets.len(), 1);
    }

    #[test]
    fn test_bullet_kills_small_enemy() {
        let mut state = playing_state(8);
        state.enemies.push(still_enemy(Vec2::new(300.0, 200.0), 16.0));
        state.bullets.push(Bullet::new(Vec2::new(300.0, 200.0), 0.0));
        state.bullets[0].vel = Vec2::ZERO;

        tick(&mut state, &TickInput::default());

        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 10);
        assert_eq!(state.level, 1);
        assert!(state
            .events()
            .contains(&GameEvent::Sound(SoundEffect::Explosion)));
        // 10 hit particles, all still alive after one update
        assert_eq!(state.particles.len(), 10);
    }

    #[test]
    fn test_tough_enemy_takes_two_bullets_same_frame() {
        let mut state = playing_state(8);
        state.enemies.push(still_enemy(Vec2::new(300.0, 200.0), 22.0));
        for _ in 0..2 {
            let mut b = Bullet::new(Vec2::new(300.0, 200.0), 0.0);
            b.vel = Vec2::ZERO;
            state.bullets.push(b);
        }

        tick(&mut state, &TickInput::default());

        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 10);
        assert_eq!(state.particles.len(), 20);
    }

    #[test]
    fn test_extra_bullets_consumed_without_extra_score() {
        let mut state = playing_state(8);
        state.enemies.push(still_enemy(Vec2::new(300.0, 200.0), 15.0));
        for _ in 0..3 {
            let mut b = Bullet::new(Vec2::new(300.0, 200.0), 0.0);
            b.vel = Vec2::ZERO;
            state.bullets.push(b);
        }

        tick(&mut state, &TickInput::default());

        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_level_up_every_hundred_points() {
        let mut state = playing_state(8);
        state.score = 90;
        state.enemies.push(still_enemy(Vec2::new(300.0, 200.0), 15.0));
        let mut b = Bullet::new(Vec2::new(300.0, 200.0), 0.0);
        b.vel = Vec2::ZERO;
        state.bullets.push(b);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 100);
        assert_eq!(state.level, 2);

        // The next kill does not level up again
        state.enemies.push(still_enemy(Vec2::new(600.0, 200.0), 15.0));
        let mut b = Bullet::new(Vec2::new(600.0, 200.0), 0.0);
        b.vel = Vec2::ZERO;
        state.bullets.push(b);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 110);
        assert_eq!(state.level, 2);
    }

    #[test]
    fn test_score_and_level_over_many_kills() {
        let mut state = playing_state(21);
        for kill in 1..=35u64 {
            state.enemies.push(still_enemy(Vec2::new(300.0, 200.0), 15.0));
            let mut b = Bullet::new(Vec2::new(300.0, 200.0), 0.0);
            b.vel = Vec2::ZERO;
            state.bullets.push(b);
            tick(&mut state, &TickInput::default());
            assert_eq!(state.score, kill * 10);
            assert_eq!(state.level as u64, 1 + state.score / 100);
        }
    }

    #[test]
    fn test_heart_pickup_capped() {
        let mut state = playing_state(4);
        state.player.hp = 5;
        let pos = state.player.pos;
        state.powerups.push(PowerUp::new(pos, PowerUpKind::Heart));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.hp, 5);
        assert!(state.powerups.is_empty());
        assert_eq!(state.particles.len(), 15);
        assert!(state.events().contains(&GameEvent::Sound(SoundEffect::Pickup)));
    }

    #[test]
    fn test_triple_pickup_then_three_bullets() {
        let mut state = playing_state(4);
        let pos = state.player.pos;
        state.powerups.push(PowerUp::new(pos, PowerUpKind::TripleShot));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.triple_shot, TRIPLE_SHOT_FRAMES);

        let target = Vec2::new(200.0, 100.0);
        let input = TickInput {
            fire_at: Some(target),
            ..Default::default()
        };
        tick(&mut state, &input);
        assert_eq!(state.bullets.len(), 3);

        // Bullets moved once from the player's position at fire time
        let origin = state.player.pos;
        let theta = (target - origin).y.atan2((target - origin).x).to_degrees();
        for (bullet, offset) in state.bullets.iter().zip([-12.0f32, 0.0, 12.0]) {
            let angle = bullet.vel.y.atan2(bullet.vel.x).to_degrees();
            assert!((angle - (theta + offset)).abs() < 1e-3);
        }
    }

    #[test]
    fn test_pickup_uses_boxes_not_circles() {
        let mut state = playing_state(4);
        let pos = state.player.pos;
        // Corner-to-corner: boxes overlap, centres 31 px apart on each axis
        state
            .powerups
            .push(PowerUp::new(pos + Vec2::new(31.0, 31.0 - 2.2), PowerUpKind::Heart));
        state.player.hp = 2;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.hp, 3);
    }

    #[test]
    fn test_enemy_hit_scenario() {
        let mut state = playing_state(6);
        assert_eq!(state.player.pos, Vec2::new(450.0, 520.0));
        state
            .enemies
            .push(Enemy::new(Vec2::new(450.0, 300.0), Vec2::new(0.0, 2.0), 14.0, palette::PINK));

        let mut hits = 0;
        let mut frames_after_hit = None;
        for _ in 0..400 {
            let hp_before = state.player.hp;
            tick(&mut state, &TickInput::default());
            if state.player.hp < hp_before {
                hits += 1;
                frames_after_hit = Some(0);
            } else if let Some(f) = frames_after_hit.as_mut() {
                *f += 1;
                if *f >= 59 {
                    break;
                }
            }
        }

        assert_eq!(hits, 1);
        assert_eq!(state.player.hp, 2);
        assert!(state.particles.len() <= 20);
    }

    #[test]
    fn test_overlapping_enemies_damage_once() {
        let mut state = playing_state(6);
        let pos = state.player.pos;
        for _ in 0..3 {
            state.enemies.push(still_enemy(pos, 14.0));
        }
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.hp, 2);
        assert_eq!(state.player.invuln, INVULN_FRAMES);
    }

    #[test]
    fn test_enemy_killed_this_frame_cannot_hurt_player() {
        let mut state = playing_state(6);
        let pos = state.player.pos;
        state.enemies.push(still_enemy(pos, 14.0));
        let mut b = Bullet::new(pos, 0.0);
        b.vel = Vec2::ZERO;
        state.bullets.push(b);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.invuln, 0);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_last_hit_ends_run() {
        let mut state = playing_state(6);
        state.player.hp = 1;
        let pos = state.player.pos;
        state.enemies.push(still_enemy(pos, 14.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.hp, 0);
        assert_eq!(state.phase, GamePhase::GameOver);

        // Game over freezes the simulation
        let frames = state.time_played;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.time_played, frames);
    }

    #[test]
    fn test_particles_expire() {
        let mut state = playing_state(6);
        state.burst(Vec2::new(100.0, 100.0), palette::GOLD, 30);
        for _ in 0..40 {
            tick(&mut state, &TickInput::default());
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(99999, 0);
        let mut b = GameState::new(99999, 0);
        handle_command(&mut a, Command::Confirm);
        handle_command(&mut b, Command::Confirm);

        let inputs = [
            TickInput {
                left: true,
                fire_up: true,
                ..Default::default()
            },
            TickInput {
                fire_at: Some(Vec2::new(100.0, 50.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input);
            tick(&mut b, input);
        }

        assert_eq!(a.time_played, b.time_played);
        assert_eq!(a.score, b.score);
        assert_eq!(a.enemies.len(), b.enemies.len());
        assert_eq!(a.player.pos, b.player.pos);
    }
}
