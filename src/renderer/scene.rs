//! Screen composition per game phase

use glam::Vec2;

use super::{Canvas, TextStyle, shapes};
use crate::consts::*;
use crate::palette;
use crate::sim::{GamePhase, GameState};

const CX: f32 = WIDTH / 2.0;
/// Left edge of the score column
const HUD_RIGHT_X: f32 = WIDTH - 130.0;

/// Draw the whole frame for the current phase. `fps` is shown in the
/// corner when given.
pub fn draw_scene<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState, fps: Option<u32>) {
    match state.phase {
        GamePhase::Menu => draw_menu(canvas, state),
        GamePhase::Playing => draw_playing(canvas, state),
        GamePhase::Paused => {
            draw_playing(canvas, state);
            draw_pause(canvas);
        }
        GamePhase::GameOver => draw_game_over(canvas, state),
    }

    if let Some(fps) = fps {
        canvas.text(
            &format!("FPS: {}", fps),
            Vec2::new(20.0, HEIGHT - 40.0),
            &TextStyle::left(18).color(palette::MID_GREY),
        );
    }
}

/// Lilac backdrop, white rounded panel, drifting stars
fn draw_background<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    canvas.clear(palette::BACKGROUND);
    canvas.fill_rounded_rect(
        Vec2::new(10.0, 10.0),
        Vec2::new(WIDTH - 20.0, HEIGHT - 20.0),
        24.0,
        palette::WHITE,
    );
    for star in &state.stars {
        shapes::star(canvas, star);
    }
}

fn draw_menu<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    draw_background(canvas, state);

    canvas.text("Cute Shooter", Vec2::new(CX, 150.0), &TextStyle::centered(64).bold());
    canvas.text(
        "A cute little shooter",
        Vec2::new(CX, 210.0),
        &TextStyle::centered(26),
    );
    canvas.text(
        "Left click or SPACE to shoot | Move: W A S D",
        Vec2::new(CX, 250.0),
        &TextStyle::centered(22).color(palette::HINT_GREY),
    );
    canvas.text(
        &format!("Best: High Score {}", state.highscore),
        Vec2::new(CX, 290.0),
        &TextStyle::centered(24),
    );
    canvas.text(
        "Press [ENTER] to start",
        Vec2::new(CX, 360.0),
        &TextStyle::centered(28).color(palette::PLUM).bold(),
    );
    let aim = if state.aim_with_mouse { "on" } else { "off" };
    canvas.text(
        &format!("Press [M] to toggle mouse aim (now: {})", aim),
        Vec2::new(CX, 400.0),
        &TextStyle::centered(18).color(palette::MID_GREY),
    );
}

fn draw_playing<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    draw_background(canvas, state);

    for e in &state.enemies {
        shapes::enemy(canvas, e);
    }
    for b in &state.bullets {
        shapes::bullet(canvas, b);
    }
    for p in &state.powerups {
        shapes::powerup(canvas, p);
    }
    shapes::player(canvas, &state.player);
    // Particles on top of everything but the HUD
    for p in &state.particles {
        shapes::particle(canvas, p);
    }

    draw_hud(canvas, state);
}

fn draw_hud<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    for i in 0..state.player.hp {
        shapes::hud_heart(canvas, Vec2::new(20.0 + i as f32 * 26.0, 20.0));
    }

    canvas.text(
        &format!("Score: {}", state.score),
        Vec2::new(HUD_RIGHT_X, 24.0),
        &TextStyle::left(26),
    );
    canvas.text(
        &format!("Level: {}", state.level),
        Vec2::new(HUD_RIGHT_X, 52.0),
        &TextStyle::left(22),
    );
    if state.player.triple_shot > 0 {
        canvas.text(
            &format!("Triple: {}s", state.triple_shot_secs()),
            Vec2::new(HUD_RIGHT_X, 80.0),
            &TextStyle::left(22).color(palette::MID_GREY),
        );
    }
}

fn draw_pause<C: Canvas + ?Sized>(canvas: &mut C) {
    canvas.text("Paused", Vec2::new(CX, HEIGHT / 2.0 - 20.0), &TextStyle::centered(48));
    canvas.text(
        "[P] resume | [ESC] back to menu",
        Vec2::new(CX, HEIGHT / 2.0 + 30.0),
        &TextStyle::centered(24),
    );
}

fn draw_game_over<C: Canvas + ?Sized>(canvas: &mut C, state: &GameState) {
    draw_background(canvas, state);

    canvas.text(
        "Game Over!",
        Vec2::new(CX, 180.0),
        &TextStyle::centered(56).color(palette::PINK).bold(),
    );
    canvas.text(
        &format!("Score: {}", state.score),
        Vec2::new(CX, 240.0),
        &TextStyle::centered(30),
    );
    canvas.text(
        &format!("High Score: {}", state.highscore),
        Vec2::new(CX, 282.0),
        &TextStyle::centered(26),
    );
    canvas.text(
        "[ENTER] play again  |  [ESC] back to menu",
        Vec2::new(CX, 330.0),
        &TextStyle::centered(22),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::testing::{DrawCmd, RecordingCanvas};
    use crate::sim::{PowerUp, PowerUpKind};

    fn render(state: &GameState, fps: Option<u32>) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        draw_scene(&mut canvas, state, fps);
        canvas
    }

    #[test]
    fn test_menu_screen() {
        let state = GameState::new(1, 480);
        let canvas = render(&state, None);

        assert_eq!(canvas.cmds[0], DrawCmd::Clear(palette::BACKGROUND));
        assert!(canvas.has_text("Cute Shooter"));
        assert!(canvas.has_text("High Score 480"));
        assert!(canvas.has_text("(now: on)"));
        assert!(!canvas.has_text("FPS"));
        assert!(!canvas.has_text("Score:"));
    }

    #[test]
    fn test_background_panel_and_stars() {
        let state = GameState::new(1, 0);
        let canvas = render(&state, None);
        assert_eq!(
            canvas.cmds[1],
            DrawCmd::RoundedRect {
                min: Vec2::new(10.0, 10.0),
                size: Vec2::new(880.0, 580.0),
                radius: 24.0,
                color: palette::WHITE,
            }
        );
        let stars = canvas
            .cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Circle { color, .. } if *color == palette::STAR))
            .count();
        assert_eq!(stars, STAR_COUNT);
    }

    #[test]
    fn test_hud_hearts_follow_hp() {
        let mut state = GameState::new(1, 0);
        state.phase = GamePhase::Playing;
        state.player.hp = 4;
        let canvas = render(&state, None);
        // Two lobes per heart
        assert_eq!(canvas.circles_with(palette::HOT_PINK, 7.0), 8);
        assert!(canvas.has_text("Score: 0"));
        assert!(canvas.has_text("Level: 1"));
        assert!(!canvas.has_text("Triple"));
    }

    #[test]
    fn test_hud_triple_timer() {
        let mut state = GameState::new(1, 0);
        state.phase = GamePhase::Playing;
        state.player.triple_shot = 479;
        let canvas = render(&state, None);
        assert!(canvas.has_text("Triple: 7s"));
    }

    #[test]
    fn test_playing_draws_entities() {
        let mut state = GameState::new(1, 0);
        state.phase = GamePhase::Playing;
        state.spawn_enemy();
        state.powerups.push(PowerUp::new(Vec2::new(100.0, 100.0), PowerUpKind::Heart));
        let canvas = render(&state, None);

        let color = state.enemies[0].color;
        let radius = state.enemies[0].radius;
        assert_eq!(canvas.circles_with(color, radius), 1);
        assert_eq!(canvas.circles_with(palette::HOT_PINK, 6.0), 2);
        // Cat eyes
        assert_eq!(canvas.circles_with(palette::INK, 4.0), 2);
    }

    #[test]
    fn test_pause_overlays_playfield() {
        let mut state = GameState::new(1, 0);
        state.phase = GamePhase::Paused;
        let canvas = render(&state, None);
        assert!(canvas.has_text("Paused"));
        assert!(canvas.has_text("Score: 0"));
        let texts = canvas.texts();
        assert_eq!(texts.last().copied(), Some("[P] resume | [ESC] back to menu"));
    }

    #[test]
    fn test_game_over_screen() {
        let mut state = GameState::new(1, 900);
        state.phase = GamePhase::GameOver;
        state.score = 120;
        let canvas = render(&state, None);
        assert!(canvas.has_text("Game Over!"));
        assert!(canvas.has_text("Score: 120"));
        assert!(canvas.has_text("High Score: 900"));
        assert!(!canvas.has_text("Level"));
    }

    #[test]
    fn test_fps_readout() {
        let state = GameState::new(1, 0);
        let canvas = render(&state, Some(59));
        assert!(canvas.has_text("FPS: 59"));
    }
}
