//! Cute Shooter entry point
//!
//! Sets up logging, loads preferences and the saved high score, then runs
//! the fixed 60 Hz game loop.

use cute_shooter::audio::AudioManager;
use cute_shooter::platform::{MacroquadCanvas, Platform, window_conf};
use cute_shooter::renderer::draw_scene;
use cute_shooter::sim::{GameEvent, GameState, handle_command, tick};
use cute_shooter::{HighScoreRecord, Settings};
use macroquad::prelude::next_frame;

/// Frames averaged for the FPS readout
const FPS_WINDOW: usize = 60;

struct Game {
    state: GameState,
    platform: Platform,
    audio: AudioManager,
    canvas: MacroquadCanvas,
    show_fps: bool,
    // FPS tracking
    frame_ms: [u64; FPS_WINDOW],
    frame_index: usize,
    fps: u32,
}

impl Game {
    async fn new(seed: u64) -> Self {
        let settings = Settings::load();
        let record = HighScoreRecord::load();
        let audio = AudioManager::load(&settings).await;

        let mut state = GameState::new(seed, record.highscore);
        state.aim_with_mouse = settings.aim_with_mouse;

        Self {
            state,
            platform: Platform::new(),
            audio,
            canvas: MacroquadCanvas::new(),
            show_fps: settings.show_fps,
            frame_ms: [0; FPS_WINDOW],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Average frame rate over the last `FPS_WINDOW` frames
    fn track_fps(&mut self, ms: u64) {
        self.frame_ms[self.frame_index] = ms;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        let total: u64 = self.frame_ms.iter().sum();
        if total > 0 {
            self.fps = (FPS_WINDOW as u64 * 1000 / total) as u32;
        }
    }

    /// One input → update → draw cycle
    fn frame(&mut self) {
        let ms = self.platform.begin_frame();
        self.track_fps(ms);

        let input = self.platform.poll_input();
        for command in input.commands {
            handle_command(&mut self.state, command);
        }
        tick(&mut self.state, &input.tick);
        self.dispatch_events();

        self.platform.set_cursor_visible(self.state.cursor_visible());

        let fps = self.show_fps.then_some(self.fps);
        draw_scene(&mut self.canvas, &self.state, fps);
    }

    /// Carry out side effects queued by the simulation
    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Sound(effect) => self.audio.play(effect),
                GameEvent::StartMusic => self.audio.start_music(),
                GameEvent::StopMusic => self.audio.stop_music(),
                GameEvent::SaveHighScore(score) => HighScoreRecord::new(score).save(),
            }
        }
    }

    fn shutdown(&mut self) {
        self.audio.stop_music();
        log::info!("Cute Shooter exiting (high score {})", self.state.highscore);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let seed: u64 = rand::random();
    log::info!("Cute Shooter starting (seed {})", seed);

    let mut game = Game::new(seed).await;

    while !game.platform.quit_requested() {
        game.frame();
        next_frame().await;
    }

    game.shutdown();
}
