//! Platform layer (macroquad)
//!
//! Handles everything that touches the window:
//! - Window configuration
//! - Frame pacing
//! - Input polling
//! - Drawing backend for `renderer::Canvas`
//! - Cursor visibility

pub mod canvas;
pub mod input;
pub mod time;

pub use canvas::MacroquadCanvas;
pub use input::FrameInput;
pub use time::FrameLimiter;

use macroquad::miniquad;
use macroquad::prelude as mq;

use crate::consts::{FPS, HEIGHT, WIDTH};

/// Window title
pub const TITLE: &str = "Cute Shooter";

/// Fixed-size game window. Vsync is off; `FrameLimiter` paces frames.
pub fn window_conf() -> mq::Conf {
    mq::Conf {
        window_title: TITLE.to_string(),
        window_width: WIDTH as i32,
        window_height: HEIGHT as i32,
        window_resizable: false,
        platform: miniquad::conf::Platform {
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Window-side state owned by the run loop
pub struct Platform {
    limiter: FrameLimiter,
    cursor_visible: Option<bool>,
}

impl Platform {
    pub fn new() -> Self {
        // Let the loop see window close so it can shut down cleanly
        mq::prevent_quit();
        Self {
            limiter: FrameLimiter::new(FPS),
            cursor_visible: None,
        }
    }

    /// Wait for the next frame slot. Returns milliseconds since the last one.
    pub fn begin_frame(&mut self) -> u64 {
        self.limiter.tick()
    }

    pub fn quit_requested(&self) -> bool {
        mq::is_quit_requested()
    }

    pub fn poll_input(&self) -> FrameInput {
        input::poll()
    }

    /// Show or hide the OS cursor; only calls into the window on change
    pub fn set_cursor_visible(&mut self, visible: bool) {
        if self.cursor_visible != Some(visible) {
            mq::show_mouse(visible);
            self.cursor_visible = Some(visible);
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::new()
    }
}
