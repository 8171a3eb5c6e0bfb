//! Keyboard and mouse polling

use glam::Vec2;
use macroquad::prelude as mq;
use macroquad::prelude::{KeyCode, MouseButton};

use crate::sim::{Command, TickInput};

/// Everything read from the devices for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Key presses since the last frame, in a fixed order
    pub commands: Vec<Command>,
    pub tick: TickInput,
}

/// Keys that trigger a command on press
const COMMAND_KEYS: [(KeyCode, Command); 4] = [
    (KeyCode::Enter, Command::Confirm),
    (KeyCode::P, Command::TogglePause),
    (KeyCode::Escape, Command::Back),
    (KeyCode::M, Command::ToggleAim),
];

/// Map pressed keys to commands
pub fn commands_from(pressed: impl Fn(KeyCode) -> bool) -> Vec<Command> {
    COMMAND_KEYS
        .iter()
        .filter(|(key, _)| pressed(*key))
        .map(|(_, cmd)| *cmd)
        .collect()
}

/// Map held keys and the mouse to a tick input. WASD and the arrow keys
/// both move.
pub fn tick_input_from(
    down: impl Fn(KeyCode) -> bool,
    mouse_down: bool,
    mouse: Vec2,
) -> TickInput {
    let any = |keys: [KeyCode; 2]| keys.iter().any(|k| down(*k));
    TickInput {
        left: any([KeyCode::A, KeyCode::Left]),
        right: any([KeyCode::D, KeyCode::Right]),
        up: any([KeyCode::W, KeyCode::Up]),
        down: any([KeyCode::S, KeyCode::Down]),
        fire_at: mouse_down.then_some(mouse),
        fire_up: down(KeyCode::Space),
    }
}

/// Read the devices through macroquad
pub fn poll() -> FrameInput {
    let (mx, my) = mq::mouse_position();
    FrameInput {
        commands: commands_from(mq::is_key_pressed),
        tick: tick_input_from(
            mq::is_key_down,
            mq::is_mouse_button_down(MouseButton::Left),
            Vec2::new(mx, my),
        ),
    }
}
