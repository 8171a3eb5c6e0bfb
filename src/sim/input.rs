//! Per-frame input snapshot and edge-triggered commands
//!
//! The platform layer fills these from keyboard and mouse polling so the
//! simulation never touches the window.

use glam::Vec2;

/// Held-key state for a single tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Left mouse button held: fire toward this point
    pub fire_at: Option<Vec2>,
    /// Space held: fire straight up
    pub fire_up: bool,
}

impl TickInput {
    /// Digital movement axis in {-1, 0, 1}²
    pub fn axis(&self) -> Vec2 {
        let mut d = Vec2::ZERO;
        if self.left {
            d.x -= 1.0;
        }
        if self.right {
            d.x += 1.0;
        }
        if self.up {
            d.y -= 1.0;
        }
        if self.down {
            d.y += 1.0;
        }
        d
    }
}

/// One-shot key presses that drive phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enter: start from the menu, restart after game over
    Confirm,
    /// P: pause / resume
    TogglePause,
    /// Escape: back to the menu from pause or game over
    Back,
    /// M: toggle mouse aiming (cursor visibility while playing)
    ToggleAim,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_opposites_cancel() {
        let input = TickInput {
            left: true,
            right: true,
            down: true,
            ..Default::default()
        };
        assert_eq!(input.axis(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_axis_diagonal() {
        let input = TickInput {
            right: true,
            up: true,
            ..Default::default()
        };
        assert_eq!(input.axis(), Vec2::new(1.0, -1.0));
    }
}
