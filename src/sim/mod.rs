//! Frame-stepped simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per frame, no variable timestep
//! - Seeded RNG only
//! - No rendering, audio or filesystem dependencies; side effects are
//!   queued as `GameEvent`s for the run loop

pub mod actors;
pub mod collision;
pub mod entities;
pub mod input;
pub mod state;
pub mod tick;

pub use actors::{Enemy, Player};
pub use collision::{Aabb, circles_overlap};
pub use entities::{Bullet, POWERUP_TABLE, Particle, PowerUp, PowerUpKind, Star};
pub use input::{Command, TickInput};
pub use state::{GameEvent, GamePhase, GameState, SoundEffect, spawn_cooldown_for};
pub use tick::{handle_command, tick};
