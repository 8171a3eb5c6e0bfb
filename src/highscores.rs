//! Persistent best score
//!
//! Stored as `{"highscore": n}` next to the executable's working directory.
//! A missing or unreadable file counts as a best of 0.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::persistence::{self, StoreError};

/// Default save file name
pub const SAVE_FILE: &str = "cute_shooter_save.json";

/// The saved best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HighScoreRecord {
    pub highscore: u64,
}

impl HighScoreRecord {
    pub fn new(highscore: u64) -> Self {
        Self { highscore }
    }

    /// Load from `path`, falling back to 0 on any failure
    pub fn load_from(path: &Path) -> Self {
        match persistence::load_json::<Self>(path) {
            Ok(record) => {
                log::info!("Loaded high score {}", record.highscore);
                record
            }
            Err(e) if e.is_not_found() => {
                log::info!("No save file found, starting fresh");
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load() -> Self {
        Self::load_from(Path::new(SAVE_FILE))
    }

    /// Write to `path`
    pub fn try_save_to(&self, path: &Path) -> Result<(), StoreError> {
        persistence::save_json(path, self)
    }

    /// Write to `path`; failures are logged and otherwise ignored
    pub fn save_to(&self, path: &Path) {
        match self.try_save_to(path) {
            Ok(()) => log::info!("High score saved ({})", self.highscore),
            Err(e) => log::warn!("Failed to save high score: {}", e),
        }
    }

    pub fn save(&self) {
        self.save_to(Path::new(SAVE_FILE));
    }
}
