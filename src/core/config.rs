//! Game configuration.
//!
//! Games are configured at startup with a [`GameConfig`]: board size and the
//! tile value that counts as a win. Configs are validated once, when a
//! session is built; nothing mid-game can produce a configuration error.

use serde::{Deserialize, Serialize};

use super::error::{is_tile_value, ConfigError};

/// Classic 4x4 board.
pub const DEFAULT_SIZE: usize = 4;

/// Classic winning tile.
pub const DEFAULT_WIN_TILE: u32 = 2048;

/// Key under which the best score is stored.
pub const BEST_SCORE_KEY: &str = "best-score";

/// Probability that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Number of tiles placed on a fresh board.
pub const STARTING_TILES: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square board.
    pub size: usize,

    /// Reaching a tile of this value wins the game.
    ///
    /// Smaller boards cannot realistically reach 2048, so this is
    /// configurable.
    pub win_tile: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            win_tile: DEFAULT_WIN_TILE,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a `size`×`size` board with the default
    /// winning tile.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the winning tile.
    #[must_use]
    pub fn with_win_tile(mut self, win_tile: u32) -> Self {
        self.win_tile = win_tile;
        self
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if !is_tile_value(self.win_tile) {
            return Err(ConfigError::InvalidWinTile(self.win_tile));
        }
        Ok(())
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }
}
