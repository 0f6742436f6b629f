//! Core board types: grid, positions, directions, RNG, configuration, errors.
//!
//! These are the game-agnostic building blocks. The rules module operates on
//! them; the session module owns them across turns.

pub mod config;
pub mod direction;
pub mod error;
pub mod grid;
pub mod rng;

pub use config::{
    GameConfig, BEST_SCORE_KEY, DEFAULT_SIZE, DEFAULT_WIN_TILE, SPAWN_TWO_PROBABILITY, STARTING_TILES,
};
pub use direction::Direction;
pub use error::{is_tile_value, ConfigError, GridError, StoreError, MAX_TILE};
pub use grid::{Grid, Position, Rows};
pub use rng::{GameRng, GameRngState, ScriptedRng, TileRng};
