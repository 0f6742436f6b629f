//! Error types.
//!
//! Errors only arise while setting a game up: validating a [`GameConfig`],
//! parsing a [`Grid`] from raw rows, or opening a score file. Once a
//! [`Session`] exists, play never fails; rejected moves and spawns on a full
//! board are ordinary outcomes.
//!
//! [`GameConfig`]: crate::core::GameConfig
//! [`Grid`]: crate::core::Grid
//! [`Session`]: crate::session::Session

use thiserror::Error;

/// Invalid game construction parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board size must be at least 1.
    #[error("grid size must be positive, got {0}")]
    InvalidSize(usize),

    /// Winning tile must be a power of two, at least 2.
    #[error("winning tile must be a power of two >= 2, got {0}")]
    InvalidWinTile(u32),

    /// A starting grid was supplied whose size differs from the config.
    #[error("grid is {actual}x{actual} but config expects {expected}x{expected}")]
    GridSizeMismatch { expected: usize, actual: usize },
}

/// Malformed grid input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows given.
    #[error("grid has no rows")]
    Empty,

    /// A row's length differs from the number of rows.
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },

    /// A cell holds a value [`is_tile_value`] rejects.
    #[error("cell ({row}, {col}) holds {value}, which is not a tile value")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// Failure reading or writing a persistent score store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("score store I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("score store encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Largest tile a board may hold. Two of these still merge within `u32`.
pub const MAX_TILE: u32 = 1 << 30;

/// Check whether `value` can appear on the board.
#[inline]
#[must_use]
pub const fn is_tile_value(value: u32) -> bool {
    value >= 2 && value <= MAX_TILE && value.is_power_of_two()
}
