//! # rust-2048
//!
//! Deterministic rules engine for 2048-style sliding tile puzzles on an
//! N×N board.
//!
//! ## Design Principles
//!
//! 1. **Pure rules**: sliding, merging, spawning, and terminal checks are free
//!    functions over immutable [`Grid`] values. Every transition returns a new
//!    grid.
//!
//! 2. **One reducer**: all four directions go through the same
//!    reduce-toward-index-0 routine; [`Direction::cell`] handles orientation.
//!
//! 3. **Injected collaborators**: randomness comes in through [`TileRng`] and
//!    best-score persistence through [`ScoreStore`], so nothing reaches for
//!    ambient state.
//!
//! ## Modules
//!
//! - `core`: grid, positions, directions, RNG, configuration, errors
//! - `rules`: line reducer, move engine, spawn generator, terminal detector
//! - `session`: turn-driving [`Session`], snapshots, tile identities
//! - `store`: best-score persistence
//! - `input`: key and swipe mapping to [`Direction`]
//!
//! ## Example
//!
//! ```
//! use rust_2048::{Direction, GameConfig, MemoryStore, Session};
//!
//! let mut session = Session::with_seed(GameConfig::default(), MemoryStore::new(), 42).unwrap();
//!
//! if let Some(turn) = session.apply_move(Direction::Left) {
//!     println!("+{} points, new tile at {:?}", turn.score_delta, turn.spawned);
//! }
//! println!("{}", session.grid());
//! ```

pub mod core;
pub mod input;
pub mod rules;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Direction, GameConfig, GameRng, GameRngState, Grid, GridError, Position, ScriptedRng,
    StoreError, TileRng, BEST_SCORE_KEY, DEFAULT_SIZE, DEFAULT_WIN_TILE,
};

pub use crate::rules::{can_move, has_won, legal_directions, reduce_line, slide, spawn_tile, LineReduction, MoveResult};

pub use crate::session::{GameStatus, Session, Snapshot, TileId, TileKind, TileView, TurnSummary};

pub use crate::store::{FileStore, MemoryStore, ScoreStore};

pub use crate::input::{direction_for_key, direction_for_swipe, SWIPE_THRESHOLD};
