//! Session: one game played turn by turn.
//!
//! A [`Session`] owns the current grid, score, best score, and win/game-over
//! flags. Each call to [`Session::apply_move`] runs a full turn: slide,
//! reject if nothing changed, spawn, accumulate score, persist a new best,
//! then check for a win and for game over.

mod game;
mod snapshot;

pub use game::{GameStatus, Session, TurnSummary};
pub use snapshot::{Snapshot, TileId, TileKind, TileView};
