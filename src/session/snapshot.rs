//! Read-only session snapshots and per-turn tile identities.
//!
//! Renderers animate freshly spawned and freshly merged tiles differently
//! from the rest. A [`Snapshot`] carries the last spawn and merge positions,
//! and [`Snapshot::tiles`] turns them into one [`TileView`] per occupied cell.
//! Tile ids are only meaningful within one turn; they are rebuilt from the
//! turn counter and cell index every time.

use std::fmt;

use serde::Serialize;

use super::game::GameStatus;
use crate::core::{Grid, Position};

/// Identity of a tile within one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TileId(pub u64);

impl TileId {
    /// Id of the tile at row-major `index` on turn `turn`.
    #[must_use]
    pub const fn new(turn: u64, cell_count: usize, index: usize) -> Self {
        Self(turn * cell_count as u64 + index as u64)
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

/// How a tile came to be where it is this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum TileKind {
    /// Slid or stayed put.
    Settled,
    /// Written by the spawn after the last move.
    Spawned,
    /// Produced by a merge in the last move.
    Merged,
}

/// One occupied cell, ready for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TileView {
    /// Identity of this tile within the current turn.
    pub id: TileId,
    pub position: Position,
    pub value: u32,
    /// How the tile got here.
    pub kind: TileKind,
}

/// Session state at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Current board.
    pub grid: Grid,
    /// Points scored in this game.
    pub score: u64,
    /// Highest score seen across games.
    pub best_score: u64,
    /// No move can change the board.
    pub game_over: bool,
    /// The winning tile was reached in this game.
    pub won: bool,
    /// Accepted moves since the game started.
    pub turn: u64,
    /// Cell filled by the spawn after the last accepted move.
    pub last_spawn: Option<Position>,
    /// Cells produced by merges in the last accepted move.
    pub last_merges: Vec<Position>,
}

impl Snapshot {
    /// Status derived from the win and game-over flags.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        GameStatus::from_flags(self.won, self.game_over)
    }

    /// Occupied cells in row-major order, tagged for animation.
    #[must_use]
    pub fn tiles(&self) -> Vec<TileView> {
        let cell_count = self.grid.size() * self.grid.size();

        self.grid
            .iter()
            .enumerate()
            .filter_map(|(index, (position, cell))| {
                let value = cell?;
                let kind = if self.last_spawn == Some(position) {
                    TileKind::Spawned
                } else if self.last_merges.contains(&position) {
                    TileKind::Merged
                } else {
                    TileKind::Settled
                };
                Some(TileView {
                    id: TileId::new(self.turn, cell_count, index),
                    position,
                    value,
                    kind,
                })
            })
            .collect()
    }
}
