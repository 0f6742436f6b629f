//! Move directions and the orientation transform shared by the move engine.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// Direction tiles slide in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// True for left/right, which reduce rows rather than columns.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// True for right/down, whose moving edge is the high index.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }

    /// Direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Map `slot` of `line` to a board position.
    ///
    /// Lines are rows for horizontal moves and columns for vertical ones.
    /// Slot 0 is always the edge tiles move toward, so a single
    /// reduce-toward-index-0 routine serves every direction.
    #[must_use]
    pub const fn cell(self, size: usize, line: usize, slot: usize) -> Position {
        let along = if self.is_reversed() { size - 1 - slot } else { slot };
        if self.is_horizontal() {
            Position::new(line, along)
        } else {
            Position::new(along, line)
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}
