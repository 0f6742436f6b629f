//! Terminal detection.

use crate::core::{Grid, Position};

/// True if some move in some direction would change the grid.
///
/// That holds exactly when a cell is empty or two orthogonally adjacent
/// cells hold the same value, so no slide has to be simulated.
#[must_use]
pub fn can_move(grid: &Grid) -> bool {
    let size = grid.size();

    grid.iter().any(|(pos, cell)| {
        let Some(value) = cell else {
            return true;
        };
        let right = pos.col + 1 < size && grid.get(Position::new(pos.row, pos.col + 1)) == Some(value);
        let below = pos.row + 1 < size && grid.get(Position::new(pos.row + 1, pos.col)) == Some(value);
        right || below
    })
}

/// True if any cell holds the winning tile.
#[must_use]
pub fn has_won(grid: &Grid, win_tile: u32) -> bool {
    grid.contains(win_tile)
}
