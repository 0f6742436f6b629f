//! Move engine: apply the line reducer across the whole board.

use im::Vector;
use serde::Serialize;

use super::line::{reduce_line, LineCells};
use crate::core::{Direction, Grid, Position};

/// Result of sliding a grid in one direction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    /// Board after the slide, before any spawn.
    pub grid: Grid,
    /// Sum of the values produced by merges.
    pub score: u64,
    /// Cells now holding a merged tile, in line traversal order.
    pub merges: Vec<Position>,
}

impl MoveResult {
    /// True if the slide changed any cell of `before`.
    #[must_use]
    pub fn changed(&self, before: &Grid) -> bool {
        self.grid != *before
    }
}

/// Slide every line of `grid` toward `direction`.
///
/// Each row (left/right) or column (up/down) is read through
/// [`Direction::cell`] so that slot 0 is the moving edge, reduced, and
/// written back through the same mapping. Merge slots are mapped the same
/// way, which mirrors them for right/down.
#[must_use]
pub fn slide(grid: &Grid, direction: Direction) -> MoveResult {
    let size = grid.size();
    let mut cells = vec![None; size * size];
    let mut score = 0;
    let mut merges = Vec::new();

    let mut line = LineCells::with_capacity(size);
    for index in 0..size {
        line.clear();
        line.extend((0..size).map(|slot| grid.get(direction.cell(size, index, slot))));

        let reduced = reduce_line(&line);
        for (slot, &cell) in reduced.cells.iter().enumerate() {
            let pos = direction.cell(size, index, slot);
            cells[pos.row * size + pos.col] = cell;
        }
        merges.extend(reduced.merges.iter().map(|&slot| direction.cell(size, index, slot)));
        score += reduced.score;
    }

    MoveResult {
        grid: Grid::from_cells(size, Vector::from(cells)),
        score,
        merges,
    }
}

/// Directions in which a slide would change `grid`.
#[must_use]
pub fn legal_directions(grid: &Grid) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&dir| slide(grid, dir).changed(grid))
        .collect()
}
