//! Spawn generator.

use crate::core::{Grid, Position, TileRng, SPAWN_TWO_PROBABILITY};

/// Place a new tile in a uniformly random empty cell.
///
/// The cell is drawn first, then the value: 2 with probability 0.9,
/// otherwise 4. On a full grid this is a no-op returning the grid unchanged
/// and no position.
pub fn spawn_tile<R: TileRng + ?Sized>(grid: &Grid, rng: &mut R) -> (Grid, Option<Position>) {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return (grid.clone(), None);
    }

    let pos = empty[rng.pick(empty.len())];
    let value = if rng.chance(SPAWN_TWO_PROBABILITY) { 2 } else { 4 };

    (grid.with_tile(pos, value), Some(pos))
}
