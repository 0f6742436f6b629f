//! The N×N board of optional tile values.
//!
//! A [`Grid`] is an immutable value. Every transition (a move, a spawn)
//! produces a new grid; the cells live in an `im::Vector` so the copy shares
//! structure with its predecessor and cloning is O(1).

use std::fmt;

use im::Vector;
use serde::{Deserialize, Serialize};

use super::error::{is_tile_value, GridError};

/// Row-major nested representation used for parsing and serialization.
pub type Rows = Vec<Vec<Option<u32>>>;

/// A board coordinate, 0-indexed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square board of cells, each empty or holding a power of two >= 2.
///
/// Equality is structural: two grids are equal when they have the same size
/// and the same value in every cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Rows", into = "Rows")]
pub struct Grid {
    size: usize,
    cells: Vector<Option<u32>>,
}

impl Grid {
    /// Create an all-empty grid.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero. Sizes coming from a validated
    /// [`GameConfig`](crate::core::GameConfig) are always positive.
    #[must_use]
    pub fn empty(size: usize) -> Self {
        assert!(size > 0, "Grid size must be positive");

        Self {
            size,
            cells: Vector::from(vec![None; size * size]),
        }
    }

    /// Parse a grid from rows of optional values.
    pub fn from_rows<R: AsRef<[Option<u32>]>>(rows: &[R]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vector::new();
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(GridError::NotSquare { row, len: values.len(), size });
            }
            for (col, &cell) in values.iter().enumerate() {
                if let Some(value) = cell {
                    if !is_tile_value(value) {
                        return Err(GridError::InvalidTile { row, col, value });
                    }
                }
                cells.push_back(cell);
            }
        }

        Ok(Self { size, cells })
    }

    /// Assemble a grid from row-major cells. Caller guarantees the length.
    pub(crate) fn from_cells(size: usize, cells: Vector<Option<u32>>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "Position {} out of bounds for {}x{} grid",
            pos,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// Value at a position, `None` if empty.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<u32> {
        self.cells[self.index(pos)]
    }

    /// Copy of this grid with `value` written at `pos`.
    #[must_use]
    pub fn with_tile(&self, pos: Position, value: u32) -> Self {
        debug_assert!(is_tile_value(value), "{} is not a tile value", value);
        let index = self.index(pos);
        Self {
            size: self.size,
            cells: self.cells.update(index, Some(value)),
        }
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    /// Iterate over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<u32>)> + '_ {
        self.positions().zip(self.cells.iter().copied())
    }

    /// Empty cells in row-major order.
    ///
    /// The order is deterministic; the spawn generator samples from it.
    #[must_use]
    pub fn empty_cells(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, cell)| cell.is_none())
            .map(|(pos, _)| pos)
            .collect()
    }

    /// True if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Sum of all tile values.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Largest tile on the board.
    #[must_use]
    pub fn max_tile(&self) -> Option<u32> {
        self.cells.iter().flatten().copied().max()
    }

    /// True if any cell holds exactly `value`.
    #[must_use]
    pub fn contains(&self, value: u32) -> bool {
        self.cells.iter().any(|&c| c == Some(value))
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Rows {
        let mut rows = Vec::with_capacity(self.size);
        let mut cells = self.cells.iter().copied();
        for _ in 0..self.size {
            rows.push(cells.by_ref().take(self.size).collect());
        }
        rows
    }
}

impl TryFrom<Rows> for Grid {
    type Error = GridError;

    fn try_from(rows: Rows) -> Result<Self, Self::Error> {
        Grid::from_rows(&rows)
    }
}

impl From<Grid> for Rows {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (pos, cell)) in self.iter().enumerate() {
            if pos.col > 0 {
                write!(f, " ")?;
            }
            match cell {
                Some(value) => write!(f, "{:>5}", value)?,
                None => write!(f, "{:>5}", ".")?,
            }
            if pos.col + 1 == self.size && i + 1 < self.size * self.size {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
