//! Pure game rules.
//!
//! - `line`: collapse one row/column toward its moving edge
//! - `engine`: apply the line reducer to a whole grid for a direction
//! - `spawn`: place a random 2 or 4 into an empty cell
//! - `terminal`: detect whether any move remains and whether the game is won
//!
//! Everything here is a free function over immutable [`Grid`](crate::core::Grid)
//! values; the only non-determinism comes in through a
//! [`TileRng`](crate::core::TileRng) argument.

pub mod engine;
pub mod line;
pub mod spawn;
pub mod terminal;

pub use engine::{legal_directions, slide, MoveResult};
pub use line::{reduce_line, LineCells, LineReduction};
pub use spawn::spawn_tile;
pub use terminal::{can_move, has_won};
