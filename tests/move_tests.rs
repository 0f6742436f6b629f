//! Move engine scenarios across all four directions.

use rust_2048::core::{Direction, Grid, Position, MAX_TILE};
use rust_2048::rules::{can_move, reduce_line, slide};

const E: Option<u32> = None;

fn t(v: u32) -> Option<u32> {
    Some(v)
}

fn grid(rows: &[[Option<u32>; 4]]) -> Grid {
    Grid::from_rows(rows).unwrap()
}

fn single_row(row: [Option<u32>; 4]) -> Grid {
    grid(&[row, [E; 4], [E; 4], [E; 4]])
}

// =============================================================================
// Basic Scenarios
// =============================================================================

#[test]
fn test_pair_merges_left() {
    let result = slide(&single_row([t(2), t(2), E, E]), Direction::Left);

    assert_eq!(result.grid.to_rows()[0], vec![t(4), E, E, E]);
    assert_eq!(result.score, 4);
    assert_eq!(result.merges, vec![Position::new(0, 0)]);
}

#[test]
fn test_pair_across_gap_merges_left() {
    let line = reduce_line(&[t(2), E, t(2), E]);
    assert_eq!(line.cells.to_vec(), vec![t(4), E, E, E]);
    assert_eq!(line.score, 4);

    let result = slide(&single_row([t(2), E, t(2), E]), Direction::Left);
    assert_eq!(result.grid.to_rows()[0], vec![t(4), E, E, E]);
    assert_eq!(result.score, 4);
}

#[test]
fn test_four_of_a_kind_makes_two_merges() {
    let result = slide(&single_row([t(2), t(2), t(2), t(2)]), Direction::Left);

    assert_eq!(result.grid.to_rows()[0], vec![t(4), t(4), E, E]);
    assert_eq!(result.score, 8);
    assert_eq!(result.merges, vec![Position::new(0, 0), Position::new(0, 1)]);
}

#[test]
fn test_four_of_a_kind_right() {
    let result = slide(&single_row([t(2), t(2), t(2), t(2)]), Direction::Right);

    assert_eq!(result.grid.to_rows()[0], vec![E, E, t(4), t(4)]);
    assert_eq!(result.score, 8);
    assert_eq!(result.merges, vec![Position::new(0, 3), Position::new(0, 2)]);
}

// =============================================================================
// Direction Symmetry
// =============================================================================

fn transpose(grid: &Grid) -> Grid {
    let rows = grid.to_rows();
    let size = grid.size();
    let cols: Vec<Vec<Option<u32>>> = (0..size).map(|c| (0..size).map(|r| rows[r][c]).collect()).collect();
    Grid::from_rows(&cols).unwrap()
}

fn mirror(grid: &Grid) -> Grid {
    let rows: Vec<Vec<Option<u32>>> = grid
        .to_rows()
        .into_iter()
        .map(|mut row| {
            row.reverse();
            row
        })
        .collect();
    Grid::from_rows(&rows).unwrap()
}

fn mixed() -> Grid {
    grid(&[
        [t(2), E, t(2), t(4)],
        [t(4), t(4), t(4), E],
        [E, t(8), E, t(8)],
        [t(16), t(2), t(2), t(2)],
    ])
}

#[test]
fn test_right_is_mirrored_left() {
    let board = mixed();
    let right = slide(&board, Direction::Right);
    let left_of_mirror = slide(&mirror(&board), Direction::Left);

    assert_eq!(right.grid, mirror(&left_of_mirror.grid));
    assert_eq!(right.score, left_of_mirror.score);
}

#[test]
fn test_up_is_transposed_left() {
    let board = mixed();
    let up = slide(&board, Direction::Up);
    let left_of_transpose = slide(&transpose(&board), Direction::Left);

    assert_eq!(up.grid, transpose(&left_of_transpose.grid));
    assert_eq!(up.score, left_of_transpose.score);
}

#[test]
fn test_down_is_transposed_right() {
    let board = mixed();
    let down = slide(&board, Direction::Down);
    let right_of_transpose = slide(&transpose(&board), Direction::Right);

    assert_eq!(down.grid, transpose(&right_of_transpose.grid));
    assert_eq!(down.score, right_of_transpose.score);
}

#[test]
fn test_mixed_left() {
    let result = slide(&mixed(), Direction::Left);

    assert_eq!(
        result.grid,
        grid(&[
            [t(4), t(4), E, E],
            [t(8), t(4), E, E],
            [t(16), E, E, E],
            [t(16), t(4), t(2), E],
        ])
    );
    assert_eq!(result.score, 4 + 8 + 16 + 4);
    assert_eq!(
        result.merges,
        vec![
            Position::new(0, 0),
            Position::new(1, 0),
            Position::new(2, 0),
            Position::new(3, 1),
        ]
    );
}

// =============================================================================
// Terminal Interaction
// =============================================================================

#[test]
fn test_stuck_board_unchanged_in_every_direction() {
    let stuck = grid(&[
        [t(2), t(4), t(8), t(16)],
        [t(16), t(8), t(4), t(2)],
        [t(2), t(4), t(8), t(16)],
        [t(16), t(8), t(4), t(2)],
    ]);

    assert!(!can_move(&stuck));
    for dir in Direction::ALL {
        assert!(!slide(&stuck, dir).changed(&stuck), "{} should not change the board", dir);
    }
}

#[test]
fn test_full_board_with_pair_can_move() {
    let board = grid(&[
        [t(2), t(4), t(8), t(16)],
        [t(16), t(8), t(4), t(2)],
        [t(2), t(4), t(8), t(16)],
        [t(16), t(8), t(4), t(4)],
    ]);

    assert!(can_move(&board));
    assert!(slide(&board, Direction::Left).changed(&board));
    assert!(!slide(&board, Direction::Up).changed(&board));
}

#[test]
fn test_slide_leaves_input_untouched() {
    let board = mixed();
    let copy = board.clone();
    let _ = slide(&board, Direction::Down);
    assert_eq!(board, copy);
}

#[test]
fn test_empty_board_can_move_but_never_changes() {
    // No tiles means nothing to slide, although every cell is free.
    for size in 1..=4 {
        let empty = Grid::empty(size);
        assert!(can_move(&empty));
        for dir in Direction::ALL {
            let result = slide(&empty, dir);
            assert!(!result.changed(&empty), "{} changed an empty {}x{} board", dir, size, size);
            assert_eq!(result.score, 0);
        }
    }
}

// =============================================================================
// Value Limits
// =============================================================================

#[test]
fn test_largest_tiles_merge_once() {
    let top = t(MAX_TILE);
    let board = Grid::from_rows(&[[top, top], [top, top]]).unwrap();

    let merged = slide(&board, Direction::Left);
    assert_eq!(merged.grid.to_rows(), vec![vec![t(1 << 31), E], vec![t(1 << 31), E]]);
    assert_eq!(merged.score, 1 << 32);

    // A second merge would leave u32, so the column holds.
    let again = slide(&merged.grid, Direction::Up);
    assert!(!again.changed(&merged.grid));
    assert_eq!(again.score, 0);
    assert!(again.merges.is_empty());
}
