//! Turning raw device input into a [`Direction`].
//!
//! Front-ends own event capture; these helpers only cover the mapping so
//! every front-end agrees on it.

use crate::core::Direction;

/// Minimum swipe length, in logical units, that counts as a move.
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// Map a key name to a direction.
///
/// Accepts DOM-style arrow names (`"ArrowUp"`), plain names (`"up"`), and
/// the WASD / HJKL letters, case-insensitively.
#[must_use]
pub fn direction_for_key(key: &str) -> Option<Direction> {
    match key.to_ascii_lowercase().as_str() {
        "arrowup" | "up" | "w" | "k" => Some(Direction::Up),
        "arrowdown" | "down" | "s" | "j" => Some(Direction::Down),
        "arrowleft" | "left" | "a" | "h" => Some(Direction::Left),
        "arrowright" | "right" | "d" | "l" => Some(Direction::Right),
        _ => None,
    }
}

/// Map a swipe vector to a direction.
///
/// `dx` grows rightward and `dy` grows downward (screen coordinates). The
/// axis with the larger absolute delta wins; a swipe shorter than
/// `threshold` along that axis is ignored. Exact diagonals resolve to the
/// vertical axis.
#[must_use]
pub fn direction_for_swipe(dx: f32, dy: f32, threshold: f32) -> Option<Direction> {
    if dx.abs() > dy.abs() {
        if dx.abs() < threshold {
            return None;
        }
        Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        if dy.abs() < threshold || dy == 0.0 {
            return None;
        }
        Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}
