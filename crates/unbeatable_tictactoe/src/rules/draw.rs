//! Draw detection logic for tic-tac-toe.

use super::Grid;
use crate::types::Square;

/// Checks if the grid is full (all squares occupied).
///
/// A full grid with no winning line is a draw.
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(|s| *s != Square::Empty)
}
