//! Game rules for tic-tac-toe.
//!
//! Pure functions over a square grid, separated from board storage so the
//! board, the parser and the invariant checks share one definition of a win.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{completed_line, detect_line};

use super::types::Square;

/// Squares indexed `[row][col]`.
pub type Grid = [[Square; 3]; 3];
