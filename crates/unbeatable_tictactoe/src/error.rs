//! Error types for the game engine.

use super::position::Position;
use super::types::Player;
use derive_more::{Display, Error};

/// Error that can occur when validating or applying a move.
///
/// `Occupied` and `GameOver` are the two flavours of an illegal move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("illegal move: {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("illegal move: the game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("it's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// Coordinates outside the 3x3 board.
    #[display("cell ({}, {}) is off the board (rows and columns are 0-2)", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl MoveError {
    /// True for the errors that reject a move against the board itself
    /// (occupied cell or finished game).
    pub fn is_illegal_move(&self) -> bool {
        matches!(self, MoveError::Occupied(_) | MoveError::GameOver)
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Wrong number of cells.
    #[display("expected 9 cells, got {}", _0)]
    InvalidLength(#[error(not(source))] usize),

    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("invalid character '{}' in board", _0)]
    InvalidCharacter(#[error(not(source))] char),

    /// Mark counts no legal game can produce.
    #[display("invalid piece counts: X={}, O={} (X must equal O or lead by one)", x, o)]
    InvalidCounts {
        /// Number of X marks.
        x: usize,
        /// Number of O marks.
        o: usize,
    },
}
