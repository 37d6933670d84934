//! An owned game between a human and the minimax opponent.

use super::board::{Board, GameStatus};
use super::error::MoveError;
use super::invariants::{GameInvariants, InvariantSet};
use super::line::TerminalStatus;
use super::position::Position;
use super::rules::Grid;
use super::search::MinimaxEngine;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Read-only view of a session for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameSnapshot {
    /// Squares indexed `[row][col]`.
    squares: Grid,
    /// Number of occupied squares.
    move_count: u8,
    /// Player to move next.
    current_turn: Player,
    /// Game status.
    status: GameStatus,
    /// Completed line to strike through, if any.
    winning_line: TerminalStatus,
    /// The human's mark.
    human: Player,
    /// The computer's mark.
    computer: Player,
}

/// A game session: one board, one human, one computer opponent.
///
/// X always moves first, so when the human plays O the computer opens.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    human: Player,
    engine: MinimaxEngine,
}

impl GameSession {
    /// Creates a session where the human plays `human`.
    #[instrument]
    pub fn new(human: Player) -> Self {
        info!(human = %human, computer = %human.opponent(), "Creating game session");
        Self {
            board: Board::new(),
            human,
            engine: MinimaxEngine::new(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The computer's mark.
    pub fn computer(&self) -> Player {
        self.human.opponent()
    }

    /// The engine, including statistics of its last search.
    pub fn engine(&self) -> &MinimaxEngine {
        &self.engine
    }

    /// True when the game is still running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        !self.board.is_game_over() && self.board.current_turn() == self.computer()
    }

    /// True iff a line was completed or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// The completed line, if any.
    pub fn winning_line(&self) -> TerminalStatus {
        self.board.winning_line()
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    /// Applies the human's move at zero-based `(row, col)` and passes the turn.
    ///
    /// # Errors
    ///
    /// - `MoveError::OutOfBounds` for coordinates off the board
    /// - `MoveError::GameOver` once the game has ended
    /// - `MoveError::WrongPlayer` while the computer is to move
    /// - `MoveError::Occupied` for a taken cell
    ///
    /// The board is unchanged on every error.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<TerminalStatus, MoveError> {
        let pos = Position::from_row_col(row, col).ok_or_else(|| {
            warn!(row, col, "Move off the board");
            MoveError::OutOfBounds { row, col }
        })?;

        if self.board.is_game_over() {
            warn!(position = %pos, "Move after game over");
            return Err(MoveError::GameOver);
        }
        if self.board.current_turn() != self.human {
            warn!(position = %pos, "Human tried to move out of turn");
            return Err(MoveError::WrongPlayer(self.human));
        }

        let line = self.commit(pos, self.human)?;
        info!(position = %pos, status = ?self.board.status(), "Human move applied");
        Ok(line)
    }

    /// Lets the computer choose and play its move, then passes the turn.
    ///
    /// # Errors
    ///
    /// `MoveError::GameOver` once the game has ended, `MoveError::WrongPlayer`
    /// while the human is to move.
    #[instrument(skip(self))]
    pub fn trigger_computer_move(&mut self) -> Result<Position, MoveError> {
        if self.board.is_game_over() {
            return Err(MoveError::GameOver);
        }
        let computer = self.computer();
        if self.board.current_turn() != computer {
            return Err(MoveError::WrongPlayer(computer));
        }

        let pos = self.engine.select_best_move(&self.board, computer)?;
        self.commit(pos, computer)?;
        info!(
            position = %pos,
            searched = *self.engine.stats().positions(),
            status = ?self.board.status(),
            "Computer move applied"
        );
        Ok(pos)
    }

    /// Restores the initial empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.reset();
        info!("Game reset");
    }

    /// Serializable view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            squares: *self.board.squares(),
            move_count: self.board.move_count(),
            current_turn: self.board.current_turn(),
            status: self.board.status(),
            winning_line: self.board.winning_line(),
            human: self.human,
            computer: self.computer(),
        }
    }

    /// Applies a move for real: place the mark, then advance the turn.
    fn commit(&mut self, pos: Position, player: Player) -> Result<TerminalStatus, MoveError> {
        let line = self.board.apply_move(pos, player)?;
        self.board.advance_turn();

        debug_assert!(
            GameInvariants::check_all(&self.board).is_ok(),
            "Game invariants violated after {player} played {pos}"
        );
        debug!(position = %pos, player = %player, line = ?line, "Move committed");
        Ok(line)
    }
}

impl Default for GameSession {
    /// Human plays X and moves first.
    fn default() -> Self {
        Self::new(Player::X)
    }
}
