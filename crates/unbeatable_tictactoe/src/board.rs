//! Board state: grid occupancy, move count, turn owner and terminal line.

use super::error::{MoveError, ParseBoardError};
use super::line::{Line, TerminalStatus};
use super::position::Position;
use super::rules::{self, Grid};
use super::types::{Player, Square};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{instrument, trace, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; the player to move next.
    InProgress(Player),
    /// A line was completed.
    Won {
        /// The completed line.
        line: Line,
        /// The player owning it.
        winner: Player,
    },
    /// The board filled with no line.
    Draw,
}

impl GameStatus {
    /// True for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress(_))
    }
}

/// 3x3 tic-tac-toe board.
///
/// Placing a mark and handing the turn to the other player are separate
/// operations ([`Board::apply_move`] and [`Board::advance_turn`]) so that
/// the search engine can place speculative marks without touching the turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    squares: Grid,
    /// Number of occupied squares.
    move_count: u8,
    /// Player to move next.
    current_turn: Player,
    /// Line completed by the last applied move, if any.
    terminal_line: TerminalStatus,
}

impl Board {
    /// Creates a new empty board with X to move.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; 3]; 3],
            move_count: 0,
            current_turn: Player::X,
            terminal_line: None,
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row()][pos.col()]
    }

    /// Returns all squares, indexed `[row][col]`.
    pub fn squares(&self) -> &Grid {
        &self.squares
    }

    /// Number of occupied squares (0-9).
    pub fn move_count(&self) -> u8 {
        self.move_count
    }

    /// Player to move next.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// The completed line, if the game was won.
    pub fn winning_line(&self) -> TerminalStatus {
        self.terminal_line
    }

    /// The owner of the completed line, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        let line = self.terminal_line?;
        self.get(line.cells()[0]).player()
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.squares)
    }

    /// True iff a line has been completed or all 9 squares are occupied.
    pub fn is_game_over(&self) -> bool {
        self.terminal_line.is_some() || self.is_full()
    }

    /// True iff the square is empty and the game is not over.
    pub fn is_legal(&self, pos: Position) -> bool {
        self.is_empty(pos) && !self.is_game_over()
    }

    /// Empty positions in canonical (row-major) scan order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        match (self.terminal_line, self.winner()) {
            (Some(line), Some(winner)) => GameStatus::Won { line, winner },
            _ if self.is_full() => GameStatus::Draw,
            _ => GameStatus::InProgress(self.current_turn),
        }
    }

    /// Places `player`'s mark at `pos` and runs win detection around it.
    ///
    /// Does not advance the turn; callers committing a real move follow up
    /// with [`Board::advance_turn`].
    ///
    /// # Errors
    ///
    /// `MoveError::GameOver` if the board is already terminal,
    /// `MoveError::Occupied` if the square is taken. The board is left
    /// untouched in both cases.
    #[instrument(level = "trace", skip(self))]
    pub fn apply_move(&mut self, pos: Position, player: Player) -> Result<TerminalStatus, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }
        if !self.is_empty(pos) {
            return Err(MoveError::Occupied(pos));
        }

        self.squares[pos.row()][pos.col()] = Square::Occupied(player);
        self.move_count += 1;
        self.terminal_line = rules::detect_line(&self.squares, pos, player);

        trace!(move_count = self.move_count, line = ?self.terminal_line, "Mark placed");
        Ok(self.terminal_line)
    }

    /// Rolls back a mark placed by [`Board::apply_move`].
    ///
    /// Empties the square, decrements the move count and recomputes the
    /// terminal line from the remaining marks. Undoing a cell off the
    /// completed line leaves the game over.
    /// Reserved for speculative search; it is not a player-facing undo.
    #[instrument(level = "trace", skip(self))]
    pub fn undo_move(&mut self, pos: Position) {
        if self.is_empty(pos) {
            warn!(position = %pos, "Undo requested for an empty square");
            return;
        }

        self.squares[pos.row()][pos.col()] = Square::Empty;
        self.move_count -= 1;
        self.terminal_line = rules::completed_line(&self.squares).map(|(line, _)| line);
    }

    /// Hands the move to the other player.
    pub fn advance_turn(&mut self) {
        self.current_turn = self.current_turn.opponent();
    }

    /// Restores the initial empty, X-to-move state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    /// Three rows separated by `-+-+-`; empty squares show their cell
    /// number (1-9).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.squares.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, square)| match square {
                    Square::Empty => (r * 3 + c + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                })
                .collect();
            write!(f, "{}", cells.join("|"))?;
            if r < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine cells in row-major order.
    ///
    /// `X`/`O` (any case) are marks; `.`, `_` and the digits `1`-`9` are
    /// empty squares; whitespace, `|`, `/`, `-` and `+` are ignored, so the
    /// [`Display`](std::fmt::Display) output parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            match ch {
                'X' | 'x' => cells.push(Square::Occupied(Player::X)),
                'O' | 'o' => cells.push(Square::Occupied(Player::O)),
                '.' | '_' | '1'..='9' => cells.push(Square::Empty),
                '|' | '/' | '-' | '+' => {}
                c if c.is_whitespace() => {}
                c => return Err(ParseBoardError::InvalidCharacter(c)),
            }
        }

        if cells.len() != 9 {
            return Err(ParseBoardError::InvalidLength(cells.len()));
        }

        let count = |p: Player| cells.iter().filter(|s| **s == Square::Occupied(p)).count();
        let (x, o) = (count(Player::X), count(Player::O));
        let current_turn = if x == o {
            Player::X
        } else if x == o + 1 {
            Player::O
        } else {
            return Err(ParseBoardError::InvalidCounts { x, o });
        };

        let mut squares = [[Square::Empty; 3]; 3];
        for (pos, square) in Position::ALL.into_iter().zip(cells) {
            squares[pos.row()][pos.col()] = square;
        }

        Ok(Self {
            squares,
            move_count: (x + o) as u8,
            current_turn,
            terminal_line: rules::completed_line(&squares).map(|(line, _)| line),
        })
    }
}
