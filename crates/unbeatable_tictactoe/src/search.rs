//! Exhaustive minimax search for the computer's move.
//!
//! Every candidate is scored by playing out the complete game tree below
//! it, assuming both sides play perfectly. Scores are from the searching
//! player's point of view: [`WIN`], [`LOSS`] or [`DRAW`].
//!
//! The caller's board is only borrowed. Speculative marks are placed on a
//! private scratch copy with [`Board::apply_move`] and always rolled back
//! with [`Board::undo_move`] before the evaluating call returns.

use super::board::Board;
use super::error::MoveError;
use super::line::TerminalStatus;
use super::position::Position;
use super::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position the searching player wins.
pub const WIN: i8 = 1;
/// Score of a position the searching player loses.
pub const LOSS: i8 = -1;
/// Score of a drawn position.
pub const DRAW: i8 = 0;

/// Minimax score of one candidate move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct MoveScore {
    /// The candidate cell.
    position: Position,
    /// Its value for the searching player.
    score: i8,
}

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SearchStats {
    /// Speculative moves applied (game-tree nodes visited).
    positions: u64,
}

/// Minimax opponent. Stateless apart from the statistics of its last search.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    stats: SearchStats,
}

impl MinimaxEngine {
    /// Creates a new engine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the last completed search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Scores every empty cell for `player`, in row-major scan order.
    ///
    /// # Errors
    ///
    /// `MoveError::GameOver` if the board is already terminal.
    #[instrument(skip(self, board), fields(move_count = board.move_count()))]
    pub fn evaluate_moves(&mut self, board: &Board, player: Player) -> Result<Vec<MoveScore>, MoveError> {
        if board.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let mut scratch = board.clone();
        let mut positions = 0;
        let scores = Position::ALL
            .into_iter()
            .filter(|pos| board.is_empty(*pos))
            .map(|position| {
                let score = score_move(&mut scratch, position, player, player, &mut positions)?;
                Ok(MoveScore { position, score })
            })
            .collect::<Result<Vec<_>, MoveError>>()?;

        self.stats = SearchStats { positions };
        debug!(positions, ?scores, "Evaluated candidate moves");
        Ok(scores)
    }

    /// Picks the optimal cell for `player`.
    ///
    /// Ties go to the first candidate in scan order, so results are
    /// reproducible. The board is not modified; committing the move is the
    /// caller's job.
    ///
    /// # Errors
    ///
    /// `MoveError::GameOver` if the board is already terminal.
    #[instrument(skip(self, board))]
    pub fn select_best_move(&mut self, board: &Board, player: Player) -> Result<Position, MoveError> {
        let scores = self.evaluate_moves(board, player)?;
        let best = best_move(&scores).ok_or(MoveError::GameOver)?;

        debug!(position = %best.position, score = best.score, "Selected move");
        Ok(best.position)
    }
}

/// The first highest-scoring candidate, or `None` for an empty list.
pub fn best_move(scores: &[MoveScore]) -> Option<MoveScore> {
    scores.iter().copied().reduce(|best, candidate| {
        if candidate.score > best.score {
            candidate
        } else {
            best
        }
    })
}

/// Picks the optimal cell for `player` with a fresh [`MinimaxEngine`].
pub fn select_best_move(board: &Board, player: Player) -> Result<Position, MoveError> {
    MinimaxEngine::new().select_best_move(board, player)
}

/// Value of `mover` placing a mark at `pos`, seen from `maximizer`.
///
/// The mark is rolled back before returning, leaving `board` as it was.
///
/// # Errors
///
/// `MoveError::GameOver` or `MoveError::Occupied` if the placement itself
/// is illegal.
pub fn minimax_value(
    board: &mut Board,
    pos: Position,
    mover: Player,
    maximizer: Player,
) -> Result<i8, MoveError> {
    let mut positions = 0;
    score_move(board, pos, mover, maximizer, &mut positions)
}

fn score_move(
    board: &mut Board,
    pos: Position,
    mover: Player,
    maximizer: Player,
    positions: &mut u64,
) -> Result<i8, MoveError> {
    let line = board.apply_move(pos, mover)?;
    *positions += 1;
    let value = score_after(board, line, mover, maximizer, positions);
    board.undo_move(pos);
    value
}

/// Scores the position just reached by `mover`'s move.
///
/// Children are folded starting from the first child's value: maximum when
/// the next mover is `maximizer`, minimum otherwise.
fn score_after(
    board: &mut Board,
    line: TerminalStatus,
    mover: Player,
    maximizer: Player,
    positions: &mut u64,
) -> Result<i8, MoveError> {
    if line.is_some() {
        return Ok(if mover == maximizer { WIN } else { LOSS });
    }
    if board.is_full() {
        return Ok(DRAW);
    }

    let next = mover.opponent();
    let mut best = None;
    for child in Position::ALL {
        if !board.is_empty(child) {
            continue;
        }
        let value = score_move(board, child, next, maximizer, positions)?;
        best = Some(match best {
            None => value,
            Some(current) if next == maximizer => value.max(current),
            Some(current) => value.min(current),
        });
    }

    Ok(best.unwrap_or(DRAW))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_cell_draw_scores_zero() {
        // X O X / X O O / O X _  -- X fills the last cell without a line.
        let mut board: Board = "XOX XOO OX.".parse().unwrap();
        let before = board.clone();
        assert_eq!(
            minimax_value(&mut board, Position::BottomRight, Player::X, Player::X),
            Ok(DRAW)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_immediate_win_scores_win() {
        let mut board: Board = "XX. OO. ...".parse().unwrap();
        assert_eq!(
            minimax_value(&mut board, Position::TopRight, Player::X, Player::X),
            Ok(WIN)
        );
        assert_eq!(
            minimax_value(&mut board, Position::MiddleRight, Player::O, Player::X),
            Ok(LOSS)
        );
    }

    #[test]
    fn test_occupied_cell_is_rejected() {
        let mut board: Board = "X.. ... ...".parse().unwrap();
        assert_eq!(
            minimax_value(&mut board, Position::TopLeft, Player::O, Player::O),
            Err(MoveError::Occupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_best_move_takes_first_maximum() {
        let scores = [
            MoveScore { position: Position::TopLeft, score: LOSS },
            MoveScore { position: Position::Center, score: DRAW },
            MoveScore { position: Position::BottomRight, score: DRAW },
        ];
        assert_eq!(best_move(&scores).map(|s| s.position), Some(Position::Center));
        assert_eq!(best_move(&[]), None);
    }

    #[test]
    fn test_stats_count_visited_positions() {
        let board: Board = "XOX XOO OX.".parse().unwrap();
        let mut engine = MinimaxEngine::new();
        engine.select_best_move(&board, Player::X).unwrap();
        assert_eq!(*engine.stats().positions(), 1);
    }
}
