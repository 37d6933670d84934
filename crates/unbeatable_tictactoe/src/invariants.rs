//! First-class invariants for the board.
//!
//! Invariants are logical properties that must hold between moves. They are
//! testable independently and checked by [`GameSession`](crate::GameSession)
//! after every committed move in debug builds.

use super::board::Board;
use super::rules;
use super::types::{Player, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for 2- and 3-tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

fn marks(board: &Board, player: Player) -> usize {
    board
        .squares()
        .iter()
        .flatten()
        .filter(|s| **s == Square::Occupied(player))
        .count()
}

/// Invariant: the move count equals the number of occupied squares.
pub struct MoveCountConsistent;

impl Invariant<Board> for MoveCountConsistent {
    fn holds(board: &Board) -> bool {
        usize::from(board.move_count()) == marks(board, Player::X) + marks(board, Player::O)
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied squares"
    }
}

/// Invariant: a recorded terminal line is owned by one player, and no
/// line is complete while none is recorded.
pub struct TerminalLineConsistent;

impl Invariant<Board> for TerminalLineConsistent {
    fn holds(board: &Board) -> bool {
        match board.winning_line() {
            Some(line) => {
                let [a, b, c] = line.cells().map(|cell| board.get(cell));
                !a.is_empty() && a == b && b == c
            }
            None => rules::completed_line(board.squares()).is_none(),
        }
    }

    fn description() -> &'static str {
        "Terminal line matches the completed line on the board"
    }
}

/// Invariant: X and O alternate, X first.
///
/// Mark counts differ by at most one in X's favour, and the player to move
/// matches the parity of the move count. Holds for real games, not for
/// boards mid-search.
pub struct TurnParity;

impl Invariant<Board> for TurnParity {
    fn holds(board: &Board) -> bool {
        let (x, o) = (marks(board, Player::X), marks(board, Player::O));
        let expected = Player::from_index(board.move_count() % 2);
        (x == o || x == o + 1) && expected == Some(board.current_turn())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

/// Invariants every board satisfies.
pub type BoardInvariants = (MoveCountConsistent, TerminalLineConsistent);

/// Invariants of a board driven by a real game.
pub type GameInvariants = (MoveCountConsistent, TerminalLineConsistent, TurnParity);
