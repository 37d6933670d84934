//! Tic-tac-toe game-state engine with an opponent that cannot lose.
//!
//! # Architecture
//!
//! - **Board**: grid occupancy, move count, turn owner and terminal line,
//!   with legality checks, move application and win detection
//! - **Search**: exhaustive minimax over every empty cell
//! - **Session**: one owned game between a human and the engine, the only
//!   surface a presentation layer needs
//!
//! # Example
//!
//! ```
//! use unbeatable_tictactoe::{GameSession, Player};
//!
//! # fn example() -> Result<(), unbeatable_tictactoe::MoveError> {
//! let mut session = GameSession::new(Player::X);
//! session.apply_human_move(1, 1)?;
//! let reply = session.trigger_computer_move()?;
//! assert!(!session.board().is_empty(reply));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
pub mod invariants;
mod line;
mod position;
pub mod rules;
mod search;
mod session;
mod types;

pub use board::{Board, GameStatus};
pub use error::{MoveError, ParseBoardError};
pub use line::{Line, TerminalStatus};
pub use position::Position;
pub use search::{
    DRAW, LOSS, MinimaxEngine, MoveScore, SearchStats, WIN, best_move, minimax_value,
    select_best_move,
};
pub use session::{GameSession, GameSnapshot};
pub use types::{Player, Square};
