//! Parsing of interactive commands typed at the prompt.

use derive_more::{Display, Error};
use tracing::instrument;
use unbeatable_tictactoe::Position;

/// A command entered by the human player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place a mark at a zero-based row and column.
    ///
    /// Coordinates are passed through unchecked so the session can
    /// report out-of-bounds moves itself.
    Cell {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Why a line of input could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// Nothing but whitespace was entered.
    #[display("no command entered")]
    Empty,
    /// The text matches no command, cell number or label.
    #[display("unrecognized input '{}'", _0)]
    Unrecognized(#[error(not(source))] String),
}

/// Parses one line of input.
///
/// Accepts `row col` pairs (zero-based, space or comma separated),
/// cell numbers 1-9, position labels such as `center` or `top-left`,
/// and the words `r`/`reset`, `h`/`help`, `q`/`quit`.
#[instrument(level = "trace", ret)]
pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let text = line.trim().to_lowercase();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    match text.as_str() {
        "r" | "reset" | "new" | "^r" => return Ok(Input::Reset),
        "h" | "help" | "?" => return Ok(Input::Help),
        "q" | "quit" | "exit" => return Ok(Input::Quit),
        _ => {}
    }

    let parts: Vec<&str> = text
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|p| !p.is_empty())
        .collect();
    if let [row, col] = parts.as_slice() {
        if let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) {
            return Ok(Input::Cell { row, col });
        }
    }

    Position::from_label_or_number(&text)
        .map(|pos| Input::Cell {
            row: pos.row(),
            col: pos.col(),
        })
        .ok_or_else(|| InputError::Unrecognized(line.trim().to_string()))
}

/// Command summary shown for `help`.
pub const HELP: &str = "\
Commands:
  <row> <col>   place your mark (rows and columns count from 0)
  1-9           place your mark by cell number, left to right, top to bottom
  <label>       place your mark by name, e.g. center or top-left
  r, reset      start a new game
  h, help       show this message
  q, quit       leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_col_pairs() {
        assert_eq!(parse_input("1 2"), Ok(Input::Cell { row: 1, col: 2 }));
        assert_eq!(parse_input(" 0,0 "), Ok(Input::Cell { row: 0, col: 0 }));
        // Range checks belong to the session.
        assert_eq!(parse_input("3 7"), Ok(Input::Cell { row: 3, col: 7 }));
    }

    #[test]
    fn test_cell_numbers_and_labels() {
        assert_eq!(parse_input("5"), Ok(Input::Cell { row: 1, col: 1 }));
        assert_eq!(parse_input("9"), Ok(Input::Cell { row: 2, col: 2 }));
        assert_eq!(parse_input("Center"), Ok(Input::Cell { row: 1, col: 1 }));
        assert_eq!(parse_input("top left"), Ok(Input::Cell { row: 0, col: 0 }));
    }

    #[test]
    fn test_control_words() {
        assert_eq!(parse_input("r"), Ok(Input::Reset));
        assert_eq!(parse_input("RESET"), Ok(Input::Reset));
        assert_eq!(parse_input("?"), Ok(Input::Help));
        assert_eq!(parse_input("quit"), Ok(Input::Quit));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_input("   "), Err(InputError::Empty));
        assert_eq!(
            parse_input("banana"),
            Err(InputError::Unrecognized("banana".to_string()))
        );
        assert!(parse_input("0").is_err());
        assert!(parse_input("10").is_err());
        // Stray letters, including the player's own mark, are not moves.
        for text in ["e", "t", "-", "l", "left", "o", "x", "top"] {
            assert_eq!(
                parse_input(text),
                Err(InputError::Unrecognized(text.to_string())),
                "{text}"
            );
        }
    }

    #[test]
    fn test_unique_label_prefix() {
        assert_eq!(parse_input("bottom-r"), Ok(Input::Cell { row: 2, col: 2 }));
        assert_eq!(parse_input("cen"), Ok(Input::Cell { row: 1, col: 1 }));
    }
}
