//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// `X` is player 0 and always moves first on a fresh board; `O` is player 1.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (player 0, goes first).
    #[display("X")]
    #[serde(alias = "x")]
    X,
    /// Player O (player 1).
    #[display("O")]
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Player with the given numeric identity (0 for X, 1 for O).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Player::X),
            1 => Some(Player::O),
            _ => None,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// True if no player occupies the square.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent().opponent(), Player::O);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Player::from_index(0), Some(Player::X));
        assert_eq!(Player::from_index(1), Some(Player::O));
        assert_eq!(Player::from_index(2), None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Player::from_str("x").ok(), Some(Player::X));
        assert_eq!(Player::from_str("O").ok(), Some(Player::O));
        assert!(Player::from_str("z").is_err());
    }

    #[test]
    fn test_square_player() {
        assert_eq!(Square::Empty.player(), None);
        assert_eq!(Square::Occupied(Player::O).player(), Some(Player::O));
        assert!(Square::default().is_empty());
    }
}
