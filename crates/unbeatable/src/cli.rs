//! Command-line interface for unbeatable.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use unbeatable_tictactoe::Player;

/// Unbeatable - tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeatable")]
#[command(about = "Tic-tac-toe against an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, global = true, default_value = "unbeatable.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Mark the human plays (x or o), overriding the config file
        #[arg(long)]
        human: Option<Player>,
    },

    /// Let the engine play both sides from an empty board
    SelfPlay {
        /// Print the final game snapshot as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score every legal move for the side to move
    Analyze {
        /// Board as nine cells, row by row (X, O, and . for empty), e.g. "X.. .O. ..X"
        board: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_with_human_override() {
        let cli = Cli::parse_from(["unbeatable", "play", "--human", "o"]);
        assert_eq!(cli.config, PathBuf::from("unbeatable.toml"));
        assert!(matches!(cli.command, Command::Play { human: Some(Player::O) }));
    }

    #[test]
    fn test_parse_global_config_after_subcommand() {
        let cli = Cli::parse_from(["unbeatable", "self-play", "--json", "--config", "alt.toml"]);
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(matches!(cli.command, Command::SelfPlay { json: true }));
    }

    #[test]
    fn test_parse_analyze_board() {
        let cli = Cli::parse_from(["unbeatable", "analyze", "X.. X.. ..O"]);
        match cli.command {
            Command::Analyze { board } => assert_eq!(board, "X.. X.. ..O"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_mark() {
        assert!(Cli::try_parse_from(["unbeatable", "play", "--human", "z"]).is_err());
    }
}
