//! Terminal front end for the unbeatable tic-tac-toe engine.
//!
//! The binary wires these modules together; they are exposed as a library
//! so the game loop can be driven with in-memory input in tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod play;
pub mod render;

pub use cli::{Cli, Command};
pub use config::{ConfigError, PlayConfig};
pub use input::{Input, InputError, parse_input};
pub use play::{run_analyze, run_interactive, run_self_play};
