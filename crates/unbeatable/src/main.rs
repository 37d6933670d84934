//! Unbeatable - play tic-tac-toe against a minimax opponent.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use std::io;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use unbeatable::{Cli, Command, PlayConfig, run_analyze, run_interactive, run_self_play};
use unbeatable_tictactoe::GameSession;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;
    init_tracing(config.log_filter());

    info!(config = %cli.config.display(), "Configuration loaded");

    let stdout = io::stdout();
    let mut output = stdout.lock();
    match cli.command {
        Command::Play { human } => {
            let config = match human {
                Some(human) => config.with_human(human),
                None => config,
            };
            run_play(&config, &mut output)
        }
        Command::SelfPlay { json } => run_self_play(json, &mut output).map(|_| ()),
        Command::Analyze { board } => run_analyze(&board, &mut output),
    }
}

/// Tracing on stderr; `RUST_LOG` takes precedence over the configured filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(output))]
fn run_play<W: io::Write>(config: &PlayConfig, output: &mut W) -> Result<()> {
    let mut session = GameSession::new(*config.human());
    let snapshot = run_interactive(&mut session, io::stdin().lock(), output)?;
    info!(status = ?snapshot.status(), "Goodbye");
    Ok(())
}
