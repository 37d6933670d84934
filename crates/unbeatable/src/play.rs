//! Line-oriented game loops and one-shot commands.

use crate::input::{HELP, Input, parse_input};
use crate::render::{describe_line, render_board, status_line};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};
use unbeatable_tictactoe::{
    Board, DRAW, GameSession, GameSnapshot, LOSS, MinimaxEngine, Player, WIN, best_move,
};

/// Runs an interactive game until the player quits or input ends.
///
/// The computer replies as soon as it is its turn. Once a game is over
/// only `reset`, `help` and `quit` change anything. Returns a snapshot of
/// the final state.
#[instrument(skip_all, fields(human = %session.human()))]
pub fn run_interactive<R, W>(session: &mut GameSession, input: R, output: &mut W) -> Result<GameSnapshot>
where
    R: BufRead,
    W: Write,
{
    info!("Starting interactive game");
    writeln!(output, "You are {}. Type 'h' for help.", session.human())?;
    writeln!(output, "{}", render_board(session))?;

    let mut lines = input.lines();
    loop {
        if session.is_computer_turn() {
            let pos = session
                .trigger_computer_move()
                .context("computer failed to move")?;
            writeln!(output, "Computer plays {}.", pos)?;
            writeln!(output, "{}", render_board(session))?;
            continue;
        }

        writeln!(output, "{}", status_line(session))?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            break;
        };
        let line = line?;

        match parse_input(&line) {
            Ok(Input::Quit) => break,
            Ok(Input::Help) => writeln!(output, "{}", HELP)?,
            Ok(Input::Reset) => {
                session.reset_game();
                writeln!(output, "Game restarted.")?;
                writeln!(output, "{}", render_board(session))?;
            }
            Ok(Input::Cell { row, col }) => match session.apply_human_move(row, col) {
                Ok(_) => writeln!(output, "{}", render_board(session))?,
                Err(e) => {
                    warn!(row, col, error = %e, "Rejected move");
                    writeln!(output, "Illegal move: {}.", e)?;
                }
            },
            Err(e) => writeln!(output, "{}. Type 'h' for help.", e)?,
        }
    }

    info!(status = ?session.status(), "Leaving interactive game");
    Ok(session.snapshot())
}

/// Lets the engine play both sides from an empty board.
///
/// Prints each move and the final board, or the final snapshot as JSON.
#[instrument(skip(output))]
pub fn run_self_play<W: Write>(json: bool, output: &mut W) -> Result<GameSnapshot> {
    // The computer plays X here and the "human" seat is driven by a second engine.
    let mut session = GameSession::new(Player::O);
    let mut opponent = MinimaxEngine::new();

    while !session.is_game_over() {
        let pos = if session.is_computer_turn() {
            session.trigger_computer_move()?
        } else {
            let pos = opponent.select_best_move(session.board(), session.human())?;
            session.apply_human_move(pos.row(), pos.col())?;
            pos
        };
        if !json {
            writeln!(
                output,
                "{} plays {}.",
                session.board().current_turn().opponent(),
                pos
            )?;
        }
    }

    let snapshot = session.snapshot();
    if json {
        writeln!(output, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    } else {
        writeln!(output, "{}", render_board(&session))?;
        writeln!(output, "Result: {}", outcome(&session))?;
    }
    info!(positions = *session.engine().stats().positions(), "Self-play finished");
    Ok(snapshot)
}

fn outcome(session: &GameSession) -> String {
    match session.board().winner() {
        Some(player) => format!("{} wins on {}", player, describe_line(session.winning_line())),
        None => "draw".to_string(),
    }
}

/// Scores every legal move for the side to move on `board_text`.
#[instrument(skip(output))]
pub fn run_analyze<W: Write>(board_text: &str, output: &mut W) -> Result<()> {
    let board: Board = board_text
        .parse()
        .with_context(|| format!("invalid board '{}'", board_text))?;
    writeln!(output, "{}", board)?;

    if board.is_game_over() {
        match board.winner() {
            Some(player) => writeln!(
                output,
                "Game over: {} won on {}.",
                player,
                describe_line(board.winning_line())
            )?,
            None => writeln!(output, "Game over: draw.")?,
        }
        return Ok(());
    }

    let player = board.current_turn();
    let mut engine = MinimaxEngine::new();
    let scores = engine.evaluate_moves(&board, player)?;
    writeln!(output, "{} to move:", player)?;
    for score in &scores {
        writeln!(output, "  {:<14} {}", score.position().to_string(), verdict(*score.score()))?;
    }

    let best = best_move(&scores).context("no legal moves")?;
    writeln!(output, "Best move: {}", best.position())?;
    debug!(positions = *engine.stats().positions(), "Analysis complete");
    Ok(())
}

fn verdict(score: i8) -> &'static str {
    match score {
        WIN => "win",
        LOSS => "loss",
        DRAW => "draw",
        _ => "unknown",
    }
}
