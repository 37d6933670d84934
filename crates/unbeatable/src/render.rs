//! Text rendering of a game session.

use unbeatable_tictactoe::{GameSession, GameStatus, Position, Square, TerminalStatus};

/// Renders the grid with cell numbers in empty squares.
///
/// Cells on the winning line are bracketed, e.g. `[X]`.
pub fn render_board(session: &GameSession) -> String {
    let board = session.board();
    let struck = session.winning_line().map(|line| line.cells());

    let rows: Vec<String> = (0..3)
        .map(|row| {
            (0..3)
                .filter_map(|col| Position::from_row_col(row, col))
                .map(|pos| render_cell(pos, board.get(pos), struck))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();
    rows.join("\n---+---+---\n")
}

fn render_cell(pos: Position, square: Square, struck: Option<[Position; 3]>) -> String {
    let mark = match square {
        Square::Occupied(player) => player.to_string(),
        Square::Empty => (pos.to_index() + 1).to_string(),
    };
    if struck.is_some_and(|cells| cells.contains(&pos)) {
        format!("[{}]", mark)
    } else {
        format!(" {} ", mark)
    }
}

/// One-line description of whose turn it is or how the game ended.
pub fn status_line(session: &GameSession) -> String {
    match session.status() {
        GameStatus::InProgress(player) if player == session.human() => {
            format!("Your move ({}).", player)
        }
        GameStatus::InProgress(player) => format!("Computer ({}) is thinking...", player),
        GameStatus::Won { line, winner } => {
            let who = if winner == session.human() {
                "You win"
            } else {
                "Computer wins"
            };
            format!(
                "{} on {}! Press 'r' to restart or 'q' to quit.",
                who,
                describe_line(Some(line))
            )
        }
        GameStatus::Draw => "Game ended in a draw! Press 'r' to restart or 'q' to quit.".to_string(),
    }
}

/// Names a terminal line together with its cells.
pub fn describe_line(line: TerminalStatus) -> String {
    match line {
        Some(line) => {
            let [a, b, c] = line.cells();
            format!("{} ({}, {}, {})", line, a, b, c)
        }
        None => "no line".to_string(),
    }
}
