//! Win detection logic for tic-tac-toe.

use super::Grid;
use crate::line::Line;
use crate::position::Position;
use crate::types::{Player, Square};

/// Returns the line completed by `player` through `pos`, if any.
///
/// Only lines through the placed cell are examined, in the order given by
/// [`Line::through`]; each line stops at its first mismatching square and
/// the first complete line is reported even if the move completed two.
pub fn detect_line(grid: &Grid, pos: Position, player: Player) -> Option<Line> {
    let mark = Square::Occupied(player);
    Line::through(pos).find(|line| {
        line.cells()
            .iter()
            .all(|cell| grid[cell.row()][cell.col()] == mark)
    })
}

/// Scans the whole grid for a completed line.
///
/// Returns the first complete line in [`Line::ALL`] order together with
/// its owner.
pub fn completed_line(grid: &Grid) -> Option<(Line, Player)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.cells().map(|cell| grid[cell.row()][cell.col()]);
        match a {
            Square::Occupied(player) if a == b && b == c => Some((line, player)),
            _ => None,
        }
    })
}
