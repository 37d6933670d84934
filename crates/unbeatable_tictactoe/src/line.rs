//! The eight winning lines of a 3x3 board.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// One of the 8 winning triples.
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
)]
pub enum Line {
    /// Top row.
    #[display("row 1")]
    Row1,
    /// Middle row.
    #[display("row 2")]
    Row2,
    /// Bottom row.
    #[display("row 3")]
    Row3,
    /// Left column.
    #[display("column 1")]
    Col1,
    /// Middle column.
    #[display("column 2")]
    Col2,
    /// Right column.
    #[display("column 3")]
    Col3,
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Outcome of win detection: the completed line, or `None`.
pub type TerminalStatus = Option<Line>;

impl Line {
    /// All lines, rows first, then columns, then both diagonals.
    pub const ALL: [Line; 8] = [
        Line::Row1,
        Line::Row2,
        Line::Row3,
        Line::Col1,
        Line::Col2,
        Line::Col3,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The row line with the given zero-based index.
    pub fn row(index: usize) -> Option<Self> {
        [Line::Row1, Line::Row2, Line::Row3].get(index).copied()
    }

    /// The column line with the given zero-based index.
    pub fn col(index: usize) -> Option<Self> {
        [Line::Col1, Line::Col2, Line::Col3].get(index).copied()
    }

    /// The three cells of this line, in scan order.
    pub fn cells(self) -> [Position; 3] {
        use Position::*;

        match self {
            Line::Row1 => [TopLeft, TopCenter, TopRight],
            Line::Row2 => [MiddleLeft, Center, MiddleRight],
            Line::Row3 => [BottomLeft, BottomCenter, BottomRight],
            Line::Col1 => [TopLeft, MiddleLeft, BottomLeft],
            Line::Col2 => [TopCenter, Center, BottomCenter],
            Line::Col3 => [TopRight, MiddleRight, BottomRight],
            Line::Diagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Lines passing through `pos`, in detection priority order:
    /// its row, its column, the diagonal when `row == col`, and the
    /// anti-diagonal when `row + col == 2`.
    pub fn through(pos: Position) -> impl Iterator<Item = Line> {
        let (row, col) = (pos.row(), pos.col());
        [
            Line::row(row),
            Line::col(col),
            (row == col).then_some(Line::Diagonal),
            (row + col == 2).then_some(Line::AntiDiagonal),
        ]
        .into_iter()
        .flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_on_four_lines() {
        let lines: Vec<_> = Line::through(Position::Center).collect();
        assert_eq!(
            lines,
            vec![Line::Row2, Line::Col2, Line::Diagonal, Line::AntiDiagonal]
        );
    }

    #[test]
    fn test_edge_is_on_two_lines() {
        let lines: Vec<_> = Line::through(Position::MiddleLeft).collect();
        assert_eq!(lines, vec![Line::Row2, Line::Col1]);
    }

    #[test]
    fn test_corner_priority() {
        let lines: Vec<_> = Line::through(Position::BottomLeft).collect();
        assert_eq!(lines, vec![Line::Row3, Line::Col1, Line::AntiDiagonal]);
    }

    #[test]
    fn test_every_line_cell_lists_the_line() {
        for line in Line::ALL {
            for cell in line.cells() {
                assert!(Line::through(cell).any(|l| l == line), "{line} via {cell}");
            }
        }
    }
}
