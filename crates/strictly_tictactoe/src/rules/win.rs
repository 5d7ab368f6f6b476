//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Cell, Side};
use serde::{Deserialize, Serialize};

/// Three board indices that win when held by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// Creates a line from three indices.
    pub const fn new(cells: [usize; 3]) -> Self {
        Self(cells)
    }

    /// The three indices of the line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// True if `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// Returns the side holding all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Side> {
        let cells = board.cells();
        let [a, b, c] = self.0;
        match cells[a] {
            Cell::Occupied(side) if cells[b] == cells[a] && cells[c] == cells[a] => Some(side),
            _ => None,
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// The eight winning lines: rows, then columns, then diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine::new([0, 1, 2]),
    WinLine::new([3, 4, 5]),
    WinLine::new([6, 7, 8]),
    // Columns
    WinLine::new([0, 3, 6]),
    WinLine::new([1, 4, 7]),
    WinLine::new([2, 5, 8]),
    // Diagonals
    WinLine::new([0, 4, 8]),
    WinLine::new([2, 4, 6]),
];

/// Returns the first completed line and its owner, scanning in
/// [`WIN_LINES`] order.
pub fn check_winner(board: &Board) -> Option<(Side, WinLine)> {
    WIN_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|side| (side, *line)))
}
