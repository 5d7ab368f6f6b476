//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// Player X (always moves first).
    X,
    /// Player O (goes second, and is the computer in single-player games).
    O,
}

impl Side {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds a side's mark.
    Occupied(Side),
}

impl Cell {
    /// Returns the side holding this cell, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(side) => Some(side),
        }
    }
}

/// Error raised by board queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Index is outside 0-8.
    #[display("Cell index {} is out of range (0-8)", _0)]
    IndexOutOfRange(usize),
}

impl std::error::Error for BoardError {}

/// Text could not be read as a board layout.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid board layout: {}", reason)]
pub struct ParseBoardError {
    /// What was wrong with the text.
    pub reason: String,
}

impl ParseBoardError {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// 3x3 board, cells in row-major order (index = row * 3 + col).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`.
    #[instrument(skip(self))]
    pub fn cell_at(&self, index: usize) -> Result<Cell, BoardError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(BoardError::IndexOutOfRange(index))
    }

    /// Checks if the cell at `index` is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(Cell::Empty))
    }

    /// Places `side`'s mark at `index`.
    ///
    /// The caller must have checked that the cell is empty and in range;
    /// placing on an occupied cell is a logic error.
    pub fn place(&mut self, index: usize, side: Side) {
        debug_assert!(
            self.is_empty(index),
            "place() on occupied or invalid cell {index}"
        );
        self.cells[index] = Cell::Occupied(side);
    }

    /// True when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Value copy of the board, as stored in history.
    pub fn snapshot(&self) -> Board {
        *self
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Indices of empty cells in ascending order.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| i)
    }

    /// Number of marks `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Occupied(side))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        CELL_COUNT - self.empty_cells().count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{index}")?,
                    Cell::Occupied(side) => write!(f, "{side}")?,
                }
                if col < 2 {
                    f.write_str("|")?;
                }
            }
            if row < 2 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Parses a 9-character layout such as `"XX.OO...."`.
///
/// `X` and `O` are marks; `.`, `-`, `_` and space are empty cells.
/// `|`, `/` and newlines are ignored so rows can be separated.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in s.chars().filter(|c| !matches!(c, '|' | '/' | '\n' | '\r')) {
            let cell = match ch.to_ascii_uppercase() {
                'X' => Cell::Occupied(Side::X),
                'O' => Cell::Occupied(Side::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                other => {
                    return Err(ParseBoardError::new(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
            if count == CELL_COUNT {
                return Err(ParseBoardError::new(format!(
                    "more than {CELL_COUNT} cells"
                )));
            }
            cells[count] = cell;
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseBoardError::new(format!(
                "expected {CELL_COUNT} cells, found {count}"
            )));
        }
        Ok(Self { cells })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!((0..CELL_COUNT).all(|i| board.is_empty(i)));
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), 9);
    }

    #[test]
    fn test_cell_at_out_of_range() {
        let board = Board::new();
        assert_eq!(board.cell_at(9), Err(BoardError::IndexOutOfRange(9)));
        assert_eq!(board.cell_at(8), Ok(Cell::Empty));
        assert!(!board.is_empty(42));
    }

    #[test]
    fn test_place_and_snapshot_are_independent() {
        let mut board = Board::new();
        board.place(4, Side::X);
        let snap = board.snapshot();
        board.place(0, Side::O);

        assert_eq!(snap.cell_at(4), Ok(Cell::Occupied(Side::X)));
        assert!(snap.is_empty(0));
        assert_eq!(board.cell_at(0), Ok(Cell::Occupied(Side::O)));
    }

    #[test]
    fn test_parse_layout() {
        let board: Board = "XX.|OO.|...".parse().unwrap();
        assert_eq!(board.count(Side::X), 2);
        assert_eq!(board.count(Side::O), 2);
        assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![2, 5, 6, 7, 8]);
    }

    #[test]
    fn test_parse_rejects_bad_layout() {
        assert!("XX".parse::<Board>().is_err());
        assert!("XXOOXXOOXX".parse::<Board>().is_err());
        assert!("XX.OO...Z".parse::<Board>().is_err());
    }

    #[test]
    fn test_display() {
        let board: Board = "X.O......".parse().unwrap();
        assert_eq!(board.to_string(), "X|1|O\n-+-+-\n3|4|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Side::X.opponent(), Side::O);
        assert_eq!(Side::O.opponent(), Side::X);
    }
}
