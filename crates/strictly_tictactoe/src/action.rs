//! Moves and the errors raised when applying or undoing them.

use super::position::Position;
use super::types::{BoardError, Side};
use serde::{Deserialize, Serialize};

/// A side placing its mark at a board index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// Board index (0-8).
    pub index: usize,
    /// The side that moved.
    pub side: Side,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.index) {
            Some(pos) => write!(f, "{} -> {}", self.side, pos),
            None => write!(f, "{} -> {}", self.side, self.index),
        }
    }
}

/// Error raised by a rejected move. The session is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game is over; reset or undo first.
    #[display("Game is not active")]
    GameNotActive,

    /// The target cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The index is outside 0-8.
    #[display("Cell index {} is out of range (0-8)", _0)]
    IndexOutOfRange(usize),
}

impl std::error::Error for MoveError {}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::IndexOutOfRange(index) => MoveError::IndexOutOfRange(index),
        }
    }
}

/// Error raised by a rejected undo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum UndoError {
    /// Fewer than two snapshots are recorded.
    #[display("Nothing to undo")]
    NothingToUndo,
}

impl std::error::Error for UndoError {}
