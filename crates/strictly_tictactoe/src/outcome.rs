//! Game outcomes.

use super::rules::WinLine;
use super::types::Side;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameOutcome {
    /// No line is complete and empty cells remain.
    #[default]
    InProgress,
    /// A side completed the given line.
    Win(Side, WinLine),
    /// The board is full with no complete line.
    Draw,
}

impl GameOutcome {
    /// True for `Win` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Win(side, _) => Some(*side),
            _ => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            GameOutcome::Win(_, line) => Some(*line),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Win(side, line) => write!(f, "Player {} wins on {}", side, line),
            GameOutcome::Draw => write!(f, "It's a draw"),
        }
    }
}
