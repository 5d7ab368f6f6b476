//! Game rules for tic-tac-toe.
//!
//! Pure functions over a board snapshot. Both the move applier and the
//! computer opponent's search call into this module, so nothing here
//! holds state.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{WIN_LINES, WinLine, check_winner};

use super::outcome::GameOutcome;
use super::types::Board;

/// Evaluates a board.
///
/// Lines are scanned in [`WIN_LINES`] order and the first complete one is
/// reported. A full board with no complete line is a draw.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((side, line)) = check_winner(board) {
        GameOutcome::Win(side, line)
    } else if is_draw(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
