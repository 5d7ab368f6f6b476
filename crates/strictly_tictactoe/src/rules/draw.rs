//! Draw detection logic for tic-tac-toe.

use super::super::types::Board;
use super::win::check_winner;

/// Checks if the game is a draw: every cell is taken and no line is complete.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}
