//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::session::Session;
use crate::types::Side;

/// Invariant: sides alternate, starting with X.
///
/// X has as many marks as O or one more, and while the game is active the
/// side to move matches the history's parity law.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let board = session.board();
        let x = board.count(Side::X);
        let o = board.count(Side::O);
        if x != o && x != o + 1 {
            return false;
        }

        !session.is_active() || session.current_side() == session.history().side_to_move()
    }

    fn description() -> &'static str {
        "Sides alternate starting with X"
    }
}
