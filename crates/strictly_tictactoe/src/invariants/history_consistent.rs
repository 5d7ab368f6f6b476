//! History consistency invariant: history matches the live board.

use super::Invariant;
use crate::session::Session;

/// Invariant: one snapshot per occupied cell, and the latest snapshot is
/// the live board.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();
        if history.len() != session.board().occupied() {
            return false;
        }
        match history.tail() {
            Some(tail) => tail == session.board(),
            None => session.board().occupied() == 0,
        }
    }

    fn description() -> &'static str {
        "History length matches occupied cells and its tail is the board"
    }
}
