//! Single-cell delta invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::history::single_placement;
use crate::session::Session;
use crate::types::Board;

/// Invariant: every snapshot differs from its predecessor (the empty board
/// for the first one) by one cell going from empty to a mark.
pub struct SingleCellDeltaInvariant;

impl Invariant<Session> for SingleCellDeltaInvariant {
    fn holds(session: &Session) -> bool {
        let snapshots = session.history().snapshots();
        let start = Board::new();
        std::iter::once(&start)
            .chain(snapshots.iter())
            .zip(snapshots.iter())
            .all(|(before, after)| single_placement(before, after).is_some())
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to the previous one"
    }
}
