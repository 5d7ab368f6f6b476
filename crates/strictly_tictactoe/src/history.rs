//! Board snapshot history backing undo.

use super::action::{Move, UndoError};
use super::types::{Board, Cell, Side};
use tracing::{debug, instrument};

/// Snapshots of the board, one per applied move.
///
/// The empty starting board is not stored: entry 0 is the board after the
/// first move. Each entry differs from the previous one in exactly one cell.
///
/// # Parity law
///
/// X moves first and sides alternate, so after `n` recorded moves the side
/// to move is X when `n` is even and O when `n` is odd. Undo uses this law
/// to restore the side to move.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveHistory {
    snapshots: Vec<Board>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snapshot.
    pub fn record(&mut self, board: Board) {
        self.snapshots.push(board);
    }

    /// Drops the latest snapshot and returns the new latest one.
    ///
    /// At least one snapshot is always kept: with fewer than two there is
    /// nothing to undo and the history is unchanged.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn undo(&mut self) -> Result<Board, UndoError> {
        if self.snapshots.len() < 2 {
            return Err(UndoError::NothingToUndo);
        }
        self.snapshots.pop();
        let tail = self.snapshots[self.snapshots.len() - 1];
        debug!(remaining = self.snapshots.len(), "Snapshot popped");
        Ok(tail)
    }

    /// Side to move after the recorded moves, from the parity law.
    pub fn side_to_move(&self) -> Side {
        if self.snapshots.len() % 2 == 0 {
            Side::X
        } else {
            Side::O
        }
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Latest snapshot.
    pub fn tail(&self) -> Option<&Board> {
        self.snapshots.last()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Forgets every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    /// Moves recovered by diffing consecutive snapshots.
    ///
    /// A snapshot that does not add exactly one mark to its predecessor is
    /// skipped.
    pub fn moves(&self) -> Vec<Move> {
        let start = Board::new();
        std::iter::once(&start)
            .chain(self.snapshots.iter())
            .zip(self.snapshots.iter())
            .filter_map(|(before, after)| single_placement(before, after))
            .collect()
    }
}

/// The one cell that went from empty to a mark between `before` and
/// `after`, or `None` if the boards differ in any other way.
pub(crate) fn single_placement(before: &Board, after: &Board) -> Option<Move> {
    let mut changed = before
        .cells()
        .iter()
        .zip(after.cells().iter())
        .enumerate()
        .filter(|(_, (b, a))| b != a);

    let (index, (b, a)) = changed.next()?;
    if changed.next().is_some() {
        return None;
    }
    match (b, a) {
        (Cell::Empty, Cell::Occupied(side)) => Some(Move::new(index, *side)),
        _ => None,
    }
}
