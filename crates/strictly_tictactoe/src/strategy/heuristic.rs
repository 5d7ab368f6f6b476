//! Win-or-block play.

use super::{RandomStrategy, Strategy};
use crate::rules::WIN_LINES;
use crate::types::{Board, Cell, Side};
use rand::RngCore;
use tracing::{debug, instrument};

/// Completes its own line if it can, otherwise blocks the opponent's,
/// otherwise plays randomly.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicStrategy;

impl Strategy for HeuristicStrategy {
    #[instrument(skip(self, board, rng))]
    fn select(&self, board: &Board, side: Side, rng: &mut dyn RngCore) -> Option<usize> {
        if let Some(index) = completing_move(board, side) {
            debug!(index, "Completing own line");
            return Some(index);
        }
        if let Some(index) = completing_move(board, side.opponent()) {
            debug!(index, "Blocking opponent line");
            return Some(index);
        }
        RandomStrategy.select(board, side, rng)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// First empty cell that would give `side` a complete line.
///
/// Lines are scanned in win-line order. Within a line the gap is tried at
/// the third, then the second, then the first cell.
pub fn completing_move(board: &Board, side: Side) -> Option<usize> {
    let cells = board.cells();
    let mark = Cell::Occupied(side);

    WIN_LINES.iter().find_map(|line| {
        let [a, b, c] = line.cells();
        [(a, b, c), (a, c, b), (b, c, a)]
            .into_iter()
            .find(|&(p, q, gap)| cells[p] == mark && cells[q] == mark && cells[gap] == Cell::Empty)
            .map(|(_, _, gap)| gap)
    })
}
