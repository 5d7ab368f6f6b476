//! Exhaustive minimax search.

use super::Strategy;
use crate::outcome::GameOutcome;
use crate::rules::evaluate;
use crate::types::{Board, Side};
use rand::RngCore;
use tracing::{debug, instrument};

/// Plays perfectly by searching every line of play to the end.
///
/// A finished board scores +1 if the searching side won, -1 if its
/// opponent won and 0 for a draw. The root picks the highest-scoring cell;
/// ties go to the lowest index. No pruning: the board has at most 9! leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimalStrategy;

impl OptimalStrategy {
    /// Minimax score of every legal move for `side`, in index order.
    pub fn score_moves(board: &Board, side: Side) -> Vec<(usize, i8)> {
        score_root(board, side).0
    }
}

impl Strategy for OptimalStrategy {
    #[instrument(skip(self, board, _rng))]
    fn select(&self, board: &Board, side: Side, _rng: &mut dyn RngCore) -> Option<usize> {
        let (scores, nodes) = score_root(board, side);
        // Strict comparison keeps the first (lowest) index on ties.
        let best = scores
            .into_iter()
            .fold(None, |best: Option<(usize, i8)>, (index, score)| match best {
                Some((_, best_score)) if score <= best_score => best,
                _ => Some((index, score)),
            });

        debug!(?best, nodes, "Minimax search complete");
        best.map(|(index, _)| index)
    }

    fn name(&self) -> &'static str {
        "minimax"
    }
}

/// Scores each empty cell for `side`, returning the scores and the nodes visited.
fn score_root(board: &Board, side: Side) -> (Vec<(usize, i8)>, u64) {
    let mut nodes = 0u64;
    let scores = board
        .empty_cells()
        .map(|index| {
            let mut child = board.snapshot();
            child.place(index, side);
            (index, minimax(&child, side, side.opponent(), &mut nodes))
        })
        .collect();
    (scores, nodes)
}

/// Scores `board` from `maximizer`'s point of view with `to_move` to play.
fn minimax(board: &Board, maximizer: Side, to_move: Side, nodes: &mut u64) -> i8 {
    *nodes += 1;

    match evaluate(board) {
        GameOutcome::Win(winner, _) if winner == maximizer => return 1,
        GameOutcome::Win(_, _) => return -1,
        GameOutcome::Draw => return 0,
        GameOutcome::InProgress => {}
    }

    let scores = board.empty_cells().map(|index| {
        let mut child = board.snapshot();
        child.place(index, to_move);
        minimax(&child, maximizer, to_move.opponent(), nodes)
    });

    let best = if to_move == maximizer {
        scores.max()
    } else {
        scores.min()
    };
    // An in-progress board always has an empty cell.
    best.unwrap_or(0)
}
