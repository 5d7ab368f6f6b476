//! Uniform random play.

use super::Strategy;
use crate::types::{Board, Side};
use rand::RngCore;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Picks uniformly among the empty cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    #[instrument(skip(self, board, rng))]
    fn select(&self, board: &Board, side: Side, rng: &mut dyn RngCore) -> Option<usize> {
        let empty: Vec<usize> = board.empty_cells().collect();
        let choice = empty.choose(rng).copied();
        debug!(?choice, candidates = empty.len(), "Random move");
        choice
    }

    fn name(&self) -> &'static str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_picks_only_empty_cells() {
        let board: Board = "XOXOX.O.X".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let pick = RandomStrategy.select(&board, Side::O, &mut rng);
            assert!(matches!(pick, Some(5) | Some(7)));
        }
    }

    #[test]
    fn test_full_board_yields_none() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(RandomStrategy.select(&board, Side::O, &mut rng), None);
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::new();
        let a = RandomStrategy.select(&board, Side::X, &mut StdRng::seed_from_u64(99));
        let b = RandomStrategy.select(&board, Side::X, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }
}
