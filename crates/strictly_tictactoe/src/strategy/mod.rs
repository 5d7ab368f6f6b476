//! Computer opponent strategies.
//!
//! Every strategy answers the same question: given a board and the side to
//! move, which empty cell should be played? Only [`RandomStrategy`] (and the
//! fallback inside [`HeuristicStrategy`]) draws from the RNG; the others are
//! pure functions of the board and side.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::{HeuristicStrategy, completing_move};
pub use minimax::OptimalStrategy;
pub use random::RandomStrategy;

use super::types::{Board, Side};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Move selection policy.
pub trait Strategy: std::fmt::Debug {
    /// Picks an empty cell for `side`, or `None` when the board is full.
    fn select(&self, board: &Board, side: Side, rng: &mut dyn RngCore) -> Option<usize>;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Strength of the computer opponent.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random empty cell.
    #[default]
    Easy,
    /// Win if possible, else block, else random.
    Medium,
    /// Full-depth minimax; never loses.
    Hard,
}

impl Difficulty {
    /// The strategy backing this difficulty.
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            Difficulty::Easy => &RandomStrategy,
            Difficulty::Medium => &HeuristicStrategy,
            Difficulty::Hard => &OptimalStrategy,
        }
    }
}
