//! Tic-tac-toe game engine with undo and a computer opponent.
//!
//! # Architecture
//!
//! - **Board**: nine cells, row-major, with validity queries
//! - **Rules**: pure win/draw evaluation over a board snapshot
//! - **History**: snapshot stack behind undo, with the turn parity law
//! - **Session**: applies moves, passes turns, keeps score
//! - **Strategy**: random, win-or-block and minimax move selection
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Difficulty, GameMode, GameOutcome, Session, Side};
//!
//! let mut session = Session::with_seed(GameMode::VsAi(Difficulty::Hard), 7);
//! session.apply_move(0)?;
//! let reply = session.apply_ai_move()?.expect("computer replies");
//! assert_eq!(reply.applied().index, 4);
//! assert_eq!(session.current_side(), Side::X);
//! assert_eq!(session.outcome(), GameOutcome::InProgress);
//! # Ok::<(), strictly_tictactoe::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod contracts;
mod history;
mod invariants;
mod outcome;
mod position;
mod rules;
mod session;
mod strategy;
mod types;

pub use action::{Move, MoveError, UndoError};
pub use config::{ConfigError, SessionConfig};
pub use contracts::{CellIsEmpty, Contract, GameIsActive, MoveContract};
pub use history::MoveHistory;
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SessionInvariants, SingleCellDeltaInvariant,
};
pub use outcome::GameOutcome;
pub use position::Position;
pub use rules::{WIN_LINES, WinLine, check_winner, evaluate, is_draw};
pub use session::{AI_SIDE, GameMode, MoveOutcome, ScoreTally, Session, TurnState};
pub use strategy::{
    Difficulty, HeuristicStrategy, OptimalStrategy, RandomStrategy, Strategy, completing_move,
};
pub use types::{Board, BoardError, CELL_COUNT, Cell, ParseBoardError, Side};
