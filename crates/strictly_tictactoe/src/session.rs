//! Game session: the move applier, turn controller and undo stack.

use super::action::{Move, MoveError, UndoError};
use super::config::SessionConfig;
use super::contracts::{Contract, MoveContract, assert_invariants};
use super::history::MoveHistory;
use super::outcome::GameOutcome;
use super::rules::evaluate;
use super::strategy::Difficulty;
use super::types::{Board, Side};
use derive_getters::Getters;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Side played by the computer in [`GameMode::VsAi`].
pub const AI_SIDE: Side = Side::O;

/// Who plays against whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayer,
    /// A human plays X against the computer playing O.
    VsAi(Difficulty),
}

impl GameMode {
    /// Difficulty of the computer opponent, if there is one.
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            GameMode::TwoPlayer => None,
            GameMode::VsAi(difficulty) => Some(*difficulty),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameMode::TwoPlayer => write!(f, "two players"),
            GameMode::VsAi(difficulty) => write!(f, "vs computer ({})", difficulty),
        }
    }
}

/// Side to move and whether moves are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TurnState {
    side: Side,
    active: bool,
}

impl TurnState {
    /// Fresh game: X to move, active.
    pub fn new() -> Self {
        Self {
            side: Side::X,
            active: true,
        }
    }

    /// Side to move.
    pub fn side(&self) -> Side {
        self.side
    }

    /// False once the game reached a win or draw.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}

/// Wins per side. Survives resets; undo does not revert it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
}

impl ScoreTally {
    /// Counts a win for `side`.
    pub fn record_win(&mut self, side: Side) {
        match side {
            Side::X => self.x_wins += 1,
            Side::O => self.o_wins += 1,
        }
    }

    /// Wins recorded for `side`.
    pub fn wins(&self, side: Side) -> u32 {
        match side {
            Side::X => self.x_wins,
            Side::O => self.o_wins,
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "X {} - {} O", self.x_wins, self.o_wins)
    }
}

/// What an accepted move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, derive_new::new)]
pub struct MoveOutcome {
    /// The move that was applied.
    applied: Move,
    /// Board after the move.
    board: Board,
    /// Side to move next (unchanged when the game ended).
    current_side: Side,
    /// Evaluation of the board after the move.
    outcome: GameOutcome,
}

/// One game of tic-tac-toe with its history and score.
///
/// A session owns all of its state; independent sessions share nothing.
#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    board: Board,
    turn: TurnState,
    outcome: GameOutcome,
    history: MoveHistory,
    score: ScoreTally,
    rng: StdRng,
}

impl Session {
    /// Creates a session whose random strategies are seeded from the OS.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }

    /// Creates a session with a fixed RNG seed, for reproducible games.
    #[instrument]
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    /// Creates a session from startup configuration.
    #[instrument(skip(config), fields(mode = %config.mode()))]
    pub fn from_config(config: &SessionConfig) -> Self {
        match config.seed() {
            Some(seed) => Self::with_seed(*config.mode(), *seed),
            None => Self::new(*config.mode()),
        }
    }

    fn with_rng(mode: GameMode, rng: StdRng) -> Self {
        info!(%mode, "Creating new session");
        Self {
            mode,
            board: Board::new(),
            turn: TurnState::new(),
            outcome: GameOutcome::InProgress,
            history: MoveHistory::new(),
            score: ScoreTally::default(),
            rng,
        }
    }

    /// Rebuilds a session by playing `indices` from a fresh start.
    ///
    /// # Errors
    ///
    /// Returns the first rejected move.
    #[instrument(skip(indices))]
    pub fn replay(
        mode: GameMode,
        indices: impl IntoIterator<Item = usize>,
    ) -> Result<Self, MoveError> {
        let mut session = Self::new(mode);
        for index in indices {
            session.apply_move(index)?;
        }
        Ok(session)
    }

    /// Switches to `mode` and starts a new game. The score is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self, mode: GameMode) {
        self.mode = mode;
        self.restart();
    }

    /// Starts a new game in the current mode. The score is kept.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn = TurnState::new();
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
        info!("Session reset");
    }

    /// Places the current side's mark at `index`.
    ///
    /// On success the snapshot is recorded, the board is evaluated and
    /// either the game ends (a win is added to the score) or the turn passes
    /// to the other side.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameNotActive`], [`MoveError::IndexOutOfRange`] or
    /// [`MoveError::CellOccupied`]. A rejected move changes nothing.
    #[instrument(skip(self), fields(side = ?self.turn.side))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if let Err(e) = MoveContract::pre(self, &index) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        let side = self.turn.side;
        self.board.place(index, side);
        self.history.record(self.board.snapshot());
        self.outcome = evaluate(&self.board);

        match self.outcome {
            GameOutcome::Win(winner, line) => {
                self.turn.active = false;
                self.score.record_win(winner);
                info!(%winner, %line, score = %self.score, "Game won");
            }
            GameOutcome::Draw => {
                self.turn.active = false;
                info!("Game drawn");
            }
            GameOutcome::InProgress => {
                // In VsAi mode this hands the turn between human and AI_SIDE.
                self.turn.side = side.opponent();
                debug!(next = ?self.turn.side, "Turn passed");
            }
        }

        assert_invariants(self);

        Ok(MoveOutcome::new(
            Move::new(index, side),
            self.board,
            self.turn.side,
            self.outcome,
        ))
    }

    /// Asks the active difficulty's strategy for a move for the side to move.
    ///
    /// Returns `None` in two-player mode, when the game is over, or when no
    /// empty cell remains. The move is not applied.
    #[instrument(skip(self))]
    pub fn request_ai_move(&mut self) -> Option<usize> {
        let difficulty = self.mode.difficulty()?;
        if !self.turn.active {
            return None;
        }
        let strategy = difficulty.strategy();
        let choice = strategy.select(&self.board, self.turn.side, &mut self.rng);
        debug!(strategy = strategy.name(), ?choice, "AI selected move");
        choice
    }

    /// Lets the computer play if it is its turn.
    ///
    /// Returns `Ok(None)` in two-player mode, when it is the human's turn or
    /// when the game is over.
    ///
    /// # Errors
    ///
    /// Propagates [`Session::apply_move`] errors, which a strategy picking an
    /// empty cell never triggers.
    #[instrument(skip(self))]
    pub fn apply_ai_move(&mut self) -> Result<Option<MoveOutcome>, MoveError> {
        if self.turn.side != AI_SIDE {
            return Ok(None);
        }
        match self.request_ai_move() {
            Some(index) => self.apply_move(index).map(Some),
            None => Ok(None),
        }
    }

    /// Takes back the latest move.
    ///
    /// The board returns to the previous snapshot, the game becomes active
    /// again and the side to move follows the history's parity law. The
    /// score is left alone, so undoing a winning move keeps the win counted.
    ///
    /// # Errors
    ///
    /// [`UndoError::NothingToUndo`] with fewer than two recorded moves.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn undo(&mut self) -> Result<(), UndoError> {
        let board = self.history.undo().inspect_err(|e| {
            warn!(error = %e, "Undo rejected");
        })?;

        self.board = board;
        self.outcome = GameOutcome::InProgress;
        self.turn = TurnState {
            side: self.history.side_to_move(),
            active: true,
        };
        info!(side = ?self.turn.side, moves = self.history.len(), "Move undone");

        assert_invariants(self);
        Ok(())
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move.
    pub fn current_side(&self) -> Side {
        self.turn.side
    }

    /// Turn state.
    pub fn turn(&self) -> TurnState {
        self.turn
    }

    /// False once the game is won or drawn.
    pub fn is_active(&self) -> bool {
        self.turn.active
    }

    /// Evaluation of the current board.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Number of moves on the board.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Win tally across every game this session has played.
    pub fn score(&self) -> ScoreTally {
        self.score
    }

    /// Current mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Snapshot history.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// True when it is the computer's turn in an active vs-AI game.
    pub fn is_ai_turn(&self) -> bool {
        self.mode.difficulty().is_some() && self.turn.active && self.turn.side == AI_SIDE
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
