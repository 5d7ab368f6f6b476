//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P} action {Q}. Preconditions are always checked; postconditions run in
//! debug builds only.

use super::action::MoveError;
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::session::Session;
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks that the state after the action still satisfies every invariant.
    fn post(after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the game has not ended.
pub struct GameIsActive;

impl GameIsActive {
    /// Checks the precondition.
    #[instrument(skip(session))]
    pub fn check(session: &Session) -> Result<(), MoveError> {
        if session.is_active() {
            Ok(())
        } else {
            Err(MoveError::GameNotActive)
        }
    }
}

/// Precondition: the target cell exists and is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the precondition.
    #[instrument(skip(session))]
    pub fn check(index: usize, session: &Session) -> Result<(), MoveError> {
        if session.board().cell_at(index)?.side().is_some() {
            Err(MoveError::CellOccupied(index))
        } else {
            Ok(())
        }
    }
}

/// Contract for placing a mark.
///
/// Preconditions, in order:
/// - game is active
/// - index is on the board
/// - cell is empty
///
/// Postconditions: every [`SessionInvariants`] member holds.
pub struct MoveContract;

impl Contract<Session, usize> for MoveContract {
    fn pre(session: &Session, index: &usize) -> Result<(), MoveError> {
        GameIsActive::check(session)?;
        CellIsEmpty::check(*index, session)
    }

    fn post(after: &Session) -> Result<(), Vec<InvariantViolation>> {
        SessionInvariants::check_all(after)
    }
}

/// Checks all session invariants, panicking in debug builds on violation.
pub fn assert_invariants(session: &Session) {
    if cfg!(debug_assertions) {
        if let Err(violations) = MoveContract::post(session) {
            for v in &violations {
                warn!(invariant = %v.description, "Invariant violated");
            }
            panic!("Session invariants violated: {:?}", violations);
        }
    }
}
