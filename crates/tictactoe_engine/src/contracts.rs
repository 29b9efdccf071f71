//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveRejected;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::phases::Phase;
use super::{GameState, Position};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// What a satisfied precondition hands to the transition.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveRejected>;

    /// Checks postconditions after applying the action.
    fn post(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the index names one of the nine cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Converts the index, rejecting anything outside 0-8.
    pub fn check(index: usize) -> Result<Position, MoveRejected> {
        Position::from_index(index).ok_or(MoveRejected::OutOfRange(index))
    }
}

/// Precondition: a human is on move in a live game.
pub struct HumansTurn;

impl HumansTurn {
    /// Rejects moves after the game ended or while the computer is pending.
    pub fn check(state: &GameState) -> Result<(), MoveRejected> {
        match state.phase() {
            Phase::AwaitingHuman => Ok(()),
            Phase::AwaitingComputer => Err(MoveRejected::AwaitingComputer),
            Phase::Finished(_) => Err(MoveRejected::GameOver),
        }
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves onto an occupied square.
    pub fn check(state: &GameState, pos: Position) -> Result<(), MoveRejected> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveRejected::Occupied(pos))
        }
    }
}

/// Contract for human move requests.
///
/// Preconditions:
/// - Index is in range
/// - Game is live and a human is on move
/// - Square is empty
///
/// Postconditions:
/// - History matches the board
/// - Players still alternate
/// - At most one player owns a line
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    type Checked = Position;

    #[instrument(skip(state))]
    fn pre(state: &GameState, index: &usize) -> Result<Position, MoveRejected> {
        let pos = IndexInRange::check(*index)?;
        HumansTurn::check(state)?;
        SquareIsEmpty::check(state, pos)?;
        Ok(pos)
    }

    fn post(state: &GameState) -> Result<(), Vec<InvariantViolation>> {
        TicTacToeInvariants::check_all(state)
    }
}

/// Logs any invariant the state breaks. Never panics: a live game keeps running.
pub fn check_invariants(state: &GameState) {
    if let Err(violations) = MoveContract::post(state) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Game invariant violated");
    }
}
