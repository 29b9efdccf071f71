//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and are recorded in the game history.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move request was ignored.
///
/// Rejections never change game state. Callers driving a UI are free to
/// drop them; they exist so tests and logs can tell the cases apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejected {
    /// The index does not name a cell.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// The computer's move is pending.
    #[display("Waiting for the computer to move")]
    AwaitingComputer,

    /// It is a human's turn, so there is no computer move to play.
    #[display("It's a human player's turn")]
    NotComputersTurn,

    /// Undo has nothing to take back.
    #[display("No move to undo")]
    NothingToUndo,
}

impl std::error::Error for MoveRejected {}
