//! Notifications the engine hands back to the UI layer.

use super::phases::Outcome;
use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// Observable side effect of an engine call.
///
/// Every accepted mutation returns its events in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A mark was placed.
    CellFilled {
        /// Cell that changed.
        position: Position,
        /// Mark written there.
        player: Player,
    },
    /// Undo emptied a cell.
    CellCleared {
        /// Cell that changed.
        position: Position,
    },
    /// A new player is on move.
    TurnChanged {
        /// Player now on move.
        player: Player,
    },
    /// The game ended.
    GameOver {
        /// Winner and line, or draw.
        outcome: Outcome,
    },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::CellFilled { position, player } => {
                write!(f, "{} plays {}", player, position)
            }
            GameEvent::CellCleared { position } => write!(f, "{} cleared", position),
            GameEvent::TurnChanged { player } => write!(f, "{} to move", player),
            GameEvent::GameOver { outcome } => write!(f, "Game over: {}", outcome),
        }
    }
}
