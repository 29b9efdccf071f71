//! Turn state machine phases and game outcomes.

use super::rules::WinLine;
use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player completed a line. `line` is the first completed line in scan order.
    Winner {
        /// The winning player.
        player: Player,
        /// The line to highlight.
        line: WinLine,
    },
    /// Board filled with no line completed.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<WinLine> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, line } => write!(f, "Player {} wins on {}", player, line),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the turn state machine currently sits.
///
/// ```text
///  AwaitingHuman ──move──▶ AwaitingComputer ──computer move──▶ AwaitingHuman
///        │                        │
///        └────── win / draw ──────┴──────▶ Finished
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// A human is on move.
    AwaitingHuman,
    /// The computer is on move; human input is locked out.
    AwaitingComputer,
    /// The game ended.
    Finished(Outcome),
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Finished(_))
    }

    /// The outcome, once finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Phase::Finished(outcome) => Some(*outcome),
            _ => None,
        }
    }
}
