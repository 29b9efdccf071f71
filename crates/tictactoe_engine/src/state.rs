//! Snapshot of a game in progress or finished.

use super::action::Move;
use super::phases::{Outcome, Phase};
use super::settings::{Difficulty, GameMode};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Complete game state.
///
/// Terminal flag, winner and winning line are all read off [`Phase`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) first_player: Player,
    pub(crate) mode: GameMode,
    pub(crate) difficulty: Difficulty,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates an empty board with `first_player` on move.
    pub fn new(mode: GameMode, difficulty: Difficulty, first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            first_player,
            mode,
            difficulty,
            phase: Self::phase_for(mode, first_player),
            history: Vec::new(),
        }
    }

    /// The phase a live game is in when `player` is on move.
    pub(crate) fn phase_for(mode: GameMode, player: Player) -> Phase {
        if mode.is_computer(player) {
            Phase::AwaitingComputer
        } else {
            Phase::AwaitingHuman
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player on move. After the game ends, the last mover.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the player who opened the game.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the computer's difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the turn state machine phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Returns the outcome, once finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.phase.outcome()
    }

    /// Returns true while the computer's move is pending.
    pub fn awaiting_computer(&self) -> bool {
        self.phase == Phase::AwaitingComputer
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GameMode::default(), Difficulty::default(), Player::X)
    }
}
