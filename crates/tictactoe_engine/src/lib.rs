//! Tic-tac-toe engine - board state machine and minimax opponent
//!
//! The engine owns one 3x3 game at a time. A UI layer submits cell indices,
//! the engine validates and applies them, detects wins and draws, and tells
//! the UI what changed through [`GameEvent`]s. Against the computer the
//! engine parks in [`Phase::AwaitingComputer`] until the UI asks it to play.
//!
//! # Architecture
//!
//! - **Rules**: win lines, win and draw detection
//! - **Contracts**: move preconditions and post-move invariants
//! - **Opponent**: exhaustive minimax and the easy/medium/hard tiers
//! - **Engine**: turn state machine, undo, hints, scoreboard
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use tictactoe_engine::{Difficulty, Engine, EngineSettings, GameMode, Player, Position};
//!
//! let settings = EngineSettings::new(GameMode::VsComputer, Difficulty::Hard, Player::X);
//! let mut engine = Engine::new(settings);
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//!
//! engine.submit_move(0).expect("legal move");
//! engine.play_computer_move(&mut rng).expect("computer move");
//! assert!(!engine.state().board().is_empty(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod engine;
mod events;
mod invariants;
mod opponent;
mod phases;
mod position;
pub mod rules;
mod settings;
mod state;
mod stats;
mod types;

// Crate-level exports - Core types
pub use action::{Move, MoveRejected};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use state::GameState;
pub use types::{Board, Player, Square};

// Crate-level exports - Engine
pub use engine::Engine;
pub use events::GameEvent;

// Crate-level exports - Validation
pub use contracts::{Contract, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, SingleWinnerInvariant, TicTacToeInvariants,
};

// Crate-level exports - Opponent
pub use opponent::{best_move_for, choose_move, random_move, score_moves};

// Crate-level exports - Settings and statistics
pub use settings::{
    AUTO_RESTART_DELAY, ConfigError, Difficulty, EngineSettings, GameMode, ThinkingTime,
};
pub use stats::{GameRecord, RECENT_GAMES, Scoreboard};
