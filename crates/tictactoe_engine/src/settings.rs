//! User-configurable game settings.

use super::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Who controls player O.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    TwoPlayers,
    /// A human plays X against the computer as O.
    VsComputer,
}

impl GameMode {
    /// Returns true if `player` is driven by the computer in this mode.
    pub fn is_computer(self, player: Player) -> bool {
        self == GameMode::VsComputer && player == Player::O
    }
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
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Coin flip between random and optimal.
    #[default]
    Medium,
    /// Always optimal.
    Hard,
}

/// Cosmetic pause before the computer moves.
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
pub enum ThinkingTime {
    /// 300 ms.
    Fast,
    /// 600 ms.
    #[default]
    Normal,
    /// 1 s.
    Slow,
}

impl ThinkingTime {
    /// The delay to wait before playing the computer's move.
    pub fn delay(self) -> Duration {
        match self {
            ThinkingTime::Fast => Duration::from_millis(300),
            ThinkingTime::Normal => Duration::from_millis(600),
            ThinkingTime::Slow => Duration::from_millis(1000),
        }
    }
}

/// Delay before a finished game restarts when `auto_restart` is on.
pub const AUTO_RESTART_DELAY: Duration = Duration::from_secs(3);

/// Settings for a game session.
///
/// Loaded from TOML; any missing key takes its default.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Two humans or human against computer.
    mode: GameMode,
    /// Computer strength.
    difficulty: Difficulty,
    /// Who moves first in a new game.
    first_player: Player,
    /// Pause before the computer moves.
    thinking_time: ThinkingTime,
    /// Start a new game automatically after one ends.
    auto_restart: bool,
    /// Show the optimal move for the human on every turn.
    show_hints: bool,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            first_player: Player::X,
            thinking_time: ThinkingTime::default(),
            auto_restart: false,
            show_hints: false,
        }
    }
}

impl EngineSettings {
    /// Creates settings for the given game shape, other fields default.
    #[instrument]
    pub fn new(mode: GameMode, difficulty: Difficulty, first_player: Player) -> Self {
        Self {
            mode,
            difficulty,
            first_player,
            ..Self::default()
        }
    }

    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(mode = %settings.mode, difficulty = %settings.difficulty, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Sets the game mode.
    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    /// Sets the difficulty.
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Sets who moves first.
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    /// Sets the thinking time.
    pub fn with_thinking_time(mut self, thinking_time: ThinkingTime) -> Self {
        self.thinking_time = thinking_time;
        self
    }

    /// Sets auto restart.
    pub fn with_auto_restart(mut self, auto_restart: bool) -> Self {
        self.auto_restart = auto_restart;
        self
    }

    /// Sets hint display.
    pub fn with_show_hints(mut self, show_hints: bool) -> Self {
        self.show_hints = show_hints;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
