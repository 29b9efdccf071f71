//! Command-line interface for tictactoe.

use clap::{Args, Parser, Subcommand};
use tictactoe_engine::{Difficulty, GameMode, Player, ThinkingTime};

/// Tic-tac-toe - two players or against an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Game options shared by the commands that start games.
///
/// Flags override values read from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct GameOptions {
    /// Settings file (TOML)
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// two-players or vs-computer
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// easy, medium or hard
    #[arg(short, long)]
    pub difficulty: Option<Difficulty>,

    /// Who opens the game (X or O)
    #[arg(short, long)]
    pub first: Option<Player>,

    /// Seed for the computer's random choices
    #[arg(long)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Shared game options
        #[command(flatten)]
        game: GameOptions,

        /// Computer thinking time: fast, normal or slow
        #[arg(short, long)]
        thinking: Option<ThinkingTime>,

        /// Start the next game automatically
        #[arg(long)]
        auto_restart: bool,

        /// Show the best move before every human turn
        #[arg(long)]
        hints: bool,
    },

    /// Print the best move for a position
    Hint {
        /// Nine cells, row by row: X, O, or _ for empty (e.g. "X_O_X____")
        #[arg(short, long)]
        board: String,

        /// Side to move; inferred from the mark counts when omitted
        #[arg(short, long)]
        player: Option<Player>,
    },

    /// Let a random X play the computer repeatedly and print the tally
    Selfplay {
        /// Shared game options
        #[command(flatten)]
        game: GameOptions,

        /// Number of games to play
        #[arg(short = 'n', long, default_value = "100")]
        games: u32,
    },
}
