//! Tictactoe - terminal front end
//!
//! Owns one engine instance and drives it from stdin.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod play;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, GameOptions};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{
    Board, Difficulty, Engine, EngineSettings, GameMode, Player, best_move_for, random_move,
    score_moves,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play {
            game,
            thinking,
            auto_restart,
            hints,
        } => {
            let mut settings = load_settings(&game)?;
            if let Some(thinking) = thinking {
                settings = settings.with_thinking_time(thinking);
            }
            if auto_restart {
                settings = settings.with_auto_restart(true);
            }
            if hints {
                settings = settings.with_show_hints(true);
            }
            let mut rng = make_rng(game.seed);
            play::run(Engine::new(settings), &mut rng).await
        }
        Command::Hint { board, player } => run_hint(&board, player),
        Command::Selfplay { game, games } => run_selfplay(&game, games),
    }
}

/// Reads the settings file, if any, then applies flag overrides.
#[instrument(skip(options), fields(config = ?options.config))]
fn load_settings(options: &GameOptions) -> Result<EngineSettings> {
    let mut settings = match &options.config {
        Some(path) => EngineSettings::from_file(path)?,
        None => EngineSettings::default(),
    };

    if let Some(mode) = options.mode {
        settings = settings.with_mode(mode);
    }
    if let Some(difficulty) = options.difficulty {
        settings = settings.with_difficulty(difficulty);
    }
    if let Some(first) = options.first {
        settings = settings.with_first_player(first);
    }

    info!(?settings, "Settings resolved");
    Ok(settings)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Prints the optimal move and every candidate's score.
#[instrument]
fn run_hint(board: &str, player: Option<Player>) -> Result<()> {
    let board = Board::parse(board).context("Board must be nine cells of X, O or _")?;

    let player = match player {
        Some(player) => player,
        None if board.count(Player::X) > board.count(Player::O) => Player::O,
        None => Player::X,
    };

    println!("{}\n", board.display());
    let Some(best) = best_move_for(&board, player) else {
        bail!("The board is full");
    };

    for (pos, score) in score_moves(&board, player) {
        println!("  cell {} ({}): {}", pos.to_index() + 1, pos, score);
    }
    println!(
        "\nBest move for {}: cell {} ({})",
        player,
        best.to_index() + 1,
        best
    );
    Ok(())
}

/// Plays `games` games of a random X against the configured computer.
#[instrument(skip(options))]
fn run_selfplay(options: &GameOptions, games: u32) -> Result<()> {
    let settings = load_settings(options)?
        .with_mode(GameMode::VsComputer)
        .with_auto_restart(true);
    let difficulty: Difficulty = *settings.difficulty();
    let mut engine = Engine::new(settings);
    let mut rng = make_rng(options.seed);

    for _ in 0..games {
        while !engine.state().is_terminal() {
            if engine.state().awaiting_computer() {
                engine.play_computer_move(&mut rng)?;
            } else {
                let pos = random_move(engine.state().board(), &mut rng)
                    .context("Human on move with a full board")?;
                engine.submit_move(pos.to_index())?;
            }
        }
        engine.restart();
    }

    let board = engine.scoreboard();
    println!("Random X vs {} O over {} games", difficulty, board.total_games());
    println!("  X wins: {}", board.x_wins());
    println!("  O wins: {}", board.o_wins());
    println!("  Draws:  {}", board.draws());
    Ok(())
}
