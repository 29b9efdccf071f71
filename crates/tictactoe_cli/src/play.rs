//! Interactive terminal game loop.
//!
//! The loop owns the engine. Computer turns wait out the thinking delay on
//! a tokio timer before asking the engine for its move.

use anyhow::Result;
use rand::Rng;
use tictactoe_engine::{AUTO_RESTART_DELAY, Engine, GameEvent, Phase, Player, Position};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};

const HELP: &str = "Commands: 1-9 or a cell name (center) place a mark, \
                    u undo, h hint, s score, n new game, q quit";

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Cell(usize),
    Undo,
    Hint,
    Score,
    NewGame,
    Quit,
    Help,
}

impl Input {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "u" | "undo" => Some(Self::Undo),
            "h" | "hint" => Some(Self::Hint),
            "s" | "score" => Some(Self::Score),
            "n" | "new" => Some(Self::NewGame),
            "q" | "quit" | "exit" => Some(Self::Quit),
            "?" | "help" => Some(Self::Help),
            other => match other.parse::<usize>() {
                Ok(n @ 1..=9) => Some(Self::Cell(n - 1)),
                Ok(_) => None,
                Err(_) => {
                    Position::from_label_or_number(other).map(|pos| Self::Cell(pos.to_index()))
                }
            },
        }
    }
}

/// Runs games until the player quits or stdin closes.
#[instrument(skip_all, fields(mode = %engine.settings().mode()))]
pub async fn run<R: Rng>(mut engine: Engine, rng: &mut R) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let show_hints = *engine.settings().show_hints();
    let auto_restart = *engine.settings().auto_restart();

    println!("{HELP}");
    render(&engine);

    loop {
        match engine.state().phase() {
            Phase::AwaitingComputer => {
                println!("Computer is thinking...");
                tokio::time::sleep(engine.thinking_delay()).await;
                let events = engine.play_computer_move(rng)?;
                report(&events);
                render(&engine);
                continue;
            }
            Phase::Finished(_) if auto_restart => {
                println!("Next game in {} seconds.", AUTO_RESTART_DELAY.as_secs());
                tokio::time::sleep(AUTO_RESTART_DELAY).await;
                report(&engine.restart());
                render(&engine);
                continue;
            }
            Phase::Finished(_) => println!("n for a new game, q to quit"),
            Phase::AwaitingHuman => {
                if show_hints {
                    if let Some(pos) = engine.hint() {
                        println!("Hint: cell {} ({})", pos.to_index() + 1, pos);
                    }
                }
                println!("{} to move", engine.state().current_player());
            }
        }

        let Some(line) = lines.next_line().await? else {
            debug!("stdin closed");
            break;
        };

        match Input::parse(&line) {
            Some(Input::Cell(index)) => match engine.submit_move(index) {
                Ok(events) => {
                    report(&events);
                    render(&engine);
                }
                Err(reason) => println!("{reason}"),
            },
            Some(Input::Undo) => match engine.undo() {
                Ok(_) => render(&engine),
                Err(reason) => println!("{reason}"),
            },
            Some(Input::Hint) => match engine.hint() {
                Some(pos) => println!("Try cell {} ({})", pos.to_index() + 1, pos),
                None => println!("No hint available"),
            },
            Some(Input::Score) => print_score(&engine),
            Some(Input::NewGame) => {
                report(&engine.restart());
                render(&engine);
            }
            Some(Input::Quit) => break,
            Some(Input::Help) => println!("{HELP}"),
            None => println!("Unrecognized input '{}'. {HELP}", line.trim()),
        }
    }

    print_score(&engine);
    info!(games = *engine.scoreboard().total_games(), "Session ended");
    Ok(())
}

fn render(engine: &Engine) {
    println!("\n{}\n", engine.state().board().display());
}

/// Prints the events a UI would react to; cell changes show up in the board.
fn report(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::GameOver { outcome } => println!("{outcome}"),
            GameEvent::CellFilled { .. }
            | GameEvent::CellCleared { .. }
            | GameEvent::TurnChanged { .. } => debug!(%event),
        }
    }
}

fn print_score(engine: &Engine) {
    let board = engine.scoreboard();
    println!(
        "Games: {}  X: {}  O: {}  Draws: {}",
        board.total_games(),
        board.wins(Player::X),
        board.wins(Player::O),
        board.draws()
    );
}
