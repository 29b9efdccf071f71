//! Tests for the computer opponent playing through the engine.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_engine::{
    Board, Difficulty, Engine, EngineSettings, GameMode, Phase, Player, Position, best_move_for,
};

fn vs_computer(difficulty: Difficulty, first_player: Player) -> Engine {
    Engine::new(EngineSettings::new(
        GameMode::VsComputer,
        difficulty,
        first_player,
    ))
}

/// Plays every X strategy against the engine's O and returns the outcomes.
fn explore(engine: Engine, rng: &mut StdRng, results: &mut [usize; 3]) {
    let mut engine = engine;
    if engine.state().awaiting_computer() {
        engine.play_computer_move(rng).expect("computer move");
    }

    if let Some(outcome) = engine.state().outcome() {
        match outcome.winner() {
            Some(Player::X) => results[0] += 1,
            Some(Player::O) => results[1] += 1,
            None => results[2] += 1,
        }
        return;
    }

    assert_eq!(engine.state().phase(), Phase::AwaitingHuman);
    for pos in engine.state().board().empty_positions() {
        let mut next = engine.clone();
        next.submit_move(pos.to_index()).expect("empty cell");
        explore(next, rng, results);
    }
}

#[test]
fn test_hard_never_loses_when_x_opens() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut results = [0; 3];
    explore(vs_computer(Difficulty::Hard, Player::X), &mut rng, &mut results);

    assert_eq!(results[0], 0, "X won {} games", results[0]);
    assert!(results[1] > 0);
    assert!(results[2] > 0);
}

#[test]
fn test_hard_never_loses_when_computer_opens() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut results = [0; 3];
    explore(vs_computer(Difficulty::Hard, Player::O), &mut rng, &mut results);

    assert_eq!(results[0], 0, "X won {} games", results[0]);
}

#[test]
fn test_corner_opening_gets_center_reply() {
    let mut engine = vs_computer(Difficulty::Hard, Player::X);
    let mut rng = StdRng::seed_from_u64(0);

    engine.submit_move(0).expect("legal move");
    engine.play_computer_move(&mut rng).expect("computer move");

    let last = engine.state().history().last().expect("computer moved");
    assert_eq!(last.player, Player::O);
    assert_eq!(last.position, Position::Center);
}

#[test]
fn test_hint_matches_search_for_each_side() {
    let board = Board::parse("X_O _X_ ___").expect("valid board");
    // O must block the diagonal at 8.
    assert_eq!(best_move_for(&board, Player::O), Some(Position::BottomRight));

    let mut engine = Engine::new(EngineSettings::default());
    for index in [0, 2, 4] {
        engine.submit_move(index).expect("legal move");
    }
    assert_eq!(engine.state().board(), &board);
    assert_eq!(engine.hint(), Some(Position::BottomRight));
}

#[test]
fn test_weaker_tiers_only_play_legal_moves() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium] {
        let mut rng = StdRng::seed_from_u64(11);
        let mut engine = vs_computer(difficulty, Player::O);

        for _ in 0..50 {
            while !engine.state().is_terminal() {
                if engine.state().awaiting_computer() {
                    engine.play_computer_move(&mut rng).expect("computer move");
                } else {
                    let pos = engine.state().board().empty_positions()[0];
                    engine.submit_move(pos.to_index()).expect("legal move");
                }
            }
            engine.restart();
        }

        assert_eq!(*engine.scoreboard().total_games(), 50);
    }
}
