//! Tests for the engine's move, undo and turn handling.

use tictactoe_engine::{
    Board, Difficulty, Engine, EngineSettings, GameEvent, GameMode, InvariantSet, MoveRejected,
    Outcome, Phase, Player, Position, Square, TicTacToeInvariants,
};

fn two_players() -> Engine {
    Engine::new(EngineSettings::default())
}

fn play(engine: &mut Engine, moves: &[usize]) {
    for &index in moves {
        engine.submit_move(index).expect("legal move");
    }
}

/// Visits every position reachable in a two-player game within `max_moves`.
fn for_each_reachable(engine: &Engine, max_moves: usize, visit: &mut impl FnMut(&Engine)) {
    visit(engine);
    if engine.state().is_terminal() || engine.state().history().len() >= max_moves {
        return;
    }
    for pos in engine.state().board().empty_positions() {
        let mut next = engine.clone();
        next.submit_move(pos.to_index()).expect("empty cell");
        for_each_reachable(&next, max_moves, visit);
    }
}

#[test]
fn test_center_opening_passes_turn() {
    let mut engine = two_players();
    engine.submit_move(4).expect("legal move");

    let state = engine.state();
    assert_eq!(state.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(state.current_player(), Player::O);
    assert!(!state.is_terminal());
}

#[test]
fn test_top_row_wins_for_x() {
    let mut engine = two_players();
    play(&mut engine, &[0, 3, 1, 4, 2]);

    assert_eq!(
        engine.state().board(),
        &Board::parse("XXX OO_ ___").expect("valid board")
    );
    let outcome = engine.state().outcome().expect("finished");
    assert_eq!(outcome.winner(), Some(Player::X));
    assert_eq!(outcome.line().map(|line| line.indices()), Some([0, 1, 2]));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = two_players();
    play(&mut engine, &[4, 0, 8, 2, 1, 7, 6, 3, 5]);

    assert_eq!(engine.state().outcome(), Some(Outcome::Draw));
    assert_eq!(engine.state().phase(), Phase::Finished(Outcome::Draw));
}

#[test]
fn test_double_line_reports_row_first() {
    let mut engine = two_players();
    // X: 1, 2, 3, 6 then 0 closes row 0 and column 0 together.
    play(&mut engine, &[1, 4, 2, 5, 3, 8, 6, 7]);
    assert!(!engine.state().is_terminal());

    engine.submit_move(0).expect("legal move");
    let outcome = engine.state().outcome().expect("finished");
    assert_eq!(outcome.line().map(|line| line.indices()), Some([0, 1, 2]));
}

#[test]
fn test_occupied_cell_rejection_is_idempotent() {
    let mut engine = two_players();
    play(&mut engine, &[4, 0]);
    let before = engine.state().clone();

    for _ in 0..5 {
        assert_eq!(
            engine.submit_move(4),
            Err(MoveRejected::Occupied(Position::Center))
        );
        assert_eq!(
            engine.submit_move(0),
            Err(MoveRejected::Occupied(Position::TopLeft))
        );
    }
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_move_then_undo_restores_state() {
    let mut checked = 0;
    for_each_reachable(&two_players(), 4, &mut |engine| {
        if engine.state().is_terminal() {
            return;
        }
        for pos in engine.state().board().empty_positions() {
            let mut probe = engine.clone();
            probe.submit_move(pos.to_index()).expect("empty cell");
            if probe.state().is_terminal() {
                continue;
            }
            probe.undo().expect("undo");

            assert_eq!(probe.state().board(), engine.state().board());
            assert_eq!(
                probe.state().current_player(),
                engine.state().current_player()
            );
            assert_eq!(
                probe.state().history().len(),
                engine.state().history().len()
            );
            checked += 1;
        }
    });
    assert!(checked > 1000);
}

#[test]
fn test_reachable_states_keep_invariants() {
    let mut positions = 0usize;
    let mut finished = 0usize;
    for_each_reachable(&two_players(), 9, &mut |engine| {
        positions += 1;
        if engine.state().is_terminal() {
            finished += 1;
        }
        if let Err(violations) = TicTacToeInvariants::check_all(engine.state()) {
            panic!(
                "violations {:?} on\n{}",
                violations,
                engine.state().board().display()
            );
        }
    });
    // Every distinct move sequence: 549,946 nodes, 255,168 finished games.
    assert_eq!(positions, 549_946);
    assert_eq!(finished, 255_168);
}

#[test]
fn test_turn_events_follow_each_move() {
    let mut engine = two_players();
    let events = engine.submit_move(0).expect("legal move");
    assert_eq!(events.last(), Some(&GameEvent::TurnChanged { player: Player::O }));

    let events = engine.undo().expect("undo");
    assert_eq!(
        events,
        vec![
            GameEvent::CellCleared {
                position: Position::TopLeft
            },
            GameEvent::TurnChanged { player: Player::X },
        ]
    );
}

#[test]
fn test_independent_engines_do_not_share_state() {
    let mut first = two_players();
    let second = Engine::new(EngineSettings::new(
        GameMode::VsComputer,
        Difficulty::Hard,
        Player::O,
    ));
    first.submit_move(4).expect("legal move");

    assert!(second.state().history().is_empty());
    assert!(second.state().awaiting_computer());
}
