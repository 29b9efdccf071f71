//! Tic-tac-toe game engine: move validation, turn state machine, undo, hints.

use super::action::{Move, MoveRejected};
use super::contracts::{Contract, MoveContract, check_invariants};
use super::events::GameEvent;
use super::opponent::{best_move_for, choose_move};
use super::phases::{Outcome, Phase};
use super::rules::{is_full, winning_line};
use super::settings::{Difficulty, EngineSettings, GameMode};
use super::stats::Scoreboard;
use super::{GameState, Player, Position, Square};
use rand::Rng;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// A single game table owned by the UI layer.
///
/// The engine never sleeps or schedules anything. When the computer is on
/// move the state sits in [`Phase::AwaitingComputer`]; the caller waits
/// [`Engine::thinking_delay`] and then calls [`Engine::play_computer_move`].
#[derive(Debug, Clone)]
pub struct Engine {
    settings: EngineSettings,
    state: GameState,
    scoreboard: Scoreboard,
}

impl Engine {
    /// Creates an engine and starts a game from `settings`.
    #[instrument]
    pub fn new(settings: EngineSettings) -> Self {
        let state = GameState::new(
            *settings.mode(),
            *settings.difficulty(),
            *settings.first_player(),
        );
        Self {
            settings,
            state,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the active settings.
    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Returns the results of finished games.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Clears the scoreboard.
    pub fn reset_stats(&mut self) {
        self.scoreboard.reset();
    }

    /// How long the UI should pause before playing the computer's move.
    pub fn thinking_delay(&self) -> Duration {
        self.settings.thinking_time().delay()
    }

    /// Starts a fresh game, replacing the current one.
    ///
    /// The chosen mode, difficulty and first player become the defaults for
    /// [`Engine::restart`].
    #[instrument(skip(self))]
    pub fn new_game(
        &mut self,
        mode: GameMode,
        difficulty: Difficulty,
        first_player: Player,
    ) -> Vec<GameEvent> {
        self.settings = self
            .settings
            .clone()
            .with_mode(mode)
            .with_difficulty(difficulty)
            .with_first_player(first_player);
        self.state = GameState::new(mode, difficulty, first_player);

        info!(%mode, %difficulty, %first_player, phase = ?self.state.phase(), "New game");
        vec![GameEvent::TurnChanged {
            player: first_player,
        }]
    }

    /// Starts a fresh game with the current settings.
    pub fn restart(&mut self) -> Vec<GameEvent> {
        self.new_game(
            *self.settings.mode(),
            *self.settings.difficulty(),
            *self.settings.first_player(),
        )
    }

    /// Plays the human on move at `index` (0-8).
    ///
    /// Illegal requests leave the game untouched and return the reason.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn submit_move(&mut self, index: usize) -> Result<Vec<GameEvent>, MoveRejected> {
        let pos = MoveContract::pre(&self.state, &index).inspect_err(|reason| {
            debug!(%reason, "Move ignored");
        })?;
        Ok(self.apply(pos))
    }

    /// Plays the computer's pending move, chosen at the configured difficulty.
    #[instrument(skip(self, rng))]
    pub fn play_computer_move<R: Rng>(
        &mut self,
        rng: &mut R,
    ) -> Result<Vec<GameEvent>, MoveRejected> {
        match self.state.phase() {
            Phase::AwaitingComputer => {}
            Phase::AwaitingHuman => return Err(MoveRejected::NotComputersTurn),
            Phase::Finished(_) => return Err(MoveRejected::GameOver),
        }

        let player = self.state.current_player();
        let Some(pos) = choose_move(self.state.board(), player, self.state.difficulty(), rng)
        else {
            warn!("Computer on move with a full board");
            return Err(MoveRejected::GameOver);
        };

        debug!(%pos, difficulty = %self.state.difficulty(), "Computer chose move");
        Ok(self.apply(pos))
    }

    /// The optimal move for the human on move, without playing it.
    ///
    /// `None` once the game is over or while the computer is on move.
    #[instrument(skip(self))]
    pub fn hint(&self) -> Option<Position> {
        if self.state.phase() != Phase::AwaitingHuman {
            return None;
        }
        best_move_for(self.state.board(), self.state.current_player())
    }

    /// Takes back the last move, or against the computer the last full round.
    ///
    /// Against the computer, moves are popped until a human move has been
    /// removed, so the human is back at their previous decision. A history
    /// holding only the computer's opening cannot be undone.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<Vec<GameEvent>, MoveRejected> {
        match self.state.phase() {
            Phase::AwaitingHuman => {}
            Phase::AwaitingComputer => return Err(MoveRejected::AwaitingComputer),
            Phase::Finished(_) => return Err(MoveRejected::GameOver),
        }

        let mode = self.state.mode();
        let has_human_move = self
            .state
            .history()
            .iter()
            .any(|m| !mode.is_computer(m.player));
        if !has_human_move {
            debug!("Nothing to undo");
            return Err(MoveRejected::NothingToUndo);
        }

        let mut events = Vec::new();
        while let Some(last) = self.state.history.pop() {
            self.state.board.set(last.position, Square::Empty);
            self.state.current_player = last.player;
            events.push(GameEvent::CellCleared {
                position: last.position,
            });
            if !mode.is_computer(last.player) {
                break;
            }
        }

        let player = self.state.current_player();
        self.state.phase = GameState::phase_for(mode, player);
        events.push(GameEvent::TurnChanged { player });

        debug!(cleared = events.len() - 1, %player, "Undo");
        check_invariants(&self.state);
        Ok(events)
    }

    /// Writes the current player's mark at `pos` and advances the state machine.
    ///
    /// Callers have already checked that `pos` is empty and the game is live.
    fn apply(&mut self, pos: Position) -> Vec<GameEvent> {
        let player = self.state.current_player();
        self.state.board.set(pos, Square::Occupied(player));
        self.state.history.push(Move::new(player, pos));

        let mut events = vec![GameEvent::CellFilled {
            position: pos,
            player,
        }];

        if let Some((winner, line)) = winning_line(self.state.board()) {
            events.push(self.finish(Outcome::Winner {
                player: winner,
                line,
            }));
        } else if is_full(self.state.board()) {
            events.push(self.finish(Outcome::Draw));
        } else {
            let next = player.opponent();
            self.state.current_player = next;
            self.state.phase = GameState::phase_for(self.state.mode(), next);
            events.push(GameEvent::TurnChanged { player: next });
        }

        debug!(%player, %pos, phase = ?self.state.phase(), "Move applied");
        check_invariants(&self.state);
        events
    }

    fn finish(&mut self, outcome: Outcome) -> GameEvent {
        self.state.phase = Phase::Finished(outcome);
        self.scoreboard.record(outcome, self.state.history().len());
        info!(%outcome, moves = self.state.history().len(), "Game over");
        GameEvent::GameOver { outcome }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}
