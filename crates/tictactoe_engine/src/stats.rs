//! Running tally of finished games.

use super::Player;
use super::phases::Outcome;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{info, instrument};

/// How many finished games the scoreboard remembers individually.
pub const RECENT_GAMES: usize = 10;

/// One finished game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameRecord {
    /// When the game ended.
    finished_at: DateTime<Utc>,
    /// Winner, or `None` for a draw.
    winner: Option<Player>,
    /// Number of moves played.
    moves: usize,
}

/// Totals plus the most recent games, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    total_games: u32,
    x_wins: u32,
    o_wins: u32,
    draws: u32,
    recent: VecDeque<GameRecord>,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome, moves: usize) {
        match outcome.winner() {
            Some(Player::X) => self.x_wins += 1,
            Some(Player::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        self.total_games += 1;

        self.recent.push_front(GameRecord {
            finished_at: Utc::now(),
            winner: outcome.winner(),
            moves,
        });
        self.recent.truncate(RECENT_GAMES);

        info!(
            total = self.total_games,
            x_wins = self.x_wins,
            o_wins = self.o_wins,
            draws = self.draws,
            "Game recorded"
        );
    }

    /// Wins for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Clears every tally.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::WIN_LINES;

    fn x_win() -> Outcome {
        Outcome::Winner {
            player: Player::X,
            line: WIN_LINES[0],
        }
    }

    #[test]
    fn test_record_tallies() {
        let mut board = Scoreboard::new();
        board.record(x_win(), 5);
        board.record(Outcome::Draw, 9);

        assert_eq!(*board.total_games(), 2);
        assert_eq!(board.wins(Player::X), 1);
        assert_eq!(board.wins(Player::O), 0);
        assert_eq!(*board.draws(), 1);

        let newest = board.recent().front().expect("record");
        assert_eq!(*newest.winner(), None);
        assert_eq!(*newest.moves(), 9);
    }

    #[test]
    fn test_recent_is_capped() {
        let mut board = Scoreboard::new();
        for moves in 0..15 {
            board.record(Outcome::Draw, moves);
        }
        assert_eq!(board.recent().len(), RECENT_GAMES);
        assert_eq!(*board.recent()[0].moves(), 14);
        assert_eq!(*board.total_games(), 15);
    }

    #[test]
    fn test_reset() {
        let mut board = Scoreboard::new();
        board.record(x_win(), 5);
        board.reset();
        assert_eq!(board, Scoreboard::new());
    }

    #[test]
    fn test_serializes_to_json() {
        let mut board = Scoreboard::new();
        board.record(x_win(), 7);
        let json = serde_json::to_value(&board).expect("serialize");
        assert_eq!(json["x_wins"], 1);
        assert_eq!(json["recent"][0]["winner"], "X");
    }
}
