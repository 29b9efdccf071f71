//! Computer opponent: exhaustive minimax plus difficulty tiers.
//!
//! Scores are from O's point of view. A finished position found `depth`
//! plies below the root candidate scores `10 - depth` for an O win,
//! `depth - 10` for an X win and `0` for a draw, so the search prefers
//! quick wins and slow losses. The board is mutated in place and restored
//! after each probe.

use super::rules::{is_full, winning_line};
use super::settings::Difficulty;
use super::{Board, Player, Position, Square};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Score of a win found at depth zero.
const WIN_SCORE: i32 = 10;

/// Scores a finished position, or `None` if play continues.
fn terminal_score(board: &Board, depth: i32) -> Option<i32> {
    match winning_line(board) {
        Some((Player::O, _)) => Some(WIN_SCORE - depth),
        Some((Player::X, _)) => Some(depth - WIN_SCORE),
        None if is_full(board) => Some(0),
        None => None,
    }
}

/// Value of `board` with `to_move` on move, searched to the end of the game.
fn minimax(board: &mut Board, depth: i32, to_move: Player) -> i32 {
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    let maximizing = to_move == Player::O;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for pos in Position::ALL {
        if !board.is_empty(pos) {
            continue;
        }
        board.set(pos, Square::Occupied(to_move));
        let score = minimax(board, depth + 1, to_move.opponent());
        board.set(pos, Square::Empty);

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Scores every empty cell for `player`, in ascending index order.
///
/// Higher is better for O, lower is better for X.
pub fn score_moves(board: &Board, player: Player) -> Vec<(Position, i32)> {
    let mut scratch = board.clone();
    let mut scores = Vec::new();

    for pos in Position::ALL {
        if !scratch.is_empty(pos) {
            continue;
        }
        scratch.set(pos, Square::Occupied(player));
        let score = minimax(&mut scratch, 0, player.opponent());
        scratch.set(pos, Square::Empty);
        scores.push((pos, score));
    }

    scores
}

/// The optimal move for `player`, or `None` on a full board.
///
/// Ties go to the lowest cell index: a later candidate only replaces the
/// current best when it scores strictly better.
#[instrument(skip(board))]
pub fn best_move_for(board: &Board, player: Player) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;

    for (pos, score) in score_moves(board, player) {
        let better = match best {
            None => true,
            Some((_, best_score)) => match player {
                Player::O => score > best_score,
                Player::X => score < best_score,
            },
        };
        if better {
            best = Some((pos, score));
        }
    }

    debug!(?best, "Minimax search complete");
    best.map(|(pos, _)| pos)
}

/// A uniformly random empty cell, or `None` on a full board.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}

/// Picks a move for `player` according to `difficulty`.
///
/// Returns `None` when the board has no empty cell.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng>(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => {
            if rng.gen_bool(0.5) {
                best_move_for(board, player)
            } else {
                random_move(board, rng)
            }
        }
        Difficulty::Hard => best_move_for(board, player),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn board(s: &str) -> Board {
        Board::parse(s).expect("valid board")
    }

    #[test]
    fn test_corner_opening_answered_in_center() {
        assert_eq!(
            best_move_for(&board("X__ ___ ___"), Player::O),
            Some(Position::Center)
        );
    }

    #[test]
    fn test_takes_immediate_win_over_block() {
        // O can win on 5 or must otherwise block X on 2.
        let b = board("XX_ OO_ X__");
        assert_eq!(best_move_for(&b, Player::O), Some(Position::MiddleRight));
    }

    #[test]
    fn test_blocks_opponent_win() {
        let b = board("XX_ _O_ ___");
        assert_eq!(best_move_for(&b, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_x_side_search_finds_win() {
        let b = board("XX_ OO_ ___");
        assert_eq!(best_move_for(&b, Player::X), Some(Position::TopRight));
    }

    #[test]
    fn test_prefers_faster_win() {
        // 8 completes the diagonal now; every other cell wins later or not at all.
        let b = board("OX_ XO_ X__");
        let scores = score_moves(&b, Player::O);
        let immediate = scores
            .iter()
            .find(|(pos, _)| *pos == Position::BottomRight)
            .map(|(_, s)| *s);
        assert_eq!(immediate, Some(WIN_SCORE));
        assert_eq!(best_move_for(&b, Player::O), Some(Position::BottomRight));
    }

    #[test]
    fn test_empty_board_tie_resolves_to_lowest_index() {
        // Every opening draws under perfect play, so the first cell wins the tie.
        assert_eq!(best_move_for(&Board::new(), Player::O), Some(Position::TopLeft));
        assert_eq!(best_move_for(&Board::new(), Player::X), Some(Position::TopLeft));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOX OXX OXO");
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(best_move_for(&b, Player::O), None);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            assert_eq!(choose_move(&b, Player::O, difficulty, &mut rng), None);
        }
    }

    #[test]
    fn test_easy_moves_are_always_empty_cells() {
        let b = board("XO_ _X_ O__");
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let pos = choose_move(&b, Player::O, Difficulty::Easy, &mut rng).expect("move");
            assert!(b.is_empty(pos));
        }
    }

    #[test]
    fn test_medium_mixes_random_and_optimal() {
        let b = Board::parse("X________").expect("valid board");
        let mut rng = StdRng::seed_from_u64(3);
        let picks: Vec<_> = (0..200)
            .filter_map(|_| choose_move(&b, Player::O, Difficulty::Medium, &mut rng))
            .collect();
        assert!(picks.iter().all(|p| b.is_empty(*p)));
        assert!(picks.iter().any(|p| *p == Position::Center));
        assert!(picks.iter().any(|p| *p != Position::Center));
    }
}
