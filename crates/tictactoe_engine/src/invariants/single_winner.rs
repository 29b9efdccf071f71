//! Single winner invariant: lines never belong to both players.

use super::super::GameState;
use super::super::rules::completed_lines;
use super::Invariant;

/// Invariant: at most one player has completed a line.
///
/// One move may complete two lines at once, but both then belong to the
/// same player and both pass through that move.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        let lines = completed_lines(state.board());
        let Some((owner, _)) = lines.first() else {
            return true;
        };

        let last = state.history().last().map(|m| m.position);
        lines
            .iter()
            .all(|(player, line)| player == owner && last.is_some_and(|pos| line.contains(pos)))
    }

    fn description() -> &'static str {
        "At most one player completes a line, through the last move"
    }
}
