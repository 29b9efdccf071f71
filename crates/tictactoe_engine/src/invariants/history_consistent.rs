//! History consistency invariant: history matches the occupied squares.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every occupied square has exactly one history entry.
///
/// History length equals the number of occupied squares, and each entry's
/// square holds the mark of the player who made it.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let occupied_count = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        occupied_count == state.history().len()
            && state
                .history()
                .iter()
                .all(|m| state.board().get(m.position) == Square::Occupied(m.player))
    }

    fn description() -> &'static str {
        "History entries match the occupied squares"
    }
}
