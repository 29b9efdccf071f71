//! Alternating turn invariant: players alternate from the opener onward.

use super::super::GameState;
use super::Invariant;

/// Invariant: players alternate turns.
///
/// The first history entry belongs to the opening player, consecutive
/// entries never share a player, and while the game is live the player on
/// move is the one who did not move last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            return state.current_player() == state.first_player();
        };

        if first.player != state.first_player() {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        if state.is_terminal() {
            return true;
        }

        history
            .last()
            .is_some_and(|last| last.player.opponent() == state.current_player())
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the opening player"
    }
}
