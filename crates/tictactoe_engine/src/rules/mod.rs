//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart
//! from the engine so the opponent search can reuse them on scratch boards.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, WinLine, check_winner, completed_lines, winning_line};
