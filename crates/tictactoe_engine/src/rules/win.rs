//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};

/// Three positions forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Returns true if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the player holding all three squares, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.player()
        } else {
            None
        }
    }
}

impl std::fmt::Display for WinLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.indices();
        write!(f, "[{}, {}, {}]", a, b, c)
    }
}

/// The eight winning lines in scan order: rows, columns, diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line in scan order with its owner.
pub fn winning_line(board: &Board) -> Option<(Player, WinLine)> {
    WIN_LINES
        .iter()
        .find_map(|line| line.owner(board).map(|player| (player, *line)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Every completed line on the board, in scan order.
///
/// A single move can complete two lines at once (e.g. a row and a column
/// through the same corner), so this may hold more than one entry.
pub fn completed_lines(board: &Board) -> Vec<(Player, WinLine)> {
    WIN_LINES
        .iter()
        .filter_map(|line| line.owner(board).map(|player| (player, *line)))
        .collect()
}
