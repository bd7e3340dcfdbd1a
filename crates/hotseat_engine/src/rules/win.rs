//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions whose joint occupation by one player wins the game.
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

    /// Whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }
}

/// Every winning line, in the order they are checked.
pub const WIN_LINES: [WinLine; 8] = {
    use Position::*;
    [
        // Rows
        WinLine([TopLeft, TopCenter, TopRight]),
        WinLine([MiddleLeft, Center, MiddleRight]),
        WinLine([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        WinLine([TopLeft, MiddleLeft, BottomLeft]),
        WinLine([TopCenter, Center, BottomCenter]),
        WinLine([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        WinLine([TopLeft, Center, BottomRight]),
        WinLine([TopRight, Center, BottomLeft]),
    ]
};

/// Returns the first line in [`WIN_LINES`] held entirely by `player`.
#[instrument(skip(board))]
pub fn winning_line(board: &Board, player: Player) -> Option<WinLine> {
    let mark = Square::Occupied(player);
    WIN_LINES
        .into_iter()
        .find(|line| line.0.iter().all(|&pos| board.get(pos) == mark))
}
