//! Renderable snapshots handed to presentation layers.

use super::{GameStatus, Player, Position, ScoreTally, Square, WinLine};
use serde::{Deserialize, Serialize};

/// Result of an accepted move.
///
/// Carries enough for a presentation layer to announce the outcome without
/// inspecting the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The player who just moved.
    pub player: Player,
    /// Where the mark was placed.
    pub position: Position,
    /// Game status after the move.
    pub status: GameStatus,
    /// The completed line, when the move won the game.
    pub winning_line: Option<WinLine>,
}

/// Everything needed to draw the game after any event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// Squares in row-major order.
    pub cells: [Square; 9],
    /// Player whose turn it is, or who made the final move once terminal.
    pub to_move: Player,
    /// Current game status.
    pub status: GameStatus,
    /// Session tally.
    pub score: ScoreTally,
    /// Line to highlight when the game was won.
    pub winning_line: Option<WinLine>,
}

impl GameView {
    /// Whether `pos` lies on the highlighted winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(pos))
    }

    /// Square at `pos`.
    pub fn cell(&self, pos: Position) -> Square {
        self.cells[pos.to_index()]
    }
}
