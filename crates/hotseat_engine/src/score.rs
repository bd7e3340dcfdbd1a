//! Session score tally.

use super::{GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Wins per player and draws, kept for the lifetime of an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wins recorded for `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Draws recorded.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total completed games.
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Counts a finished game. In-progress statuses are ignored.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }

    /// Zeroes every counter.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
