//! Status line text for a game view.

use crate::config::HotseatConfig;
use hotseat_engine::{GameStatus, GameView};

/// Announces the turn or the outcome, e.g. "Player X's turn".
pub fn status_text(view: &GameView, config: &HotseatConfig) -> String {
    match view.status {
        GameStatus::InProgress => {
            format!("Player {}'s turn", config.player_name(view.to_move))
        }
        GameStatus::Won(player) => format!("Player {} wins!", config.player_name(player)),
        GameStatus::Draw => "It's a draw!".to_string(),
    }
}

/// One-line scoreboard, e.g. "X: 2  O: 1  Draws: 0".
pub fn score_text(view: &GameView, config: &HotseatConfig) -> String {
    use hotseat_engine::Player;

    format!(
        "{}: {}  {}: {}  Draws: {}",
        config.player_name(Player::X),
        view.score.wins(Player::X),
        config.player_name(Player::O),
        view.score.wins(Player::O),
        view.score.draws()
    )
}
