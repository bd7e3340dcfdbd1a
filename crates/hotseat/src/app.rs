//! Application state: translates key presses into engine operations.

use crate::config::HotseatConfig;
use crate::input::{Action, action_for, move_cursor};
use crate::status::status_text;
use crossterm::event::KeyCode;
use hotseat_engine::{Engine, GameStatus, GameView, Position};
use tracing::{debug, info, instrument};

/// Main application state.
#[derive(Debug)]
pub struct App {
    engine: Engine,
    config: HotseatConfig,
    cursor: Position,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh engine.
    pub fn new(config: HotseatConfig) -> Self {
        Self {
            engine: Engine::new(),
            config,
            cursor: Position::Center,
            notice: None,
            should_quit: false,
        }
    }

    /// Snapshot of the game for rendering.
    pub fn view(&self) -> GameView {
        self.engine.view()
    }

    /// Active configuration.
    pub fn config(&self) -> &HotseatConfig {
        &self.config
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Status line for the current game.
    pub fn status_message(&self) -> String {
        status_text(&self.engine.view(), &self.config)
    }

    /// Feedback about the last key press, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match action_for(key) {
            Some(action) => self.dispatch(action),
            None => debug!("Unbound key"),
        }
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Select(pos) => {
                self.cursor = pos;
                self.select(pos);
            }
            Action::SelectCursor => self.select(self.cursor),
            Action::MoveCursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Action::Restart => {
                self.engine.restart_game();
                self.notice = None;
            }
            Action::ResetScores => {
                self.engine.reset_scores();
                self.notice = Some("Scores reset.".to_string());
            }
            Action::Quit => {
                info!("Quit requested");
                self.should_quit = true;
            }
        }
    }

    fn select(&mut self, pos: Position) {
        match self.engine.place(pos) {
            Ok(outcome) => {
                let name = self.config.player_name(outcome.player);
                self.notice = Some(match outcome.status {
                    GameStatus::InProgress => format!("{} played {}.", name, pos),
                    _ => "Press 'r' for a new game.".to_string(),
                });
            }
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.notice = Some(format!("{}.", e));
            }
        }
    }
}
