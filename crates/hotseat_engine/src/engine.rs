//! Hotseat game engine: board, turn order, outcome and session tally.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules::{WinLine, is_full, winning_line};
use super::score::ScoreTally;
use super::types::{Board, GameStatus, Player};
use super::view::{GameView, MoveOutcome};
use tracing::{debug, info, instrument};

/// Tic-tac-toe engine for two players sharing one device.
///
/// Moves are applied one at a time through [`Engine::apply_move`] (or its
/// strict sibling [`Engine::try_apply_move`]). Once a game is won or drawn
/// the engine refuses further moves until [`Engine::restart_game`] or
/// [`Engine::reset_scores`] is called. The score tally survives restarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    board: Board,
    to_move: Player,
    status: GameStatus,
    winning_line: Option<WinLine>,
    history: Vec<Move>,
    score: ScoreTally,
}

impl Engine {
    /// Creates an engine with an empty board, X to move and a zero tally.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            winning_line: None,
            history: Vec::new(),
            score: ScoreTally::new(),
        }
    }

    /// Returns a reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player to move, or the player who made the final move once terminal.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether the current game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Session score tally.
    pub fn score(&self) -> &ScoreTally {
        &self.score
    }

    /// Completed line of the current game, if it was won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    /// Moves played in the current game, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Positions that would accept a move right now.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// Applies a move at a board index (0-8).
    ///
    /// Out-of-range indices, occupied squares and moves after the game has
    /// ended are ignored and return `None` with no state change.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, index: usize) -> Option<MoveOutcome> {
        match self.try_apply_move(index) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                debug!(error = %e, "Ignoring move");
                None
            }
        }
    }

    /// Applies a move at a board index (0-8), reporting why it was refused.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfRange`] if `index` is not 0-8.
    /// - [`MoveError::GameOver`] if the game is already won or drawn.
    /// - [`MoveError::SquareOccupied`] if the square holds a mark.
    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.place(pos)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game is already won or drawn.
    /// - [`MoveError::SquareOccupied`] if the square holds a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.to_move;
        if !self.board.mark(pos, player) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.history.push(Move::new(player, pos));

        if let Some(line) = winning_line(&self.board, player) {
            self.finish(GameStatus::Won(player));
            self.winning_line = Some(line);
            info!(%player, line = ?line.indices(), "Game won");
        } else if is_full(&self.board) {
            self.finish(GameStatus::Draw);
            info!("Game drawn");
        } else {
            self.to_move = player.opponent();
            debug!(next = %self.to_move, "Turn passes");
        }

        Ok(MoveOutcome {
            player,
            position: pos,
            status: self.status,
            winning_line: self.winning_line,
        })
    }

    /// Clears the board for a new game. The score tally is kept.
    #[instrument(skip(self))]
    pub fn restart_game(&mut self) {
        debug!(moves = self.history.len(), "Restarting game");
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.history.clear();
    }

    /// Zeroes the score tally and restarts the game.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        info!(games = self.score.games_played(), "Resetting scores");
        self.score.reset();
        self.restart_game();
    }

    /// Snapshot of everything a presentation layer draws.
    pub fn view(&self) -> GameView {
        GameView {
            cells: *self.board.squares(),
            to_move: self.to_move,
            status: self.status,
            score: self.score,
            winning_line: self.winning_line,
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.score.record(status);
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn play(engine: &mut Engine, moves: &[usize]) {
        for &index in moves {
            engine.apply_move(index);
        }
    }

    #[test]
    fn test_initial_state() {
        let engine = Engine::new();
        assert_eq!(engine.to_move(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.valid_moves().len(), 9);
        assert_eq!(engine.score().games_played(), 0);
    }

    #[test]
    fn test_first_move_flips_turn() {
        let mut engine = Engine::new();
        let outcome = engine.apply_move(4).unwrap();

        assert_eq!(outcome.player, Player::X);
        assert_eq!(outcome.position, Position::Center);
        assert_eq!(outcome.status, GameStatus::InProgress);
        assert_eq!(outcome.winning_line, None);
        assert_eq!(engine.to_move(), Player::O);
        assert_eq!(engine.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_top_row_win() {
        let mut engine = Engine::new();
        play(&mut engine, &[0, 3, 1, 4]);
        let outcome = engine.apply_move(2).unwrap();

        assert_eq!(outcome.status, GameStatus::Won(Player::X));
        assert_eq!(outcome.winning_line.map(|l| l.indices()), Some([0, 1, 2]));
        assert_eq!(engine.score().wins(Player::X), 1);
        assert_eq!(engine.to_move(), Player::X);
        assert!(engine.valid_moves().is_empty());
    }

    #[test]
    fn test_strict_errors() {
        let mut engine = Engine::new();
        assert_eq!(engine.try_apply_move(9), Err(MoveError::OutOfRange(9)));

        engine.try_apply_move(4).unwrap();
        assert_eq!(
            engine.try_apply_move(4),
            Err(MoveError::SquareOccupied(Position::Center))
        );

        play(&mut engine, &[0, 3, 1, 5]);
        assert_eq!(engine.status(), GameStatus::Won(Player::X));
        assert_eq!(engine.try_apply_move(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_history_records_moves() {
        let mut engine = Engine::new();
        play(&mut engine, &[4, 4, 0]);
        let history: Vec<_> = engine.history().iter().map(|m| m.to_string()).collect();
        assert_eq!(history, vec!["X -> Center", "O -> Top-left"]);
    }

    #[test]
    fn test_view_matches_state() {
        let mut engine = Engine::new();
        play(&mut engine, &[6, 0, 4, 1, 2]);
        let view = engine.view();

        assert_eq!(view.status, GameStatus::Won(Player::X));
        assert!(view.is_highlighted(Position::Center));
        assert!(!view.is_highlighted(Position::TopLeft));
        assert_eq!(view.cell(Position::TopLeft), Square::Occupied(Player::O));
        assert_eq!(view.score.wins(Player::X), 1);
    }

    #[test]
    fn test_restart_keeps_score() {
        let mut engine = Engine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.restart_game();

        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.to_move(), Player::X);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.winning_line(), None);
        assert!(engine.history().is_empty());
        assert_eq!(engine.score().wins(Player::X), 1);
    }

    #[test]
    fn test_reset_scores_restarts() {
        let mut engine = Engine::new();
        play(&mut engine, &[0, 3, 1, 4, 2]);
        engine.restart_game();
        play(&mut engine, &[4]);
        engine.reset_scores();

        assert_eq!(engine.score(), &ScoreTally::default());
        assert_eq!(engine, Engine::new());
    }
}
