//! Hotseat tic-tac-toe engine.
//!
//! A self-contained game engine for two humans sharing one device. The
//! [`Engine`] owns the board, the turn order, win/draw detection and the
//! session score tally. Presentation layers drive it through three
//! operations and render the [`GameView`] it hands back.
//!
//! # Example
//!
//! ```
//! use hotseat_engine::{Engine, GameStatus, Player};
//!
//! let mut engine = Engine::new();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.apply_move(index);
//! }
//!
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert_eq!(engine.score().wins(Player::X), 1);
//!
//! engine.restart_game();
//! assert_eq!(engine.status(), GameStatus::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod engine;
mod position;
mod rules;
mod score;
mod types;
mod view;

// Crate-level exports - Game types
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Positions and moves
pub use action::{Move, MoveError};
pub use position::Position;

// Crate-level exports - Rules
pub use rules::{WinLine, WIN_LINES, is_full, winning_line};

// Crate-level exports - Engine
pub use engine::Engine;
pub use score::ScoreTally;
pub use view::{GameView, MoveOutcome};
