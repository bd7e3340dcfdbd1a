//! Headless replay of a move list.

use crate::config::HotseatConfig;
use crate::status::{score_text, status_text};
use derive_more::{Display, Error};
use hotseat_engine::{Engine, Position};
use tracing::{debug, instrument};

/// A move token that names no board position.
#[derive(Debug, Clone, Display, Error)]
#[display("Replay error: {} at {}:{}", message, file, line)]
pub struct ReplayError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ReplayError {
    /// Creates a new replay error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Parses a comma-separated list of board indices (0-8) or position labels.
///
/// Indices above 8 are kept so the engine can ignore them; anything that
/// is neither a number nor a label is an error.
#[instrument]
pub fn parse_moves(moves: &str) -> Result<Vec<usize>, ReplayError> {
    moves
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if let Ok(index) = token.parse::<usize>() {
                return Ok(index);
            }
            Position::from_label_or_number(token)
                .map(Position::to_index)
                .ok_or_else(|| ReplayError::new(format!("Unknown position '{}'", token)))
        })
        .collect()
}

/// Plays `moves` on a fresh engine and renders the final board, status and
/// score as text.
#[instrument(skip(config))]
pub fn replay(moves: &str, config: &HotseatConfig) -> Result<String, ReplayError> {
    let mut engine = Engine::new();
    let mut report = String::new();

    for index in parse_moves(moves)? {
        if engine.apply_move(index).is_none() {
            debug!(index, "Move ignored");
            report.push_str(&format!("Ignored move {}\n", index));
        }
    }

    let view = engine.view();
    report.push_str(&engine.board().display());
    report.push_str("\n\n");
    report.push_str(&status_text(&view, config));
    report.push('\n');
    report.push_str(&score_text(&view, config));
    if let Some(line) = view.winning_line {
        report.push_str(&format!("\nWinning line: {:?}", line.indices()));
    }
    Ok(report)
}
