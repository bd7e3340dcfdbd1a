//! Keyboard input: cursor movement and key-to-action mapping.

use crossterm::event::KeyCode;
use hotseat_engine::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Place a mark at the given position.
    Select(Position),
    /// Place a mark under the cursor.
    SelectCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Start a new game, keeping scores.
    Restart,
    /// Zero the scores and start a new game.
    ResetScores,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action. Unbound keys map to `None`.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Position::from_index(index).map(Action::Select)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(KeyCode::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(KeyCode::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(KeyCode::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(KeyCode::Right)),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('R') | KeyCode::Char('s') => Some(Action::ResetScores),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys. The cursor stops at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}
