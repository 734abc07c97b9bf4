//! Keyboard mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_tictactoe::Position;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|row| (row, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|col| (row, col)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(row, col)| Position::from_row_col(row, col))
        .unwrap_or(cursor)
}

/// Something the player asked for with a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    /// Leave the game.
    Quit,
    /// Play at a specific cell (digit keys).
    PlayCell(Position),
    /// Play at the board cursor, or jump to the selected move.
    Activate,
    /// Arrow key, interpreted by the focused pane.
    Navigate(KeyCode),
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Flip the move-list order.
    ToggleSort,
    /// Jump one move back.
    StepBack,
    /// Jump one move forward.
    StepForward,
    /// Unbound key.
    Ignore,
}

/// Maps a key press to an intent.
///
/// Digits 1-9 address cells row by row, 1 being the top-left.
pub fn key_intent(key: KeyEvent) -> KeyIntent {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyIntent::Quit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyIntent::Quit,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| Position::from_index(digit as usize - 1))
            .map_or(KeyIntent::Ignore, KeyIntent::PlayCell),
        KeyCode::Enter | KeyCode::Char(' ') => KeyIntent::Activate,
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            KeyIntent::Navigate(key.code)
        }
        KeyCode::Tab | KeyCode::BackTab => KeyIntent::SwitchFocus,
        KeyCode::Char('s') | KeyCode::Char('S') => KeyIntent::ToggleSort,
        KeyCode::Char('[') => KeyIntent::StepBack,
        KeyCode::Char(']') => KeyIntent::StepForward,
        _ => KeyIntent::Ignore,
    }
}
