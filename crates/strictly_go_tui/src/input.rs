//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_go::{BoardSize, Coordinate};

/// Moves cursor based on arrow keys (or `hjkl`), stopping at the board edge.
pub fn move_cursor(cursor: Coordinate, key: KeyCode, size: BoardSize) -> Coordinate {
    let last = size.get() - 1;
    let Coordinate { x, y } = cursor;

    match key {
        KeyCode::Left | KeyCode::Char('h') => Coordinate::new(x.saturating_sub(1), y),
        KeyCode::Right | KeyCode::Char('l') => Coordinate::new((x + 1).min(last), y),
        KeyCode::Up | KeyCode::Char('k') => Coordinate::new(x, y.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => Coordinate::new(x, (y + 1).min(last)),
        KeyCode::Home => Coordinate::new(0, y),
        KeyCode::End => Coordinate::new(last, y),
        // No change for other keys
        _ => cursor,
    }
}
