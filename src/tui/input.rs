//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;

/// Moves the grid cursor based on arrow keys.
///
/// The grid is laid out row-major with `columns` cells per row; the last
/// row may be short. Moves that would leave the grid keep the cursor put.
pub fn move_cursor(cursor: usize, key: KeyCode, columns: usize, len: usize) -> usize {
    if len == 0 || columns == 0 {
        return 0;
    }

    let target = match key {
        KeyCode::Left if cursor % columns > 0 => cursor - 1,
        KeyCode::Right if cursor % columns + 1 < columns => cursor + 1,
        KeyCode::Up if cursor >= columns => cursor - columns,
        KeyCode::Down => cursor + columns,
        _ => cursor,
    };

    if target < len {
        target
    } else {
        cursor.min(len - 1)
    }
}
