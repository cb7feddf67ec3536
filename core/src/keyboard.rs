//! On-screen grid keyboard driven by directional buttons.
//!
//! The keyboard is a grid of rows; every cell is a `Key`, either a character
//! (with a lowercase and an uppercase form) or a control key (shift lock,
//! space). Rows may differ in length and in which control keys they carry,
//! so every cursor move is validated against the row it lands on.
//!
//! ## Navigation
//!
//! - Row moves keep the column when the target row has it. Otherwise the
//!   cursor snaps to the row's control key, or to its last key when the row
//!   has none.
//! - Column moves are accepted only inside the current row.
//! - Nothing wraps, and a move that would leave the grid is a no-op.
//! - A single move changes either the row or the column, never both.

use crate::text_buffer::TextBuffer;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single selectable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Character key with its lowercase and shift-lock forms
    Char { lower: char, upper: char },
    /// Toggles shift lock
    ShiftToggle,
    /// Inserts a space
    Space,
}

impl Key {
    /// Character key whose uppercase form is derived from `lower`.
    pub fn letter(lower: char) -> Self {
        let mut upper = lower.to_uppercase();
        let upper = match (upper.next(), upper.next()) {
            (Some(u), None) => u,
            _ => lower,
        };
        Key::Char { lower, upper }
    }

    pub fn is_control(&self) -> bool {
        !matches!(self, Key::Char { .. })
    }

    /// Character this key types, if any.
    pub fn resolve(&self, shift_lock: bool) -> Option<char> {
        match *self {
            Key::Char { upper, .. } if shift_lock => Some(upper),
            Key::Char { lower, .. } => Some(lower),
            Key::Space => Some(' '),
            Key::ShiftToggle => None,
        }
    }

    /// Label shown on the key face.
    pub fn label(&self, shift_lock: bool) -> String {
        match self {
            Key::Char { .. } => self.resolve(shift_lock).map(String::from).unwrap_or_default(),
            Key::ShiftToggle => "shift".to_string(),
            Key::Space => "space".to_string(),
        }
    }
}

/// An ordered row of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyRow {
    keys: Vec<Key>,
}

impl KeyRow {
    pub fn new(keys: Vec<Key>) -> Self {
        Self { keys }
    }

    /// Row of character keys built from parallel lowercase/uppercase tables.
    pub fn from_tables(lower: &str, upper: &str) -> Self {
        let keys = lower
            .chars()
            .zip(upper.chars())
            .map(|(lower, upper)| Key::Char { lower, upper })
            .collect();
        Self { keys }
    }

    /// Row of letter keys whose shifted forms are their uppercase letters.
    pub fn letters(lower: &str) -> Self {
        Self {
            keys: lower.chars().map(Key::letter).collect(),
        }
    }

    /// Place a control key before the row's other keys.
    pub fn with_leading(mut self, key: Key) -> Self {
        self.keys.insert(0, key);
        self
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn get(&self, column: usize) -> Option<&Key> {
        self.keys.get(column)
    }

    /// Column of the row's first control key.
    pub fn control_column(&self) -> Option<usize> {
        self.keys.iter().position(Key::is_control)
    }
}

/// Errors from building a layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("keyboard layout has no rows")]
    NoRows,
    #[error("keyboard row {0} has no keys")]
    EmptyRow(usize),
}

/// Validated keyboard grid: at least one row, no empty rows.
///
/// Deserialization goes through [`Layout::new`], so a decoded layout is
/// checked the same way as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawLayout")]
pub struct Layout {
    rows: Vec<KeyRow>,
}

#[derive(Deserialize)]
struct RawLayout {
    rows: Vec<KeyRow>,
}

impl TryFrom<RawLayout> for Layout {
    type Error = LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self, Self::Error> {
        Layout::new(raw.rows)
    }
}

impl Layout {
    pub fn new(rows: Vec<KeyRow>) -> Result<Self, LayoutError> {
        if rows.is_empty() {
            return Err(LayoutError::NoRows);
        }
        if let Some(i) = rows.iter().position(KeyRow::is_empty) {
            return Err(LayoutError::EmptyRow(i));
        }
        Ok(Self { rows })
    }

    /// Default four-row layout: digits, `q` row, shift + `a` row, space + `z` row.
    pub fn qwerty() -> Self {
        Self {
            rows: vec![
                KeyRow::from_tables("1234567890", "!@#$%^&*()"),
                KeyRow::from_tables("qwertyuiop'", "QWERTYUIOP\""),
                KeyRow::letters("asdfghjkl").with_leading(Key::ShiftToggle),
                KeyRow::from_tables("zxcvbnm.", "ZXCVBNM?").with_leading(Key::Space),
            ],
        }
    }

    pub fn rows(&self) -> &[KeyRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&KeyRow> {
        self.rows.get(index)
    }

    pub fn key(&self, cursor: Cursor) -> Option<&Key> {
        self.row(cursor.row)?.get(cursor.column)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::qwerty()
    }
}

/// Cursor position: row index and column within that row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Directional button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// `(row_delta, column_delta)` for this direction.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Result of pressing the commit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Shift lock toggled to the contained state; buffer unchanged
    ShiftLock(bool),
    /// Character appended to the buffer
    Inserted(char),
    /// Buffer full; the character was discarded
    Dropped(char),
}

impl KeyAction {
    pub fn changed_buffer(&self) -> bool {
        matches!(self, KeyAction::Inserted(_))
    }
}

/// Cursor, shift lock and text buffer for one keyboard session.
#[derive(Debug, Clone)]
pub struct GridKeyboard {
    layout: Layout,
    cursor: Cursor,
    shift_lock: bool,
    buffer: TextBuffer,
}

impl GridKeyboard {
    pub fn new(layout: Layout, buffer_capacity: usize) -> Self {
        Self {
            layout,
            cursor: Cursor::default(),
            shift_lock: false,
            buffer: TextBuffer::with_capacity(buffer_capacity),
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn shift_lock(&self) -> bool {
        self.shift_lock
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut TextBuffer {
        &mut self.buffer
    }

    /// Key under the cursor.
    pub fn selected_key(&self) -> Key {
        // The cursor is kept inside the grid by every move.
        self.layout.rows[self.cursor.row].keys[self.cursor.column]
    }

    /// Move by a row or a column offset. Returns whether the cursor moved.
    ///
    /// Only one of the two deltas may be non-zero; a combined move is
    /// rejected.
    pub fn move_by(&mut self, row_delta: isize, col_delta: isize) -> bool {
        match (row_delta, col_delta) {
            (0, 0) => false,
            (dr, 0) => self.move_row(dr),
            (0, dc) => self.move_column(dc),
            _ => {
                debug!(row_delta, col_delta, "combined move rejected");
                false
            }
        }
    }

    pub fn navigate(&mut self, direction: Direction) -> bool {
        let (dr, dc) = direction.delta();
        self.move_by(dr, dc)
    }

    fn move_row(&mut self, delta: isize) -> bool {
        let Some(target) = self.cursor.row.checked_add_signed(delta) else {
            return false;
        };
        let Some(row) = self.layout.row(target) else {
            return false;
        };
        let column = if self.cursor.column < row.len() {
            self.cursor.column
        } else {
            row.control_column().unwrap_or(row.len().saturating_sub(1))
        };
        self.cursor = Cursor {
            row: target,
            column,
        };
        true
    }

    fn move_column(&mut self, delta: isize) -> bool {
        let row_len = self.layout.rows[self.cursor.row].len();
        match self.cursor.column.checked_add_signed(delta) {
            Some(column) if column < row_len => {
                self.cursor.column = column;
                true
            }
            _ => false,
        }
    }

    /// Press the key under the cursor.
    pub fn commit(&mut self) -> KeyAction {
        let key = self.selected_key();
        match key.resolve(self.shift_lock) {
            None => {
                self.shift_lock = !self.shift_lock;
                debug!(shift_lock = self.shift_lock, "shift lock toggled");
                KeyAction::ShiftLock(self.shift_lock)
            }
            Some(ch) if self.buffer.push(ch) => KeyAction::Inserted(ch),
            Some(ch) => {
                debug!(capacity = self.buffer.capacity(), "buffer full, dropped {:?}", ch);
                KeyAction::Dropped(ch)
            }
        }
    }

    /// Delete the last character of the buffer.
    pub fn backspace(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    /// Return the cursor to the top-left key and clear shift lock. The
    /// buffer is kept.
    pub fn reset_session(&mut self) {
        self.cursor = Cursor::default();
        self.shift_lock = false;
    }
}

impl Default for GridKeyboard {
    fn default() -> Self {
        Self::new(Layout::qwerty(), 256)
    }
}
