//! Text rendering of a keyboard frame.
//!
//! Draws the same information the device shows: suggestions on top, the
//! composed text, then the key grid with the highlighted key in brackets.

use typeaid_core::{GridKeyboard, Key, RenderState};

/// Short key face used in the grid.
fn key_face(key: &Key, shift_lock: bool) -> String {
    match key {
        Key::ShiftToggle if shift_lock => "SHIFT".to_string(),
        Key::ShiftToggle => "shift".to_string(),
        Key::Space => "_".to_string(),
        Key::Char { .. } => key.label(shift_lock),
    }
}

/// Render one frame as plain text.
pub fn render_frame(keyboard: &GridKeyboard, state: &RenderState) -> String {
    let mut out = String::new();

    if state.has_status() {
        out.push_str(&format!("! {}\n", state.status.as_deref().unwrap_or_default()));
    }

    if !state.has_suggestions() {
        out.push_str("  -\n");
    } else {
        let line: Vec<String> = state
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, w)| format!("{}:{}", i, w))
            .collect();
        out.push_str(&format!("  {}\n", line.join("  ")));
    }

    out.push_str(&format!("> {}|\n", state.buffer));

    for (r, row) in keyboard.layout().rows().iter().enumerate() {
        let cells: Vec<String> = row
            .keys()
            .iter()
            .enumerate()
            .map(|(c, key)| {
                let face = key_face(key, state.shift_lock);
                if r == state.cursor.row && c == state.cursor.column {
                    format!("[{}]", face)
                } else {
                    format!(" {} ", face)
                }
            })
            .collect();
        out.push_str(&cells.join(""));
        out.push('\n');
    }
    out
}
