//! Render snapshot for the presentation layer.
//!
//! `RenderState` is a plain data container: after handling an input event the
//! display code takes one snapshot and draws from its fields. Taking it has no
//! side effects, so it can be read once per frame.

use crate::keyboard::Cursor;
use serde::{Deserialize, Serialize};

/// Everything the keyboard view needs to draw one frame.
///
/// # Fields
///
/// - `buffer`: text composed so far
/// - `cursor`: highlighted key position
/// - `shift_lock`: whether character keys show their uppercase form
/// - `selected_key`: label of the highlighted key
/// - `trailing_token`: partial word the suggestions were computed for
/// - `suggestions`: ranked words shown above the grid
/// - `status`: vocabulary load warning, if any
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderState {
    pub buffer: String,

    pub cursor: Cursor,

    pub shift_lock: bool,

    pub selected_key: String,

    pub trailing_token: String,

    pub suggestions: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl RenderState {
    /// Check if there is anything to show above the keyboard.
    pub fn has_suggestions(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Check if the vocabulary reported a problem worth showing.
    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let state = RenderState::default();
        assert!(!state.has_suggestions());
        assert!(!state.has_status());
        assert_eq!(state.cursor, Cursor::default());
    }

    #[test]
    fn test_json_omits_missing_status() {
        let state = RenderState {
            buffer: "hi th".to_string(),
            trailing_token: "th".to_string(),
            suggestions: vec!["the".to_string()],
            selected_key: "h".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["buffer"], "hi th");
        assert_eq!(json["cursor"]["row"], 0);
        assert_eq!(json["suggestions"][0], "the");
        assert!(json.get("status").is_none());
    }
}
