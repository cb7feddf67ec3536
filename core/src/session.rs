//! Predictive keyboard session.
//!
//! `PredictiveSession` owns the active `GridKeyboard` and shares the loaded
//! `VocabularyStore` read-only. Every change to the text buffer re-derives
//! the trailing token and asks the store for fresh suggestions; nothing else
//! is carried between events, so the same buffer always yields the same list.

use crate::context::RenderState;
use crate::keyboard::{Direction, GridKeyboard, KeyAction, Layout};
use crate::vocabulary::VocabularyStore;
use crate::Config;
use std::sync::Arc;
use tracing::debug;

/// The full input surface of the keyboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Up,
    Down,
    Left,
    Right,
    /// Press the highlighted key
    Ok,
    /// Delete the last character
    Delete,
    /// Return cursor and shift lock to their initial state
    Reset,
}

/// What handling an event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Moved,
    /// Move would have left the grid
    Rejected,
    Typed(char),
    ShiftLock(bool),
    /// Buffer full, character discarded
    Dropped(char),
    Deleted(char),
    /// Delete on an empty buffer
    NothingToDelete,
    Reset,
}

/// Keyboard plus live suggestions for the partial word being typed.
#[derive(Debug)]
pub struct PredictiveSession {
    store: Arc<VocabularyStore>,
    keyboard: GridKeyboard,
    max_suggestions: u8,
    space_after_accept: bool,
    suggestions: Vec<String>,
}

impl PredictiveSession {
    /// Start a session with an empty buffer and the default layout.
    pub fn new(store: Arc<VocabularyStore>, config: &Config) -> Self {
        let keyboard = GridKeyboard::new(Layout::qwerty(), config.buffer_capacity);
        Self::with_keyboard(store, keyboard, config)
    }

    /// Resume with a keyboard handed back from an earlier session.
    pub fn with_keyboard(
        store: Arc<VocabularyStore>,
        keyboard: GridKeyboard,
        config: &Config,
    ) -> Self {
        let mut session = Self {
            store,
            keyboard,
            max_suggestions: config.max_suggestions,
            space_after_accept: config.space_after_accept,
            suggestions: Vec::new(),
        };
        session.refresh();
        session
    }

    /// Handle one input event.
    pub fn handle(&mut self, event: InputEvent) -> EventOutcome {
        let outcome = match event {
            InputEvent::Up => self.navigate(Direction::Up),
            InputEvent::Down => self.navigate(Direction::Down),
            InputEvent::Left => self.navigate(Direction::Left),
            InputEvent::Right => self.navigate(Direction::Right),
            InputEvent::Ok => self.commit(),
            InputEvent::Delete => self.backspace(),
            InputEvent::Reset => {
                self.keyboard.reset_session();
                EventOutcome::Reset
            }
        };
        debug!(?event, ?outcome, "handled input event");
        outcome
    }

    fn navigate(&mut self, direction: Direction) -> EventOutcome {
        if self.keyboard.navigate(direction) {
            EventOutcome::Moved
        } else {
            EventOutcome::Rejected
        }
    }

    fn commit(&mut self) -> EventOutcome {
        let action = self.keyboard.commit();
        if action.changed_buffer() {
            self.refresh();
        }
        match action {
            KeyAction::ShiftLock(on) => EventOutcome::ShiftLock(on),
            KeyAction::Inserted(ch) => EventOutcome::Typed(ch),
            KeyAction::Dropped(ch) => EventOutcome::Dropped(ch),
        }
    }

    fn backspace(&mut self) -> EventOutcome {
        match self.keyboard.backspace() {
            Some(ch) => {
                self.refresh();
                EventOutcome::Deleted(ch)
            }
            None => EventOutcome::NothingToDelete,
        }
    }

    /// Replace the trailing token with suggestion `index`.
    ///
    /// Appends a space afterwards when configured. Text that does not fit is
    /// dropped. Returns the accepted word.
    pub fn accept_suggestion(&mut self, index: usize) -> Option<String> {
        let word = self.suggestions.get(index)?.clone();
        let buffer = self.keyboard.buffer_mut();
        buffer.replace_trailing_token(&word);
        if self.space_after_accept {
            buffer.push(' ');
        }
        debug!(word = %word, "accepted suggestion");
        self.refresh();
        Some(word)
    }

    /// Recompute suggestions from the current buffer.
    pub fn refresh(&mut self) {
        let token = self.keyboard.buffer().trailing_token();
        self.suggestions = self.store.suggest(token, self.max_suggestions);
    }

    /// Current ranked suggestions.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Partial word currently being typed.
    pub fn trailing_token(&self) -> &str {
        self.keyboard.buffer().trailing_token()
    }

    pub fn keyboard(&self) -> &GridKeyboard {
        &self.keyboard
    }

    pub fn store(&self) -> &Arc<VocabularyStore> {
        &self.store
    }

    /// Leave the keyboard view: cursor and shift lock reset, text kept.
    pub fn suspend(&mut self) {
        self.keyboard.reset_session();
    }

    /// Hand the keyboard (and its text) off, ending the session.
    pub fn into_keyboard(mut self) -> GridKeyboard {
        self.keyboard.reset_session();
        self.keyboard
    }

    /// Snapshot for drawing the current frame.
    pub fn render_state(&self) -> RenderState {
        let shift_lock = self.keyboard.shift_lock();
        RenderState {
            buffer: self.keyboard.buffer().as_str().to_string(),
            cursor: self.keyboard.cursor(),
            shift_lock,
            selected_key: self.keyboard.selected_key().label(shift_lock),
            trailing_token: self.trailing_token().to_string(),
            suggestions: self.suggestions.clone(),
            status: self.store.status_message(),
        }
    }
}
