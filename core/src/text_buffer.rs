//! Bounded text buffer fed by the grid keyboard.
//!
//! The buffer mirrors a fixed-size character array on the device: a buffer
//! with capacity `N` holds at most `N - 1` characters. Writes past that limit
//! are dropped silently, since running out of room is an expected condition
//! on a small device rather than an error.

/// Bounded, append-only text with single-character backspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    chars: usize, // char count, kept alongside `text` to avoid rescans
    capacity: usize,
}

impl TextBuffer {
    /// Create an empty buffer holding at most `capacity - 1` characters.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            capacity,
        }
    }

    /// Get the buffer contents.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars
    }

    pub fn is_empty(&self) -> bool {
        self.chars == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Maximum number of characters the buffer can hold.
    pub fn max_len(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    pub fn is_full(&self) -> bool {
        self.chars >= self.max_len()
    }

    /// Append a character. Returns false if the buffer is full and the
    /// character was dropped.
    pub fn push(&mut self, ch: char) -> bool {
        if self.is_full() {
            return false;
        }
        self.text.push(ch);
        self.chars += 1;
        true
    }

    /// Append as much of `s` as fits. Returns the number of characters written.
    pub fn push_str(&mut self, s: &str) -> usize {
        s.chars().take_while(|&ch| self.push(ch)).count()
    }

    /// Remove the last character (backspace).
    pub fn pop(&mut self) -> Option<char> {
        let ch = self.text.pop()?;
        self.chars -= 1;
        Some(ch)
    }

    /// The partial word at the end of the buffer.
    ///
    /// This is everything after the last whitespace character, so a buffer
    /// that is empty or ends in whitespace has an empty trailing token.
    pub fn trailing_token(&self) -> &str {
        &self.text[self.trailing_token_start()..]
    }

    /// Replace the trailing token with `word`, truncating at capacity.
    /// Returns the number of characters of `word` written.
    pub fn replace_trailing_token(&mut self, word: &str) -> usize {
        let start = self.trailing_token_start();
        let removed = self.text[start..].chars().count();
        self.text.truncate(start);
        self.chars -= removed;
        self.push_str(word)
    }

    /// Byte offset where the trailing token begins.
    fn trailing_token_start(&self) -> usize {
        self.text
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::with_capacity(256)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_with(text: &str) -> TextBuffer {
        let mut buf = TextBuffer::with_capacity(256);
        buf.push_str(text);
        buf
    }

    #[test]
    fn test_push_and_pop() {
        let mut buf = TextBuffer::with_capacity(8);
        assert!(buf.push('h'));
        assert!(buf.push('i'));
        assert_eq!(buf.as_str(), "hi");
        assert_eq!(buf.pop(), Some('i'));
        assert_eq!(buf.pop(), Some('h'));
        assert_eq!(buf.pop(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_capacity_keeps_room_for_terminator() {
        let mut buf = TextBuffer::with_capacity(4);
        assert_eq!(buf.push_str("abcdef"), 3);
        assert_eq!(buf.as_str(), "abc");
        assert!(buf.is_full());
        assert!(!buf.push('x'));
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn test_zero_capacity_holds_nothing() {
        let mut buf = TextBuffer::with_capacity(0);
        assert!(!buf.push('a'));
        assert_eq!(buf.max_len(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_len_counts_chars_not_bytes() {
        let mut buf = TextBuffer::with_capacity(3);
        assert!(buf.push('é'));
        assert!(buf.push('ß'));
        assert!(!buf.push('x'));
        assert_eq!(buf.len(), 2);
        assert_eq!(buf.pop(), Some('ß'));
        assert_eq!(buf.len(), 1);
    }

    #[test]
    fn test_trailing_token() {
        assert_eq!(buffer_with("hello wor").trailing_token(), "wor");
        assert_eq!(buffer_with("hello ").trailing_token(), "");
        assert_eq!(buffer_with("").trailing_token(), "");
        assert_eq!(buffer_with("single").trailing_token(), "single");
        assert_eq!(buffer_with("two  spaces").trailing_token(), "spaces");
    }

    #[test]
    fn test_replace_trailing_token() {
        let mut buf = buffer_with("say hel");
        assert_eq!(buf.replace_trailing_token("hello"), 5);
        assert_eq!(buf.as_str(), "say hello");
        assert_eq!(buf.len(), 9);
    }

    #[test]
    fn test_replace_after_whitespace_appends() {
        let mut buf = buffer_with("say ");
        buf.replace_trailing_token("hi");
        assert_eq!(buf.as_str(), "say hi");
    }

    #[test]
    fn test_replace_truncates_at_capacity() {
        let mut buf = TextBuffer::with_capacity(6);
        buf.push_str("a b");
        assert_eq!(buf.replace_trailing_token("bcdef"), 3);
        assert_eq!(buf.as_str(), "a bcd");
        assert!(buf.is_full());
    }
}
