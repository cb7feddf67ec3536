//! Word tiers and word-list parsing.
//!
//! A tier is a priority-ranked bucket of words loaded from one word list.
//! Tiers encode register (function words, chat, fillers, lemmas, formal
//! discourse) rather than frequency, so ranking is purely positional: tier
//! priority first, then the order words appear in the list.

use ahash::{AHashSet, RandomState};
use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// The five vocabulary tiers.
///
/// Variant order is the scan order used by prefix queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TierKind {
    /// Function words ("the", "to", "of")
    FunctionWords,
    /// Chat and internet slang
    Chat,
    /// Conversational fillers
    Fillers,
    /// Common lemmas
    Lemmas,
    /// Formal discourse vocabulary
    FormalDiscourse,
}

impl TierKind {
    /// All tiers in priority order.
    pub const ALL: [TierKind; 5] = [
        TierKind::FunctionWords,
        TierKind::Chat,
        TierKind::Fillers,
        TierKind::Lemmas,
        TierKind::FormalDiscourse,
    ];

    /// Stable logical name of the tier's word-list resource.
    pub fn logical_name(self) -> &'static str {
        match self {
            TierKind::FunctionWords => "tier1_function_words",
            TierKind::Chat => "tier3a_chat",
            TierKind::Fillers => "tier3b_fillers",
            TierKind::Lemmas => "tier2_lemma_list",
            TierKind::FormalDiscourse => "tier4_formal_discourse",
        }
    }

    /// File name used by directory-backed sources.
    pub fn file_name(self) -> String {
        format!("{}.txt", self.logical_name())
    }

    /// Position in the scan order (0 = scanned first).
    pub fn priority(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.logical_name())
    }
}

/// Outcome of inserting a word into a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierInsert {
    Added,
    /// Word already present; the first occurrence keeps its position
    Duplicate,
    /// Tier is at capacity; the word was rejected
    Full,
}

/// An ordered, capacity-bounded list of distinct words.
#[derive(Debug, Clone)]
pub struct WordTier {
    kind: TierKind,
    words: Vec<String>,
    /// Hashes of `words`; a hit is confirmed against `words` itself.
    hashes: AHashSet<u64>,
    hasher: RandomState,
    capacity: usize,
}

impl WordTier {
    /// Reserve storage for a tier holding up to `capacity` words.
    ///
    /// Reservation is fallible so an allocation failure surfaces as an error
    /// instead of aborting the process.
    pub fn try_with_capacity(kind: TierKind, capacity: usize) -> Result<Self, TryReserveError> {
        let mut words = Vec::new();
        words.try_reserve_exact(capacity)?;
        let mut hashes = AHashSet::new();
        hashes.try_reserve(capacity)?;
        Ok(Self {
            kind,
            words,
            hashes,
            hasher: RandomState::new(),
            capacity,
        })
    }

    pub fn kind(&self) -> TierKind {
        self.kind
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.words.len() >= self.capacity
    }

    /// Words in insertion order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Append a word, keeping insertion order.
    pub fn insert(&mut self, word: &str) -> TierInsert {
        let hash = self.hasher.hash_one(word);
        if self.hashes.contains(&hash) && self.words.iter().any(|w| w == word) {
            return TierInsert::Duplicate;
        }
        if self.is_full() {
            return TierInsert::Full;
        }
        self.hashes.insert(hash);
        self.words.push(word.to_string());
        TierInsert::Added
    }

    /// Words matching `prefix` case-insensitively, in insertion order.
    pub fn matches<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |w| starts_with_ignore_case(w, prefix))
    }
}

/// Case-insensitive prefix test using full Unicode lowercase mappings.
pub fn starts_with_ignore_case(word: &str, prefix: &str) -> bool {
    let mut word_chars = word.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| word_chars.next() == Some(p))
}

/// Parse a word list: one word per line.
///
/// LF, CRLF and lone CR all end a line. Lines are trimmed; blank lines and
/// lines starting with `#` are skipped, as are lines longer than
/// `max_word_len` characters (they are dropped, not truncated). Words are
/// returned NFC-normalized.
pub fn parse_word_list(text: &str, max_word_len: usize) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| c == '\n' || c == '\r')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter(move |line| line.chars().count() <= max_word_len)
        .map(|line| line.nfc().collect())
}
