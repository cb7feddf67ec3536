//! typeaid-core
//!
//! Predictive input engine for devices that only have directional buttons:
//! a tiered vocabulary store, an on-screen grid keyboard and the session that
//! ties them together.
//!
//! Public API:
//! - `VocabularyStore` - five priority-ordered word tiers answering prefix queries
//! - `GridKeyboard` - cursor/shift-lock state machine over a key grid
//! - `TextBuffer` - bounded text sink fed by the keyboard
//! - `PredictiveSession` - trailing-token derivation and suggestion refresh
//! - `RenderState` - snapshot read by the presentation layer
//! - `Config` - TOML-backed configuration
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub mod tier;
pub use tier::{parse_word_list, TierKind, WordTier};

pub mod vocabulary;
pub use vocabulary::{
    DirSource, LoadReport, LoadStatus, MemorySource, StoreState, VocabularyError,
    VocabularyStore, WordListSource,
};

pub mod text_buffer;
pub use text_buffer::TextBuffer;

pub mod keyboard;
pub use keyboard::{Cursor, Direction, GridKeyboard, Key, KeyAction, KeyRow, Layout, LayoutError};

pub mod session;
pub use session::{EventOutcome, InputEvent, PredictiveSession};

pub mod context;
pub use context::RenderState;

/// Errors raised while reading or writing a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Engine configuration.
///
/// Every field has a default, so a TOML file only needs to list the values it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the five `<tier>.txt` word lists
    pub data_dir: PathBuf,

    /// Text buffer capacity; at most `buffer_capacity - 1` characters are kept
    pub buffer_capacity: usize,

    /// Number of suggestions shown above the keyboard
    pub max_suggestions: u8,

    // Vocabulary limits
    /// Maximum number of words held by a single tier
    pub tier_capacity: usize,
    /// Lines longer than this (in characters) are skipped while loading
    pub max_word_len: usize,

    /// Seed the function-words tier with a few built-in words when it loads empty
    pub seed_words_when_empty: bool,

    /// Append a space after a suggestion is accepted into the buffer
    pub space_after_accept: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            buffer_capacity: 256,
            max_suggestions: 3,
            tier_capacity: 1000,
            max_word_len: 32,
            seed_words_when_empty: false,
            space_after_accept: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load configuration from TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
