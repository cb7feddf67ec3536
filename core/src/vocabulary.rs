//! Tiered vocabulary store.
//!
//! The store owns exactly five `WordTier`s in the fixed `TierKind::ALL`
//! order. Each tier is populated independently from a `WordListSource`; a
//! tier whose resource is missing stays empty and is reported as a failure,
//! but loading as a whole only fails when tier storage cannot be reserved.
//!
//! Queries are a linear scan: tiers in priority order, words in file order,
//! stopping as soon as the requested number of matches is collected.

use crate::tier::{parse_word_list, TierInsert, TierKind, WordTier};
use crate::Config;
use std::collections::{HashMap, TryReserveError};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use unicode_normalization::UnicodeNormalization;

/// Words placed in the function-words tier when it loads empty and
/// `Config::seed_words_when_empty` is set.
const SEED_WORDS: &[&str] = &[
    "the", "that", "this", "to", "it", "is", "in", "and", "have", "we", "were", "will", "would",
    "hello", "help", "world", "work",
];

/// Provider of the raw word-list text for each tier.
pub trait WordListSource {
    /// Read the full word list for `kind`.
    fn read(&self, kind: TierKind) -> io::Result<String>;

    /// Human-readable location of the resource, used in log messages.
    fn describe(&self, kind: TierKind) -> String {
        kind.logical_name().to_string()
    }
}

/// Word lists stored as `<logical name>.txt` files in one directory.
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the word list for `kind`.
    pub fn path_for(&self, kind: TierKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

impl WordListSource for DirSource {
    fn read(&self, kind: TierKind) -> io::Result<String> {
        std::fs::read_to_string(self.path_for(kind))
    }

    fn describe(&self, kind: TierKind) -> String {
        self.path_for(kind).display().to_string()
    }
}

/// In-memory word lists; tiers without an entry read as missing.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: HashMap<TierKind, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of `insert`.
    pub fn with<T: Into<String>>(mut self, kind: TierKind, text: T) -> Self {
        self.insert(kind, text);
        self
    }

    pub fn insert<T: Into<String>>(&mut self, kind: TierKind, text: T) {
        self.lists.insert(kind, text.into());
    }
}

impl WordListSource for MemorySource {
    fn read(&self, kind: TierKind) -> io::Result<String> {
        self.lists.get(&kind).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no word list for {}", kind.logical_name()),
            )
        })
    }

    fn describe(&self, kind: TierKind) -> String {
        format!("memory:{}", kind.logical_name())
    }
}

/// Errors that make the vocabulary unusable.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to allocate {capacity} word slots for tier {tier}")]
    Allocation {
        tier: TierKind,
        capacity: usize,
        #[source]
        source: TryReserveError,
    },
}

/// Aggregate outcome of a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Every tier's resource was read
    Complete,
    /// `failed` tiers could not be read and are empty
    Partial { failed: usize },
}

/// Per-tier result of `VocabularyStore::load`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    counts: [usize; 5],
    failed: Vec<TierKind>,
}

impl LoadReport {
    pub fn status(&self) -> LoadStatus {
        if self.failed.is_empty() {
            LoadStatus::Complete
        } else {
            LoadStatus::Partial {
                failed: self.failed.len(),
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Tiers whose resource could not be read, in priority order.
    pub fn failed(&self) -> &[TierKind] {
        &self.failed
    }

    /// Number of words loaded into `kind`.
    pub fn word_count(&self, kind: TierKind) -> usize {
        self.counts[kind.priority()]
    }

    pub fn total_words(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Short message for the user, `None` when every tier loaded.
    pub fn status_message(&self) -> Option<String> {
        match self.failed.len() {
            0 => None,
            n if n == TierKind::ALL.len() => Some("ERROR: No data files found!".to_string()),
            n => Some(format!("WARNING: {} data file(s) missing", n)),
        }
    }
}

/// Lifecycle of a `VocabularyStore`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    Uninitialized,
    Loaded(LoadStatus),
    Released,
}

/// Five priority-ordered word tiers answering prefix queries.
#[derive(Debug)]
pub struct VocabularyStore {
    tiers: Vec<WordTier>,
    report: Option<LoadReport>,
    state: StoreState,
}

impl VocabularyStore {
    /// Create an empty, uninitialized store.
    pub fn new() -> Self {
        Self {
            tiers: Vec::new(),
            report: None,
            state: StoreState::Uninitialized,
        }
    }

    /// Create and load a store from the word lists in `config.data_dir`.
    pub fn open(config: &Config) -> Result<Self, VocabularyError> {
        let source = DirSource::new(&config.data_dir);
        debug!(dir = %source.dir().display(), "opening word lists");
        let mut store = Self::new();
        store.load(&source, config)?;
        Ok(store)
    }

    /// Reserve all tiers, then populate each from `source`.
    ///
    /// Missing or unreadable resources leave their tier empty and are listed
    /// in the returned report. Only a failed reservation is an error, in which
    /// case the store stays unloaded.
    pub fn load<S: WordListSource + ?Sized>(
        &mut self,
        source: &S,
        config: &Config,
    ) -> Result<LoadReport, VocabularyError> {
        if let (StoreState::Loaded(_), Some(report)) = (self.state, &self.report) {
            warn!("vocabulary already loaded");
            return Ok(report.clone());
        }

        info!("loading vocabulary tiers");
        let mut tiers = Vec::with_capacity(TierKind::ALL.len());
        for kind in TierKind::ALL {
            let tier = WordTier::try_with_capacity(kind, config.tier_capacity).map_err(|source| {
                warn!(tier = %kind, "failed to allocate tier");
                VocabularyError::Allocation {
                    tier: kind,
                    capacity: config.tier_capacity,
                    source,
                }
            })?;
            tiers.push(tier);
        }

        let mut failed = Vec::new();
        for tier in &mut tiers {
            let kind = tier.kind();
            let location = source.describe(kind);
            match source.read(kind) {
                Ok(text) => {
                    fill_tier(tier, &text, config.max_word_len);
                    info!(tier = %kind, words = tier.len(), "loaded {}", location);
                }
                Err(e) => {
                    warn!(tier = %kind, error = %e, "failed to open {}", location);
                    failed.push(kind);
                }
            }
        }

        if config.seed_words_when_empty && tiers[0].is_empty() {
            warn!("function-words tier empty, seeding built-in words");
            for word in SEED_WORDS {
                tiers[0].insert(word);
            }
        }

        let mut counts = [0; 5];
        for tier in &tiers {
            counts[tier.kind().priority()] = tier.len();
        }
        let report = LoadReport { counts, failed };
        if let Some(msg) = report.status_message() {
            warn!("{}", msg);
        }
        info!(
            tier1 = counts[0],
            tier3a = counts[1],
            tier3b = counts[2],
            tier2 = counts[3],
            tier4 = counts[4],
            "vocabulary loaded"
        );

        self.tiers = tiers;
        self.state = StoreState::Loaded(report.status());
        self.report = Some(report.clone());
        Ok(report)
    }

    /// Up to `limit` words starting with `prefix`, ignoring case.
    ///
    /// Ranking is tier priority, then insertion order within the tier. An
    /// empty prefix, a zero limit, or an unloaded store yields no words.
    pub fn suggest(&self, prefix: &str, limit: u8) -> Vec<String> {
        let limit = usize::from(limit);
        if prefix.is_empty() || limit == 0 || !self.is_loaded() {
            return Vec::new();
        }
        let prefix: String = prefix.nfc().collect();

        let mut found = Vec::with_capacity(limit);
        for tier in &self.tiers {
            if found.len() >= limit {
                break;
            }
            let before = found.len();
            found.extend(
                tier.matches(&prefix)
                    .take(limit - before)
                    .map(str::to_string),
            );
            debug!(tier = %tier.kind(), matches = found.len() - before, "searched tier for '{}'", prefix);
        }
        found
    }

    /// Drop all tier storage. Safe to call more than once.
    pub fn release(&mut self) {
        if self.state == StoreState::Released {
            return;
        }
        if self.is_loaded() {
            info!("releasing vocabulary");
        }
        self.tiers = Vec::new();
        self.report = None;
        self.state = StoreState::Released;
    }

    pub fn state(&self) -> StoreState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.state, StoreState::Loaded(_))
    }

    /// Report from the last successful load.
    pub fn report(&self) -> Option<&LoadReport> {
        self.report.as_ref()
    }

    /// Message for the presentation layer, `None` when fully loaded.
    pub fn status_message(&self) -> Option<String> {
        match &self.report {
            Some(report) if self.is_loaded() => report.status_message(),
            _ => Some("not initialized".to_string()),
        }
    }

    /// Loaded tiers in priority order (empty unless loaded).
    pub fn tiers(&self) -> &[WordTier] {
        &self.tiers
    }

    pub fn tier(&self, kind: TierKind) -> Option<&WordTier> {
        self.tiers.get(kind.priority())
    }
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::new()
    }
}

fn fill_tier(tier: &mut WordTier, text: &str, max_word_len: usize) {
    let mut duplicates = 0usize;
    let mut rejected = 0usize;
    for word in parse_word_list(text, max_word_len) {
        match tier.insert(&word) {
            TierInsert::Added => {}
            TierInsert::Duplicate => duplicates += 1,
            TierInsert::Full => rejected += 1,
        }
    }
    if duplicates > 0 {
        debug!(tier = %tier.kind(), duplicates, "skipped duplicate words");
    }
    if rejected > 0 {
        warn!(
            tier = %tier.kind(),
            capacity = tier.capacity(),
            rejected,
            "tier full, words rejected"
        );
    }
}
