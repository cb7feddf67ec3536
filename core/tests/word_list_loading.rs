//! Tests for loading word lists from a data directory
//!
//! - Files are named after each tier's logical name
//! - Missing files degrade to empty tiers, never to an error
//! - Comments, blank lines, CRLF and over-long lines are handled
//! - `VocabularyStore::open` reads `Config::data_dir`

use std::fs;
use std::path::Path;
use typeaid_core::{
    Config, DirSource, LoadStatus, StoreState, TierKind, VocabularyStore, WordListSource,
};

fn write_tier(dir: &Path, kind: TierKind, text: &str) {
    fs::write(dir.join(kind.file_name()), text).unwrap();
}

#[test]
fn test_directory_with_all_tiers() {
    let dir = tempfile::tempdir().unwrap();
    for kind in TierKind::ALL {
        write_tier(dir.path(), kind, &format!("# {}\n{}word\n", kind, kind.priority()));
    }
    let mut store = VocabularyStore::new();
    let report = store
        .load(&DirSource::new(dir.path()), &Config::default())
        .unwrap();
    assert_eq!(report.status(), LoadStatus::Complete);
    assert_eq!(report.total_words(), 5);
    assert_eq!(store.suggest("3", 3), vec!["3word"]);
}

#[test]
fn test_missing_files_are_partial_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    write_tier(dir.path(), TierKind::FunctionWords, "the\r\nto\r\n");
    write_tier(dir.path(), TierKind::FormalDiscourse, "therefore\n");

    let mut store = VocabularyStore::new();
    let report = store
        .load(&DirSource::new(dir.path()), &Config::default())
        .unwrap();
    assert_eq!(report.status(), LoadStatus::Partial { failed: 3 });
    assert_eq!(store.state(), StoreState::Loaded(LoadStatus::Partial { failed: 3 }));
    assert_eq!(store.suggest("t", 3), vec!["the", "to", "therefore"]);
    assert_eq!(
        store.status_message().as_deref(),
        Some("WARNING: 3 data file(s) missing")
    );
}

#[test]
fn test_nonexistent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let source = DirSource::new(dir.path().join("nope"));
    assert!(source.read(TierKind::Chat).is_err());

    let mut store = VocabularyStore::new();
    let report = store.load(&source, &Config::default()).unwrap();
    assert_eq!(report.failed().len(), 5);
    assert_eq!(
        store.status_message().as_deref(),
        Some("ERROR: No data files found!")
    );
}

#[test]
fn test_long_lines_skipped_not_truncated() {
    let dir = tempfile::tempdir().unwrap();
    let long = "a".repeat(33);
    let exact = "b".repeat(32);
    write_tier(
        dir.path(),
        TierKind::Lemmas,
        &format!("{long}\n{exact}\n\n   \nabc\n"),
    );
    let mut store = VocabularyStore::new();
    store
        .load(&DirSource::new(dir.path()), &Config::default())
        .unwrap();
    let lemmas = store.tier(TierKind::Lemmas).unwrap();
    assert_eq!(lemmas.words(), &[exact, "abc".to_string()]);
    assert!(store.suggest("a", 3).iter().all(|w| w == "abc"));
}

#[test]
fn test_open_reads_config_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_tier(dir.path(), TierKind::Chat, "brb\nbtw\n");
    let mut cfg = Config::default();
    cfg.data_dir = dir.path().to_path_buf();

    let store = VocabularyStore::open(&cfg).unwrap();
    assert_eq!(store.suggest("b", 3), vec!["brb", "btw"]);
    assert_eq!(store.report().unwrap().word_count(TierKind::Chat), 2);
}

#[test]
fn test_shipped_sample_data_loads() {
    let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../data");
    let mut store = VocabularyStore::new();
    let report = store
        .load(&DirSource::new(&data), &Config::default())
        .unwrap();
    assert!(report.is_complete(), "missing: {:?}", report.failed());
    assert_eq!(store.suggest("th", 1), vec!["the"]);
}
