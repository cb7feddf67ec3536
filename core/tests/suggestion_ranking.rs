//! Tests for vocabulary ranking and the properties every query must keep
//!
//! - Every suggestion starts with the prefix, ignoring case
//! - Never more than `limit` results
//! - Tier priority first, then word-list order
//! - Same store + same prefix = same result

use typeaid_core::{Config, MemorySource, TierKind, VocabularyStore};

fn five_tier_store() -> VocabularyStore {
    let source = MemorySource::new()
        .with(TierKind::FunctionWords, "the\nthat\nthis\nto\nit\nis\nin\nand\n")
        .with(TierKind::Chat, "tbh\nThx\nidk\nimo\nlol\n")
        .with(TierKind::Fillers, "um\nuh\nlike\nwell\n")
        .with(TierKind::Lemmas, "time\nthing\nthink\nwork\nworld\nwell\n")
        .with(TierKind::FormalDiscourse, "therefore\nthus\nwhereas\nmoreover\n");
    let mut store = VocabularyStore::new();
    store.load(&source, &Config::default()).unwrap();
    store
}

#[test]
fn test_every_result_matches_prefix() {
    let store = five_tier_store();
    for prefix in ["t", "T", "th", "TH", "w", "i", "im", "mo", "x"] {
        for limit in 0..8u8 {
            let found = store.suggest(prefix, limit);
            assert!(found.len() <= usize::from(limit));
            for word in &found {
                assert!(
                    word.to_lowercase().starts_with(&prefix.to_lowercase()),
                    "{word} does not start with {prefix}"
                );
            }
        }
    }
}

#[test]
fn test_tier_order_then_file_order() {
    let store = five_tier_store();
    assert_eq!(
        store.suggest("th", 10),
        vec!["the", "that", "this", "Thx", "thing", "think", "therefore", "thus"]
    );
}

#[test]
fn test_two_tier_example() {
    let source = MemorySource::new()
        .with(TierKind::FunctionWords, "to\n")
        .with(TierKind::Chat, "test\n");
    let mut store = VocabularyStore::new();
    store.load(&source, &Config::default()).unwrap();
    assert_eq!(store.suggest("t", 3), vec!["to", "test"]);
}

#[test]
fn test_limit_reached_inside_first_tier() {
    let store = five_tier_store();
    assert_eq!(store.suggest("t", 3), vec!["the", "that", "this"]);
}

#[test]
fn test_same_word_in_two_tiers_reported_twice() {
    // "well" is both a filler and a lemma; tiers are independent lists
    let store = five_tier_store();
    assert_eq!(store.suggest("we", 5), vec!["well", "well"]);
}

#[test]
fn test_repeated_queries_are_identical() {
    let store = five_tier_store();
    for prefix in ["t", "wo", "i", "zz"] {
        let first = store.suggest(prefix, 3);
        let second = store.suggest(prefix, 3);
        assert_eq!(first, second);
    }
}

#[test]
fn test_no_match_and_empty_prefix() {
    let store = five_tier_store();
    assert!(store.suggest("zz", 3).is_empty());
    assert!(store.suggest("", 3).is_empty());
}
