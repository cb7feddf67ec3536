//! One-shot subcommands writing to any output.

use anyhow::Result;
use std::io::Write;
use typeaid_core::{Config, VocabularyStore};

/// Print up to `limit` ranked suggestions for `prefix`, numbered from 1.
pub fn suggest<W: Write>(
    store: &VocabularyStore,
    prefix: &str,
    limit: u8,
    mut output: W,
) -> Result<()> {
    let words = store.suggest(prefix, limit);
    if words.is_empty() {
        writeln!(output, "(no suggestions)")?;
    }
    for (i, word) in words.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, word)?;
    }
    Ok(())
}

/// Print the effective configuration as TOML.
pub fn print_config<W: Write>(config: &Config, mut output: W) -> Result<()> {
    write!(output, "{}", config.to_toml_string()?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use typeaid_core::{MemorySource, TierKind};

    fn store() -> VocabularyStore {
        let source = MemorySource::new()
            .with(TierKind::FunctionWords, "the\nto\nthat\n")
            .with(TierKind::Lemmas, "test\ntime\n");
        let mut store = VocabularyStore::new();
        store.load(&source, &Config::default()).unwrap();
        store
    }

    #[test]
    fn test_suggest_numbers_words() {
        let mut out = Vec::new();
        suggest(&store(), "T", 4, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1. the\n2. to\n3. that\n4. test\n"
        );
    }

    #[test]
    fn test_suggest_without_matches() {
        let mut out = Vec::new();
        suggest(&store(), "zz", 3, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "(no suggestions)\n");
    }

    #[test]
    fn test_print_config_round_trips() {
        let config = Config {
            max_suggestions: 5,
            ..Config::default()
        };
        let mut out = Vec::new();
        print_config(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("max_suggestions = 5"));
        assert_eq!(Config::from_toml_str(&text).unwrap(), config);
    }
}
