use std::collections::HashMap;

use serde::Serialize;

use crate::loader::LoadOptions;
use crate::parser::{LineOutcome, classify_line};
use crate::pronunciation::Pronunciation;

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Pronunciations of `word`, compared case-insensitively.
    ///
    /// `None` means the word is absent; a present word always has at least
    /// one pronunciation.
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]>;

    /// Number of distinct words
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryMetadata {
    pub name: String,
    pub word_count: usize,
    pub pronunciation_count: usize,
    pub ambiguous_count: usize,
}

/// Per-line counts gathered while building a dictionary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    pub lines: usize,
    /// Comments, headers and blank lines
    pub skipped: usize,
    pub missing_separator: usize,
    pub invalid_pronunciation: usize,
    /// Lines that contributed a pronunciation
    pub accepted: usize,
    /// Words removed because `keep_ambiguous` was off
    pub ambiguous_dropped: usize,
}

/// Name given to dictionaries not loaded from a file
pub const IN_MEMORY_NAME: &str = "in-memory";

/// Word to pronunciations table built from the pronouncing dictionary format.
///
/// Read-only once built. Keys keep their source spelling minus any
/// alternate-index suffix; pronunciations keep source order.
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    name: String,
    entries: HashMap<String, Vec<Pronunciation>>,
    stats: LoadStats,
}

impl PronouncingDictionary {
    /// Build from a sequence of lines. Lines that are not valid entries are
    /// dropped without error.
    pub fn from_lines<I, S>(lines: I, options: LoadOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: HashMap<String, Vec<Pronunciation>> = HashMap::new();
        let mut stats = LoadStats::default();

        for line in lines {
            stats.lines += 1;
            match classify_line(line.as_ref()) {
                LineOutcome::Skipped => stats.skipped += 1,
                LineOutcome::MissingSeparator => stats.missing_separator += 1,
                LineOutcome::InvalidPronunciation => stats.invalid_pronunciation += 1,
                LineOutcome::Entry(parsed) => {
                    stats.accepted += 1;
                    entries
                        .entry(parsed.word)
                        .or_default()
                        .push(parsed.pronunciation);
                }
            }
        }

        if !options.keep_ambiguous {
            let before = entries.len();
            entries.retain(|_, pronunciations| pronunciations.len() == 1);
            stats.ambiguous_dropped = before - entries.len();
            if stats.ambiguous_dropped > 0 {
                tracing::info!("Dropped {} ambiguous words", stats.ambiguous_dropped);
            }
        }

        tracing::debug!(
            lines = stats.lines,
            skipped = stats.skipped,
            missing_separator = stats.missing_separator,
            invalid_pronunciation = stats.invalid_pronunciation,
            accepted = stats.accepted,
            "Parsed pronouncing dictionary"
        );

        Self {
            name: IN_MEMORY_NAME.to_string(),
            entries,
            stats,
        }
    }

    /// Label the dictionary with where it came from
    pub(crate) fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(&word.to_uppercase())
    }

    /// All entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Pronunciation])> {
        self.entries
            .iter()
            .map(|(word, pronunciations)| (word.as_str(), pronunciations.as_slice()))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Total pronunciations across all words
    pub fn pronunciation_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Words with more than one pronunciation
    pub fn ambiguous_count(&self) -> usize {
        self.entries.values().filter(|p| p.len() > 1).count()
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }
}

impl Dictionary for PronouncingDictionary {
    fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(&word.to_uppercase()).map(Vec::as_slice)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            word_count: self.entries.len(),
            pronunciation_count: self.pronunciation_count(),
            ambiguous_count: self.ambiguous_count(),
        }
    }
}
