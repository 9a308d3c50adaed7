//! Immutable slang table with longest-match lookup

use std::collections::HashMap;

use super::config::MetadataConfig;
use super::entry::{PartOfSpeech, SlangEntry};
use crate::config::MatchPolicy;
use crate::error::{CoreError, Result};
use crate::grammar::suffix;

/// How a token matched its entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// Token is exactly the slang word
    Exact,
    /// Token is the match key followed by a recognised ending
    Inflected,
    /// Token starts with the slang word; the rest is carried over verbatim
    Prefix,
}

/// Result of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    entry: &'t SlangEntry,
    consumed: String,
    inflection: String,
    tail: String,
    kind: MatchKind,
}

impl<'t> Match<'t> {
    pub fn entry(&self) -> &'t SlangEntry {
        self.entry
    }

    /// Lowercased part of the token covered by the entry, ending included
    pub fn consumed(&self) -> &str {
        &self.consumed
    }

    /// Ending absorbed after the match key (empty for exact noun matches)
    pub fn inflection(&self) -> &str {
        &self.inflection
    }

    /// Lowercased remainder that is not part of the match
    pub fn tail(&self) -> &str {
        &self.tail
    }

    /// Number of characters in [`Match::tail`]
    pub fn tail_chars(&self) -> usize {
        self.tail.chars().count()
    }

    pub fn kind(&self) -> MatchKind {
        self.kind
    }
}

/// Ordered, read-only collection of slang entries
///
/// Entries are kept sorted by descending slang length so that the first
/// match found is the longest one. Ties keep their insertion order.
#[derive(Debug, Clone)]
pub struct SlangTable {
    entries: Vec<SlangEntry>,
    index: HashMap<String, usize>,
    metadata: MetadataConfig,
}

impl SlangTable {
    /// Build a table, rejecting invalid entries and duplicate slang keys
    pub fn new(mut entries: Vec<SlangEntry>) -> Result<Self> {
        for entry in &entries {
            entry.validate()?;
        }

        entries.sort_by(|a, b| b.char_len().cmp(&a.char_len()));

        let mut index = HashMap::with_capacity(entries.len());
        for (position, entry) in entries.iter().enumerate() {
            if index.insert(entry.slang().to_string(), position).is_some() {
                return Err(CoreError::DuplicateEntry(entry.slang().to_string()));
            }
        }

        Ok(Self {
            entries,
            index,
            metadata: MetadataConfig::default(),
        })
    }

    pub(crate) fn with_metadata(mut self, metadata: MetadataConfig) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn metadata(&self) -> &MetadataConfig {
        &self.metadata
    }

    /// Entries in match order
    pub fn entries(&self) -> &[SlangEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for an exact slang key
    pub fn get(&self, slang: &str) -> Option<&SlangEntry> {
        self.index
            .get(&slang.to_lowercase())
            .map(|&position| &self.entries[position])
    }

    /// Find the entry for a word using the default (prefix) policy
    pub fn lookup(&self, word: &str) -> Option<Match<'_>> {
        self.lookup_with(word, MatchPolicy::default())
    }

    /// Find the entry for a word (punctuation already stripped)
    pub fn lookup_with(&self, word: &str, policy: MatchPolicy) -> Option<Match<'_>> {
        let lowered = word.to_lowercase();
        if lowered.is_empty() {
            return None;
        }

        self.entries
            .iter()
            .find_map(|entry| match_entry(entry, &lowered, policy))
    }
}

fn match_entry<'t>(entry: &'t SlangEntry, word: &str, policy: MatchPolicy) -> Option<Match<'t>> {
    let stem = entry.stem();

    if word == entry.slang() {
        return Some(Match {
            entry,
            consumed: word.to_string(),
            inflection: word.get(stem.len()..).unwrap_or_default().to_string(),
            tail: String::new(),
            kind: MatchKind::Exact,
        });
    }

    if let Some(rest) = word.strip_prefix(stem) {
        let inflected = match entry.part_of_speech() {
            PartOfSpeech::Noun => suffix::is_noun_inflection(rest),
            PartOfSpeech::Verb => suffix::is_verb_inflection_of(stem, rest),
            _ => false,
        };
        if inflected {
            return Some(Match {
                entry,
                consumed: word.to_string(),
                inflection: rest.to_string(),
                tail: String::new(),
                kind: MatchKind::Inflected,
            });
        }
    }

    if policy == MatchPolicy::Prefix {
        if let Some(rest) = word.strip_prefix(entry.slang()) {
            return Some(Match {
                entry,
                consumed: entry.slang().to_string(),
                inflection: entry.slang().get(stem.len()..).unwrap_or_default().to_string(),
                tail: rest.to_string(),
                kind: MatchKind::Prefix,
            });
        }
    }

    None
}
