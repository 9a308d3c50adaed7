//! On-disk dictionary schema
//!
//! The same structure is read from TOML and JSON.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::entry::{check_keys, Gender, NounCase, PartOfSpeech, SlangEntry, VerbForm};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    #[serde(default)]
    pub metadata: MetadataConfig,
    #[serde(default)]
    pub entries: Vec<EntryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataConfig {
    pub code: String,
    pub name: String,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            code: "ru".to_string(),
            name: "Russian slang".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryConfig {
    pub slang: String,
    pub normal: String,
    pub part_of_speech: PartOfSpeech,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal_gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub cases: BTreeMap<NounCase, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conjugations: BTreeMap<VerbForm, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl EntryConfig {
    /// Validate and convert into a [`SlangEntry`]
    pub fn into_entry(self) -> Result<SlangEntry> {
        let slang = self.slang.trim().to_lowercase();
        check_keys(&slang, &self.normal)?;

        match self.part_of_speech {
            PartOfSpeech::Noun => {
                if !self.conjugations.is_empty() {
                    log::warn!("Noun '{slang}' has conjugations; they will be ignored");
                }
                let missing: Vec<_> = NounCase::ALL
                    .iter()
                    .filter(|case| !self.cases.contains_key(*case))
                    .map(|case| case.as_str())
                    .collect();
                if !missing.is_empty() {
                    log::debug!("Noun '{slang}' lacks cases {missing:?}; using normal form");
                }
            }
            PartOfSpeech::Verb => {
                if !self.cases.is_empty() {
                    log::warn!("Verb '{slang}' has cases; they will be ignored");
                }
            }
            _ => {
                if !self.cases.is_empty() || !self.conjugations.is_empty() {
                    log::warn!(
                        "'{slang}' is a {} and cannot be inflected; tables ignored",
                        self.part_of_speech
                    );
                }
            }
        }

        let mut entry = SlangEntry::new(slang, self.normal, self.part_of_speech)
            .with_description(self.meaning, self.example, self.category);
        entry.set_gender(self.gender, self.normal_gender);
        match self.part_of_speech {
            PartOfSpeech::Noun => entry.set_cases(self.cases),
            PartOfSpeech::Verb => entry.set_conjugations(self.conjugations),
            _ => {}
        }

        Ok(entry)
    }
}

impl DictionaryConfig {
    /// Validate every entry, rejecting duplicates and empty dictionaries
    pub fn into_entries(self) -> Result<Vec<SlangEntry>> {
        if self.entries.is_empty() {
            return Err(CoreError::EmptyDictionary);
        }

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(self.entries.len());
        for config in self.entries {
            let entry = config.into_entry()?;
            if !seen.insert(entry.slang().to_string()) {
                return Err(CoreError::DuplicateEntry(entry.slang().to_string()));
            }
            entries.push(entry);
        }

        Ok(entries)
    }
}

impl From<&SlangEntry> for EntryConfig {
    fn from(entry: &SlangEntry) -> Self {
        Self {
            slang: entry.slang().to_string(),
            normal: entry.normal().to_string(),
            part_of_speech: entry.part_of_speech(),
            gender: entry.gender(),
            normal_gender: entry.normal_gender(),
            cases: entry.cases().clone(),
            conjugations: entry.conjugations().clone(),
            meaning: entry.meaning().map(str::to_string),
            example: entry.example().map(str::to_string),
            category: entry.category().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(slang: &str, normal: &str, part_of_speech: PartOfSpeech) -> EntryConfig {
        EntryConfig {
            slang: slang.to_string(),
            normal: normal.to_string(),
            part_of_speech,
            gender: None,
            normal_gender: None,
            cases: BTreeMap::new(),
            conjugations: BTreeMap::new(),
            meaning: None,
            example: None,
            category: None,
        }
    }

    #[test]
    fn test_entry_conversion_normalises_slang() {
        let mut config = entry("  Кринж ", "стыд", PartOfSpeech::Noun);
        config.cases.insert(NounCase::Genitive, "стыда".to_string());
        let converted = config.into_entry().unwrap();
        assert_eq!(converted.slang(), "кринж");
        assert_eq!(converted.case_form(NounCase::Genitive), "стыда");
    }

    #[test]
    fn test_tables_dropped_for_uninflected_entries() {
        let mut config = entry("изи", "легко", PartOfSpeech::Adverb);
        config.cases.insert(NounCase::Genitive, "легка".to_string());
        let converted = config.into_entry().unwrap();
        assert!(converted.cases().is_empty());
    }

    #[test]
    fn test_invalid_entries() {
        match entry("", "стыд", PartOfSpeech::Noun).into_entry() {
            Err(CoreError::InvalidEntry { reason, .. }) => assert!(reason.contains("empty")),
            other => panic!("Expected InvalidEntry, got {other:?}"),
        }
        assert!(matches!(
            entry("кринж", "  ", PartOfSpeech::Noun).into_entry(),
            Err(CoreError::InvalidEntry { .. })
        ));
        assert!(matches!(
            entry("два слова", "стыд", PartOfSpeech::Noun).into_entry(),
            Err(CoreError::InvalidEntry { .. })
        ));
    }

    #[test]
    fn test_duplicates_rejected_case_insensitively() {
        let config = DictionaryConfig {
            metadata: MetadataConfig::default(),
            entries: vec![
                entry("кринж", "стыд", PartOfSpeech::Noun),
                entry("КРИНЖ", "позор", PartOfSpeech::Noun),
            ],
        };
        match config.into_entries() {
            Err(CoreError::DuplicateEntry(slang)) => assert_eq!(slang, "кринж"),
            other => panic!("Expected DuplicateEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_dictionary() {
        let config = DictionaryConfig {
            metadata: MetadataConfig::default(),
            entries: vec![],
        };
        assert!(matches!(config.into_entries(), Err(CoreError::EmptyDictionary)));
    }
}
