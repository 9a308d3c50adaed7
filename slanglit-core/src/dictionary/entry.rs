//! Slang entries and their grammatical vocabulary

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{CoreError, Result};
use crate::grammar::suffix;

/// Part of speech of a slang term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    /// Noun, inflected by case
    Noun,
    /// Verb, inflected by person/number or past-tense gender
    Verb,
    /// Adjective (no inflection table)
    Adjective,
    /// Adverb (no inflection table)
    Adverb,
    /// Fixed expression (no inflection table)
    Expression,
}

impl PartOfSpeech {
    /// Lowercase name as used in dictionary files
    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Expression => "expression",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical case of a noun form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NounCase {
    /// Именительный
    Nominative,
    /// Родительный
    Genitive,
    /// Дательный
    Dative,
    /// Винительный
    Accusative,
    /// Творительный
    Instrumental,
    /// Предложный
    Prepositional,
}

impl NounCase {
    /// All six cases in traditional order
    pub const ALL: [NounCase; 6] = [
        NounCase::Nominative,
        NounCase::Genitive,
        NounCase::Dative,
        NounCase::Accusative,
        NounCase::Instrumental,
        NounCase::Prepositional,
    ];

    /// Key used in dictionary files
    pub fn as_str(&self) -> &'static str {
        match self {
            NounCase::Nominative => "nominative",
            NounCase::Genitive => "genitive",
            NounCase::Dative => "dative",
            NounCase::Accusative => "accusative",
            NounCase::Instrumental => "instrumental",
            NounCase::Prepositional => "prepositional",
        }
    }
}

/// Conjugated verb form
///
/// `Present1..Present6` follow я, ты, он/она/оно, мы, вы, они.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VerbForm {
    #[serde(rename = "present1")]
    Present1,
    #[serde(rename = "present2")]
    Present2,
    #[serde(rename = "present3")]
    Present3,
    #[serde(rename = "present4")]
    Present4,
    #[serde(rename = "present5")]
    Present5,
    #[serde(rename = "present6")]
    Present6,
    #[serde(rename = "past_m")]
    PastMasculine,
    #[serde(rename = "past_f")]
    PastFeminine,
    #[serde(rename = "past_n")]
    PastNeuter,
    #[serde(rename = "past_pl")]
    PastPlural,
}

impl VerbForm {
    /// All ten forms
    pub const ALL: [VerbForm; 10] = [
        VerbForm::Present1,
        VerbForm::Present2,
        VerbForm::Present3,
        VerbForm::Present4,
        VerbForm::Present5,
        VerbForm::Present6,
        VerbForm::PastMasculine,
        VerbForm::PastFeminine,
        VerbForm::PastNeuter,
        VerbForm::PastPlural,
    ];

    /// Key used in dictionary files
    pub fn as_str(&self) -> &'static str {
        match self {
            VerbForm::Present1 => "present1",
            VerbForm::Present2 => "present2",
            VerbForm::Present3 => "present3",
            VerbForm::Present4 => "present4",
            VerbForm::Present5 => "present5",
            VerbForm::Present6 => "present6",
            VerbForm::PastMasculine => "past_m",
            VerbForm::PastFeminine => "past_f",
            VerbForm::PastNeuter => "past_n",
            VerbForm::PastPlural => "past_pl",
        }
    }

    /// Whether this is one of the past-tense forms
    pub fn is_past(&self) -> bool {
        matches!(
            self,
            VerbForm::PastMasculine
                | VerbForm::PastFeminine
                | VerbForm::PastNeuter
                | VerbForm::PastPlural
        )
    }
}

/// Grammatical gender of a noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

/// A slang term with its literary replacement and inflection table
///
/// Entries are immutable once built. Missing inflection keys are not an
/// error: lookups of an absent form fall back to [`SlangEntry::normal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlangEntry {
    slang: String,
    normal: String,
    part_of_speech: PartOfSpeech,
    cases: BTreeMap<NounCase, String>,
    conjugations: BTreeMap<VerbForm, String>,
    gender: Option<Gender>,
    normal_gender: Option<Gender>,
    meaning: Option<String>,
    example: Option<String>,
    category: Option<String>,
    /// Match key: the slang itself, or the verb stem for verbs
    stem: String,
}

impl SlangEntry {
    /// Create an entry; the slang key is normalised to lowercase
    pub fn new(
        slang: impl Into<String>,
        normal: impl Into<String>,
        part_of_speech: PartOfSpeech,
    ) -> Self {
        let slang = slang.into().trim().to_lowercase();
        let stem = match part_of_speech {
            PartOfSpeech::Verb => suffix::verb_stem(&slang).to_string(),
            _ => slang.clone(),
        };

        Self {
            slang,
            normal: normal.into(),
            part_of_speech,
            cases: BTreeMap::new(),
            conjugations: BTreeMap::new(),
            gender: None,
            normal_gender: None,
            meaning: None,
            example: None,
            category: None,
            stem,
        }
    }

    /// Add a case form (nouns)
    pub fn with_case(mut self, case: NounCase, form: impl Into<String>) -> Self {
        self.cases.insert(case, form.into());
        self
    }

    /// Add a conjugated form (verbs)
    pub fn with_conjugation(mut self, form: VerbForm, text: impl Into<String>) -> Self {
        self.conjugations.insert(form, text.into());
        self
    }

    /// Set the gender of the slang noun and of its literary replacement
    pub fn with_genders(mut self, slang: Gender, normal: Gender) -> Self {
        self.gender = Some(slang);
        self.normal_gender = Some(normal);
        self
    }

    /// Attach descriptive metadata
    pub fn with_description(
        mut self,
        meaning: Option<String>,
        example: Option<String>,
        category: Option<String>,
    ) -> Self {
        self.meaning = meaning;
        self.example = example;
        self.category = category;
        self
    }

    pub(crate) fn set_gender(&mut self, gender: Option<Gender>, normal_gender: Option<Gender>) {
        self.gender = gender;
        self.normal_gender = normal_gender;
    }

    pub(crate) fn set_cases(&mut self, cases: BTreeMap<NounCase, String>) {
        self.cases = cases;
    }

    pub(crate) fn set_conjugations(&mut self, conjugations: BTreeMap<VerbForm, String>) {
        self.conjugations = conjugations;
    }

    /// Canonical lowercase slang form
    pub fn slang(&self) -> &str {
        &self.slang
    }

    /// Default literary replacement
    pub fn normal(&self) -> &str {
        &self.normal
    }

    pub fn part_of_speech(&self) -> PartOfSpeech {
        self.part_of_speech
    }

    /// The prefix tokens are matched against
    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    pub fn normal_gender(&self) -> Option<Gender> {
        self.normal_gender
    }

    pub fn meaning(&self) -> Option<&str> {
        self.meaning.as_deref()
    }

    pub fn example(&self) -> Option<&str> {
        self.example.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn cases(&self) -> &BTreeMap<NounCase, String> {
        &self.cases
    }

    pub fn conjugations(&self) -> &BTreeMap<VerbForm, String> {
        &self.conjugations
    }

    /// Literary form for a noun case, or `normal` when the table lacks it
    pub fn case_form(&self, case: NounCase) -> &str {
        self.cases
            .get(&case)
            .map(String::as_str)
            .filter(|form| !form.is_empty())
            .unwrap_or(&self.normal)
    }

    /// Literary form for a verb form, or `normal` when the table lacks it
    pub fn verb_form(&self, form: VerbForm) -> &str {
        self.conjugations
            .get(&form)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
            .unwrap_or(&self.normal)
    }

    /// Length of the slang key in characters (ordering key for longest match)
    pub fn char_len(&self) -> usize {
        self.slang.chars().count()
    }

    /// Whether the replacement needs its preceding modifier re-inflected
    pub fn changes_gender(&self) -> bool {
        matches!((self.gender, self.normal_gender), (Some(a), Some(b)) if a != b)
    }

    /// Reject entries that would match every word or replace with nothing
    pub fn validate(&self) -> Result<()> {
        check_keys(&self.slang, &self.normal)
    }
}

/// Shared checks for a lowercased slang key and its replacement
pub(crate) fn check_keys(slang: &str, normal: &str) -> Result<()> {
    let reason = if slang.is_empty() {
        "slang must not be empty"
    } else if slang.chars().any(char::is_whitespace) {
        "slang must be a single word"
    } else if normal.trim().is_empty() {
        "normal form must not be empty"
    } else {
        return Ok(());
    };

    Err(CoreError::InvalidEntry {
        slang: slang.to_string(),
        reason: reason.to_string(),
    })
}
