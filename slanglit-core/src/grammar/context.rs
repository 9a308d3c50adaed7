//! Context analysis: choosing the inflected form for a matched slang token
//!
//! Two independent signals are combined:
//! - the neighbouring word (a governing preposition for nouns, a subject
//!   pronoun for verbs);
//! - the token's own ending.
//!
//! Which one wins when both are present is governed by [`Precedence`].

use serde::Serialize;
use std::fmt;

use super::pronouns::SubjectPronoun;
use super::{prepositions, suffix};
use crate::config::Precedence;
use crate::dictionary::{Match, NounCase, PartOfSpeech, SlangEntry, VerbForm};

/// The form chosen for a replacement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "form", rename_all = "snake_case")]
pub enum ResolvedForm {
    /// Noun in the given case
    Case(NounCase),
    /// Conjugated verb
    Verb(VerbForm),
    /// Verb in the dictionary (infinitive) form
    Infinitive,
    /// No inflection applies; `normal` is used
    Normal,
}

impl ResolvedForm {
    /// Literary text for this form, falling back to `normal`
    pub fn render<'e>(&self, entry: &'e SlangEntry) -> &'e str {
        match self {
            ResolvedForm::Case(case) => entry.case_form(*case),
            ResolvedForm::Verb(form) => entry.verb_form(*form),
            ResolvedForm::Infinitive | ResolvedForm::Normal => entry.normal(),
        }
    }

    /// Dictionary key of the form (`genitive`, `past_f`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolvedForm::Case(case) => case.as_str(),
            ResolvedForm::Verb(form) => form.as_str(),
            ResolvedForm::Infinitive => "infinitive",
            ResolvedForm::Normal => "normal",
        }
    }
}

impl fmt::Display for ResolvedForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a matched slang token to an inflected form
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAnalyzer {
    precedence: Precedence,
}

impl ContextAnalyzer {
    pub fn new(precedence: Precedence) -> Self {
        Self { precedence }
    }

    /// Pick the form for `found`, given the lowercase cores of the nearest
    /// preceding and following words.
    pub fn resolve(&self, found: &Match<'_>, prev: Option<&str>, next: Option<&str>) -> ResolvedForm {
        match found.entry().part_of_speech() {
            PartOfSpeech::Noun => ResolvedForm::Case(self.noun_case(found, prev)),
            PartOfSpeech::Verb => self.verb_form(found, prev, next),
            PartOfSpeech::Adjective | PartOfSpeech::Adverb | PartOfSpeech::Expression => {
                ResolvedForm::Normal
            }
        }
    }

    fn noun_case(&self, found: &Match<'_>, prev: Option<&str>) -> NounCase {
        let from_context = prev.and_then(prepositions::governed_case);
        let from_suffix = suffix::noun_case(found.inflection());

        self.combine(from_context, from_suffix)
            .unwrap_or(NounCase::Nominative)
    }

    fn verb_form(&self, found: &Match<'_>, prev: Option<&str>, next: Option<&str>) -> ResolvedForm {
        let word = found.inflection();
        let past = suffix::is_past(word);
        let feminine = suffix::is_feminine_past(word);

        let from_context = prev
            .and_then(SubjectPronoun::from_word)
            .or_else(|| next.and_then(SubjectPronoun::from_word))
            .map(|pronoun| ResolvedForm::Verb(pronoun.verb_form(past, feminine)));

        let from_suffix = suffix::verb_signal(word).map(|signal| match signal {
            suffix::VerbSignal::Infinitive => ResolvedForm::Infinitive,
            suffix::VerbSignal::Form(form) => ResolvedForm::Verb(form),
        });

        self.combine(from_context, from_suffix)
            .unwrap_or(ResolvedForm::Verb(VerbForm::Present4))
    }

    fn combine<T>(&self, from_context: Option<T>, from_suffix: Option<T>) -> Option<T> {
        match self.precedence {
            Precedence::SuffixOverrides => from_suffix.or(from_context),
            Precedence::ContextFirst => from_context.or(from_suffix),
        }
    }
}
