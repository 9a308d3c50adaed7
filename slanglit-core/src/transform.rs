//! Text transformation: tokenize, look up, resolve, reassemble

use serde::Serialize;
use std::borrow::Cow;

use crate::config::{TransformConfig, TransformMode};
use crate::dictionary::{Match, SlangTable};
use crate::grammar::{agreement, ContextAnalyzer, ResolvedForm};
use crate::text::{mirror_case, tokenize, Token, TokenKind};

/// Why a span was rewritten
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplacementKind {
    /// A slang word replaced by (or annotated with) its literary form
    Slang,
    /// A modifier re-inflected to agree with a replaced noun
    Agreement,
}

/// A single rewritten span of the input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Replacement {
    /// Text of the span in the input
    pub original: String,
    /// Text written in its place
    pub replacement: String,
    /// Dictionary key of the entry involved
    pub slang: String,
    pub form: ResolvedForm,
    pub kind: ReplacementKind,
    /// Byte offset of the span in the input
    pub start: usize,
    pub end: usize,
}

/// Result of transforming a text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TransformOutput {
    pub transformed: String,
    pub has_slang: bool,
    /// Rewritten spans ordered by position
    pub replacements: Vec<Replacement>,
}

/// Replaces slang in text using a [`SlangTable`]
///
/// A transformer borrows its table and holds no other state, so one instance
/// can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Transformer<'t> {
    table: &'t SlangTable,
    config: TransformConfig,
    analyzer: ContextAnalyzer,
}

impl<'t> Transformer<'t> {
    /// Transformer with the default configuration
    pub fn new(table: &'t SlangTable) -> Self {
        Self::with_config(table, TransformConfig::default())
    }

    pub fn with_config(table: &'t SlangTable, config: TransformConfig) -> Self {
        Self {
            table,
            config,
            analyzer: ContextAnalyzer::new(config.precedence),
        }
    }

    pub fn config(&self) -> &TransformConfig {
        &self.config
    }

    pub fn table(&self) -> &'t SlangTable {
        self.table
    }

    /// Rewrite every slang word in `text`
    pub fn transform(&self, text: &str) -> TransformOutput {
        if text.is_empty() {
            return TransformOutput::default();
        }

        let tokens = tokenize(text);
        let words: Vec<usize> = tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.is_word())
            .map(|(index, _)| index)
            .collect();

        let mut output: Vec<Cow<'_, str>> = tokens.iter().map(|t| Cow::Borrowed(t.text)).collect();
        let mut replaced = vec![false; tokens.len()];
        let mut replacements = Vec::new();

        for (position, &index) in words.iter().enumerate() {
            let token = &tokens[index];
            let parts = token.parts();
            let Some(found) = self.table.lookup_with(parts.core, self.config.match_policy) else {
                continue;
            };

            let prev = position
                .checked_sub(1)
                .map(|p| tokens[words[p]].normalized());
            let next = words.get(position + 1).map(|&n| tokens[n].normalized());
            let form = self.analyzer.resolve(&found, prev.as_deref(), next.as_deref());

            let literary = format!(
                "{}{}",
                mirror_case(parts.core, form.render(found.entry())),
                original_tail(parts.core, &found)
            );
            let rewritten = match self.config.mode {
                TransformMode::Replace => literary,
                TransformMode::Annotate => format!("{} ({literary})", parts.core),
            };

            log::debug!(
                "'{}' -> '{}' via '{}' ({:?}, {:?})",
                parts.core,
                rewritten,
                found.entry().slang(),
                found.kind(),
                form
            );

            let start = token.start + parts.leading.len();
            output[index] = Cow::Owned(format!("{}{rewritten}{}", parts.leading, parts.trailing));
            replaced[index] = true;
            replacements.push(Replacement {
                original: parts.core.to_string(),
                replacement: rewritten,
                slang: found.entry().slang().to_string(),
                form,
                kind: ReplacementKind::Slang,
                start,
                end: start + parts.core.len(),
            });

            if let Some(agreed) = self.agree_modifier(&tokens, &replaced, index, &found, form) {
                output[agreed.index] = Cow::Owned(agreed.text);
                replaced[agreed.index] = true;
                replacements.push(agreed.replacement);
            }
        }

        replacements.sort_by_key(|replacement| replacement.start);

        TransformOutput {
            transformed: output.concat(),
            has_slang: replacements
                .iter()
                .any(|replacement| replacement.kind == ReplacementKind::Slang),
            replacements,
        }
    }

    /// Re-inflect the word right before a noun whose replacement has
    /// another gender. Only plain whitespace may separate the two.
    fn agree_modifier(
        &self,
        tokens: &[Token<'_>],
        replaced: &[bool],
        index: usize,
        found: &Match<'_>,
        form: ResolvedForm,
    ) -> Option<AgreedModifier> {
        if !self.config.agree_modifiers || self.config.mode != TransformMode::Replace {
            return None;
        }

        let entry = found.entry();
        let (ResolvedForm::Case(case), Some(from), Some(to)) =
            (form, entry.gender(), entry.normal_gender())
        else {
            return None;
        };
        if from == to || index < 2 || tokens[index - 1].kind != TokenKind::Whitespace {
            return None;
        }

        let modifier = &tokens[index - 2];
        if !modifier.is_word() || replaced[index - 2] || !tokens[index].parts().leading.is_empty() {
            return None;
        }

        let parts = modifier.parts();
        if !parts.trailing.is_empty() {
            return None;
        }

        let inflected = agreement::reinflect(parts.core, case, from, to)?;
        if inflected == parts.core {
            return None;
        }

        log::trace!("Agreement: '{}' -> '{}'", parts.core, inflected);

        let start = modifier.start + parts.leading.len();
        Some(AgreedModifier {
            index: index - 2,
            text: format!("{}{inflected}", parts.leading),
            replacement: Replacement {
                original: parts.core.to_string(),
                replacement: inflected,
                slang: entry.slang().to_string(),
                form,
                kind: ReplacementKind::Agreement,
                start,
                end: start + parts.core.len(),
            },
        })
    }
}

struct AgreedModifier {
    index: usize,
    text: String,
    replacement: Replacement,
}

/// The unmatched remainder of a legacy prefix match, in its original case
///
/// Lowercasing may change a character's length, so the original core is
/// walked until its lowercase form covers the consumed part.
fn original_tail<'a>(core: &'a str, found: &Match<'_>) -> &'a str {
    if found.tail().is_empty() {
        return "";
    }

    let consumed = found.consumed().len();
    let mut covered = 0;
    for (offset, ch) in core.char_indices() {
        if covered >= consumed {
            return &core[offset..];
        }
        covered += ch.to_lowercase().map(char::len_utf8).sum::<usize>();
    }
    ""
}

/// Transform `text` with the default configuration
pub fn transform(text: &str, table: &SlangTable) -> TransformOutput {
    Transformer::new(table).transform(text)
}
