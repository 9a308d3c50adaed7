//! Transformation settings

use serde::{Deserialize, Serialize};

/// What to do with a recognised slang word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMode {
    /// Substitute the literary form
    #[default]
    Replace,
    /// Keep the slang word and add the literary form in parentheses
    Annotate,
}

/// Which token shapes count as a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// A token starting with the slang word matches whatever follows it;
    /// unrecognised remainders are appended to the replacement.
    #[default]
    Prefix,
    /// Only recognised inflectional endings may follow the match key
    StrictSuffix,
}

/// Which signal wins when context and ending disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    /// The word's own ending overrides the preposition or pronoun
    #[default]
    SuffixOverrides,
    /// The preposition or pronoun overrides the ending
    ContextFirst,
}

/// Settings for a [`Transformer`](crate::Transformer)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    pub mode: TransformMode,
    pub match_policy: MatchPolicy,
    pub precedence: Precedence,
    /// Re-inflect the adjective before a noun whose replacement changes gender
    pub agree_modifiers: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            mode: TransformMode::Replace,
            match_policy: MatchPolicy::Prefix,
            precedence: Precedence::SuffixOverrides,
            agree_modifiers: true,
        }
    }
}

impl TransformConfig {
    /// Strict matching with context taking precedence
    pub fn strict() -> Self {
        Self {
            match_policy: MatchPolicy::StrictSuffix,
            precedence: Precedence::ContextFirst,
            ..Self::default()
        }
    }

    /// Annotate instead of replacing
    pub fn annotate() -> Self {
        Self {
            mode: TransformMode::Annotate,
            ..Self::default()
        }
    }

    pub fn builder() -> TransformConfigBuilder {
        TransformConfigBuilder::default()
    }
}

/// Builder for [`TransformConfig`]
#[derive(Debug, Default)]
pub struct TransformConfigBuilder {
    config: TransformConfig,
}

impl TransformConfigBuilder {
    pub fn mode(mut self, mode: TransformMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn match_policy(mut self, policy: MatchPolicy) -> Self {
        self.config.match_policy = policy;
        self
    }

    pub fn precedence(mut self, precedence: Precedence) -> Self {
        self.config.precedence = precedence;
        self
    }

    pub fn agree_modifiers(mut self, enabled: bool) -> Self {
        self.config.agree_modifiers = enabled;
        self
    }

    pub fn build(self) -> TransformConfig {
        self.config
    }
}
