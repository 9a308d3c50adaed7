//! Context-aware replacement of Russian youth slang with literary Russian
//!
//! Slang words are looked up in a [`SlangTable`] and replaced with an
//! inflected literary form. The form is chosen from two signals: the
//! neighbouring word (a governing preposition for nouns, a subject pronoun
//! for verbs) and the slang word's own ending.
//!
//! # Architecture
//!
//! - **dictionary**: slang entries, longest-match lookup, TOML/JSON loading
//! - **text**: lossless tokenizer and case mirroring
//! - **grammar**: preposition/pronoun tables, ending heuristics, agreement
//! - **transform**: orchestration and the replacement report
//!
//! # Example
//!
//! ```rust
//! use slanglit_core::{builtin_table, transform};
//!
//! let output = transform("Я агрюсь.", builtin_table());
//! assert_eq!(output.transformed, "Я злюсь.");
//! assert!(output.has_slang);
//!
//! let output = transform("Мы чиллим с крашем", builtin_table());
//! assert_eq!(output.transformed, "Мы отдыхаем с объектом обожания");
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod grammar;
pub mod text;
pub mod transform;

pub use config::{MatchPolicy, Precedence, TransformConfig, TransformConfigBuilder, TransformMode};
pub use dictionary::{
    builtin_table, Gender, Match, MatchKind, NounCase, PartOfSpeech, SlangEntry, SlangTable,
    VerbForm,
};
pub use error::{CoreError, Result};
pub use grammar::{ContextAnalyzer, ResolvedForm};
pub use text::{tokenize, Token, TokenKind};
pub use transform::{transform, Replacement, ReplacementKind, TransformOutput, Transformer};
