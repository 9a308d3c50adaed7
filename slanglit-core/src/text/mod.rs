//! Text utilities: tokenization and case handling

pub mod casing;
pub mod tokenizer;

pub use casing::mirror_case;
pub use tokenizer::{tokenize, Token, TokenKind, WordParts};
