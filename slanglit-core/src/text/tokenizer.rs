//! Lossless whitespace tokenizer
//!
//! Text is cut into alternating runs of whitespace and non-whitespace.
//! Concatenating the token texts always yields the input unchanged.

use serde::Serialize;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// Contains at least one letter or digit; a lookup candidate
    Word,
    /// A run of whitespace
    Whitespace,
    /// Non-whitespace without letters or digits
    Punctuation,
}

/// A slice of the input with its byte span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    pub start: usize,
    pub end: usize,
}

/// A word token split into punctuation wrapping and the word itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordParts<'a> {
    pub leading: &'a str,
    pub core: &'a str,
    pub trailing: &'a str,
}

impl<'a> Token<'a> {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Split off leading and trailing non-alphanumeric characters.
    ///
    /// Inner punctuation (`из-за`) stays in the core.
    pub fn parts(&self) -> WordParts<'a> {
        let text = self.text;
        let without_leading = text.trim_start_matches(|c: char| !c.is_alphanumeric());
        let core = without_leading.trim_end_matches(|c: char| !c.is_alphanumeric());

        let leading_len = text.len() - without_leading.len();
        let trailing_start = leading_len + core.len();

        WordParts {
            leading: &text[..leading_len],
            core,
            trailing: &text[trailing_start..],
        }
    }

    /// Lowercased core, used to compare neighbouring words
    pub fn normalized(&self) -> String {
        self.parts().core.to_lowercase()
    }
}

/// Split text into whitespace and non-whitespace runs
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let whitespace = ch.is_whitespace();
        let mut end = start + ch.len_utf8();

        while let Some(&(index, next_ch)) = chars.peek() {
            if next_ch.is_whitespace() != whitespace {
                break;
            }
            end = index + next_ch.len_utf8();
            chars.next();
        }

        let slice = &text[start..end];
        let kind = if whitespace {
            TokenKind::Whitespace
        } else if slice.chars().any(char::is_alphanumeric) {
            TokenKind::Word
        } else {
            TokenKind::Punctuation
        };

        tokens.push(Token {
            text: slice,
            kind,
            start,
            end,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(|token| token.text).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_whitespace_runs_are_kept() {
        let tokens = tokenize("Мы  чиллим\tтут");
        assert_eq!(texts(&tokens), vec!["Мы", "  ", "чиллим", "\t", "тут"]);
        assert_eq!(tokens[1].kind, TokenKind::Whitespace);
    }

    #[test]
    fn test_punctuation_only_tokens() {
        let tokens = tokenize("краш — это ...");
        let kinds: Vec<_> = tokens.iter().map(|token| token.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Whitespace,
                TokenKind::Punctuation,
                TokenKind::Whitespace,
                TokenKind::Word,
                TokenKind::Whitespace,
                TokenKind::Punctuation,
            ]
        );
    }

    #[test]
    fn test_byte_spans() {
        let text = " вайб, да";
        for token in tokenize(text) {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_lossless_reassembly() {
        let text = "  «Краш»,  ты   где?!\n\nИз-за вайба… 2 часа ";
        let joined: String = tokenize(text).iter().map(|token| token.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_word_parts() {
        let tokens = tokenize("«Краш»,");
        let parts = tokens[0].parts();
        assert_eq!(parts.leading, "«");
        assert_eq!(parts.core, "Краш");
        assert_eq!(parts.trailing, "»,");
        assert_eq!(tokens[0].normalized(), "краш");
    }

    #[test]
    fn test_inner_punctuation_stays_in_core() {
        let tokens = tokenize("из-за");
        assert_eq!(tokens[0].parts().core, "из-за");
        assert_eq!(tokens[0].parts().leading, "");
        assert_eq!(tokens[0].parts().trailing, "");
    }

    #[test]
    fn test_digits_make_a_word() {
        let tokens = tokenize("2");
        assert!(tokens[0].is_word());
    }
}
