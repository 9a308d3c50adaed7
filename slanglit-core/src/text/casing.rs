//! Carrying the letter case of a slang word over to its replacement

/// Whether the word is written in capitals (at least two letters, none lowercase)
pub fn is_shouted(word: &str) -> bool {
    let mut letters = word.chars().filter(|c| c.is_alphabetic()).peekable();
    if letters.peek().is_none() {
        return false;
    }

    let mut count = 0;
    for letter in letters {
        if !letter.is_uppercase() {
            return false;
        }
        count += 1;
    }
    count >= 2
}

/// Apply the case pattern of `source` to `replacement`.
///
/// A shouted source uppercases the whole replacement; otherwise only the
/// first letter follows the source's first letter.
pub fn mirror_case(source: &str, replacement: &str) -> String {
    if is_shouted(source) {
        return replacement.to_uppercase();
    }

    let Some(first) = source.chars().next() else {
        return replacement.to_string();
    };

    let mut chars = replacement.chars();
    let Some(head) = chars.next() else {
        return String::new();
    };

    let mut result = String::with_capacity(replacement.len());
    if first.is_uppercase() {
        result.extend(head.to_uppercase());
    } else if first.is_lowercase() {
        result.extend(head.to_lowercase());
    } else {
        result.push(head);
    }
    result.push_str(chars.as_str());
    result
}
