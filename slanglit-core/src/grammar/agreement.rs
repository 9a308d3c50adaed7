//! Re-inflection of an adjective preceding a replaced noun
//!
//! When a slang noun is replaced by a literary noun of another gender, the
//! modifier in front of it must follow: `хорошего вайба` (masc.) becomes
//! `хорошей атмосферы` (fem.). Only full-form adjective endings in the
//! singular are handled.

use crate::dictionary::{Gender, NounCase};

/// Words whose endings look adjectival but do not decline like adjectives
const NON_ADJECTIVES: &[&str] = &[
    "мой", "твой", "свой", "его", "много", "немного", "того", "всего", "чего", "ничего", "кого",
    "никого", "сколько", "столько",
];

/// Shortest stem (in chars) an ending may be cut from
const MIN_STEM_CHARS: usize = 2;

/// Hard and soft adjective endings for a case and gender
fn endings(case: NounCase, gender: Gender) -> [&'static str; 2] {
    use Gender::*;
    use NounCase::*;

    match (case, gender) {
        (Nominative, Masculine) | (Accusative, Masculine) => ["ый", "ий"],
        (Nominative, Feminine) => ["ая", "яя"],
        (Nominative, Neuter) | (Accusative, Neuter) => ["ое", "ее"],
        (Genitive, Masculine) | (Genitive, Neuter) => ["ого", "его"],
        (Dative, Masculine) | (Dative, Neuter) => ["ому", "ему"],
        (Accusative, Feminine) => ["ую", "юю"],
        (Instrumental, Masculine) | (Instrumental, Neuter) => ["ым", "им"],
        (Prepositional, Masculine) | (Prepositional, Neuter) => ["ом", "ем"],
        (Genitive | Dative | Instrumental | Prepositional, Feminine) => ["ой", "ей"],
    }
}

/// Locate the ending of `word` among the endings for `case`/`gender`.
/// Returns the variant index (0 hard, 1 soft) and the ending length in chars.
fn find_ending(word: &str, case: NounCase, gender: Gender) -> Option<(usize, usize)> {
    let found = endings(case, gender)
        .iter()
        .position(|ending| word.ends_with(ending))
        .map(|variant| (variant, endings(case, gender)[variant].chars().count()));

    // stressed masculine -ой (большой) declines like the hard variant
    found.or_else(|| {
        let stressed = gender == Gender::Masculine
            && matches!(case, NounCase::Nominative | NounCase::Accusative)
            && word.ends_with("ой");
        stressed.then_some((0, 2))
    })
}

/// Re-inflect `word` from `from` gender to `to` gender in `case`.
///
/// Returns `None` when the word does not carry an adjective ending of the
/// source gender or no change is needed.
pub fn reinflect(word: &str, case: NounCase, from: Gender, to: Gender) -> Option<String> {
    if from == to {
        return None;
    }

    let lower = word.to_lowercase();
    if NON_ADJECTIVES.contains(&lower.as_str()) {
        return None;
    }

    let (mut variant, ending_chars) = find_ending(&lower, case, from)?;
    let total_chars = lower.chars().count();
    if total_chars < ending_chars + MIN_STEM_CHARS {
        return None;
    }

    let stem: String = word.chars().take(total_chars - ending_chars).collect();
    let last = stem.chars().last()?.to_lowercase().next()?;

    let velar = matches!(last, 'к' | 'г' | 'х');
    let sibilant = matches!(last, 'ж' | 'ш' | 'ч' | 'щ');
    if velar {
        variant = 0;
    }

    let mut ending = endings(case, to)[variant].to_string();
    if velar || sibilant {
        ending = spell_after_hushing(&ending);
    }

    let upper = word.chars().last().is_some_and(char::is_uppercase);
    if upper {
        ending = ending.to_uppercase();
    }

    Some(format!("{stem}{ending}"))
}

/// Russian spelling rule: no я/ю/ы after velars and hushing consonants
fn spell_after_hushing(ending: &str) -> String {
    let mut chars = ending.chars();
    let first = match chars.next() {
        Some('я') => 'а',
        Some('ю') => 'у',
        Some('ы') => 'и',
        Some(other) => other,
        None => return String::new(),
    };
    std::iter::once(first).chain(chars).collect()
}
