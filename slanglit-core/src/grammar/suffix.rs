//! Ending heuristics
//!
//! Slang words are borrowed roots glued to ordinary Russian endings, so the
//! ending left after the root is the only morphological signal available.
//! These tables are small. They recognise only the endings regular
//! first-conjugation and second-conjugation verbs and hard/soft nouns take.

use crate::dictionary::{NounCase, VerbForm};

/// Infinitive endings stripped to obtain a verb stem, longest first
const INFINITIVE_ENDINGS: &[&str] = &[
    "иться", "аться", "яться", "еться", "ться", "ить", "ать", "ять", "еть", "ть",
];

/// Endings a noun root may carry
const NOUN_ENDINGS: &[&str] = &[
    "а", "я", "у", "ю", "е", "ы", "и", "ом", "ем", "ём", "ой", "ей", "ов", "ев", "ам", "ям",
    "ами", "ями", "ах", "ях",
];

/// Endings a verb stem may carry, before the optional reflexive particle
const VERB_ENDINGS: &[&str] = &[
    // infinitive
    "ить", "ать", "ять", "еть", "ть",
    // present, second conjugation
    "ю", "у", "ишь", "ит", "им", "ите", "ят", "ат",
    // present, first conjugation
    "ешь", "ет", "ем", "ете", "ют", "ут",
    // present of -ать/-ять verbs
    "аю", "аешь", "ает", "аем", "аете", "ают", "яю", "яешь", "яет", "яем", "яете", "яют",
    // past
    "л", "ла", "ло", "ли", "ил", "ила", "ило", "или", "ал", "ала", "ало", "али", "ял", "яла",
    "яло", "яли", "ел", "ела", "ело", "ели",
    // imperative
    "и", "ь", "ьте", "ай", "айте", "яй", "яйте",
];

const REFLEXIVE: &[&str] = &["ся", "сь"];

fn ends_with_any(word: &str, endings: &[&str]) -> bool {
    endings.iter().any(|ending| word.ends_with(ending))
}

/// Strip the infinitive ending off a verb, keeping at least one character
pub fn verb_stem(infinitive: &str) -> &str {
    INFINITIVE_ENDINGS
        .iter()
        .filter_map(|ending| infinitive.strip_suffix(ending))
        .find(|stem| !stem.is_empty())
        .unwrap_or(infinitive)
}

/// Remove a trailing reflexive particle (`ся`/`сь`)
pub fn strip_reflexive(word: &str) -> &str {
    REFLEXIVE
        .iter()
        .filter_map(|particle| word.strip_suffix(particle))
        .find(|base| !base.is_empty())
        .unwrap_or(word)
}

/// Whether `rest` is a plausible noun ending
pub fn is_noun_inflection(rest: &str) -> bool {
    NOUN_ENDINGS.contains(&rest)
}

/// Whether `rest` is a plausible verb ending, reflexive particle included
pub fn is_verb_inflection(rest: &str) -> bool {
    VERB_ENDINGS.contains(&rest)
        || REFLEXIVE.iter().any(|particle| {
            rest.strip_suffix(particle)
                .is_some_and(|base| VERB_ENDINGS.contains(&base))
        })
}

/// Whether `rest` is a usable ending for the verb `stem`
///
/// A one-letter imperative (`и`, `ь`) is refused when stem and ending
/// together read as another form: `чилл` + `и` looks like the past `-ли`.
pub fn is_verb_inflection_of(stem: &str, rest: &str) -> bool {
    if !is_verb_inflection(rest) {
        return false;
    }

    let base = strip_reflexive(rest);
    if !matches!(base, "и" | "ь") {
        return true;
    }

    let joined = format!("{stem}{base}");
    !is_past(&joined) && verb_signal(&joined).is_none()
}

/// Case signalled by a noun ending
///
/// Checked in a fixed order; the first matching group wins.
pub fn noun_case(inflection: &str) -> Option<NounCase> {
    if inflection.is_empty() {
        None
    } else if ends_with_any(inflection, &["ом", "ем", "ой", "ей"]) {
        Some(NounCase::Instrumental)
    } else if ends_with_any(inflection, &["е"]) {
        Some(NounCase::Prepositional)
    } else if ends_with_any(inflection, &["а", "я", "ы", "ов"]) {
        Some(NounCase::Genitive)
    } else if ends_with_any(inflection, &["у", "ю"]) {
        Some(NounCase::Accusative)
    } else {
        None
    }
}

/// What a verb's own ending says about the form to use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbSignal {
    /// Dictionary form; the literary infinitive applies
    Infinitive,
    /// A specific conjugated form
    Form(VerbForm),
}

/// Whether the (reflexive-stripped) word is a past-tense form
pub fn is_past(word: &str) -> bool {
    let base = strip_reflexive(word);
    ends_with_any(base, &["л", "ла", "ло", "ли"])
}

/// Whether a past-tense word carries the feminine `-ла`
pub fn is_feminine_past(word: &str) -> bool {
    strip_reflexive(word).ends_with("ла")
}

/// Form signalled by a verb's ending
pub fn verb_signal(word: &str) -> Option<VerbSignal> {
    let base = strip_reflexive(word);

    if base.ends_with("ть") {
        return Some(VerbSignal::Infinitive);
    }

    let form = if is_past(base) {
        if base.ends_with('л') {
            VerbForm::PastMasculine
        } else if base.ends_with("ла") {
            VerbForm::PastFeminine
        } else if base.ends_with("ло") {
            VerbForm::PastNeuter
        } else {
            VerbForm::PastPlural
        }
    } else if ends_with_any(base, &["ю", "у"]) {
        VerbForm::Present1
    } else if ends_with_any(base, &["шь"]) {
        VerbForm::Present2
    } else if ends_with_any(base, &["ет", "ит"]) {
        VerbForm::Present3
    } else if ends_with_any(base, &["ем", "им"]) {
        VerbForm::Present4
    } else if ends_with_any(base, &["ете", "ите"]) {
        VerbForm::Present5
    } else if ends_with_any(base, &["ют", "ут", "ят", "ат"]) {
        VerbForm::Present6
    } else {
        return None;
    };

    Some(VerbSignal::Form(form))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verb_stem() {
        assert_eq!(verb_stem("агриться"), "агр");
        assert_eq!(verb_stem("хейтить"), "хейт");
        assert_eq!(verb_stem("юзать"), "юз");
        assert_eq!(verb_stem("го"), "го");
        assert_eq!(verb_stem("ть"), "ть");
    }

    #[test]
    fn test_strip_reflexive() {
        assert_eq!(strip_reflexive("агрюсь"), "агрю");
        assert_eq!(strip_reflexive("агрятся"), "агрят");
        assert_eq!(strip_reflexive("флексим"), "флексим");
        assert_eq!(strip_reflexive("ся"), "ся");
    }

    #[test]
    fn test_verb_inflections() {
        for rest in ["им", "юсь", "ятся", "илась", "ишь", "ить", "аю", "ь"] {
            assert!(is_verb_inflection(rest), "{rest} should be accepted");
        }
        for rest in ["ессия", "ер", "", "ся"] {
            assert!(!is_verb_inflection(rest), "{rest} should be rejected");
        }
    }

    #[test]
    fn test_short_imperatives_need_an_unambiguous_stem() {
        assert!(is_verb_inflection_of("хейт", "и"));
        assert!(is_verb_inflection_of("флекс", "ь"));
        assert!(is_verb_inflection_of("агр", "ись"));
        // would read as past plural and infinitive
        assert!(!is_verb_inflection_of("чилл", "и"));
        assert!(!is_verb_inflection_of("рофл", "и"));
        assert!(!is_verb_inflection_of("хейт", "ь"));
        assert!(is_verb_inflection_of("чилл", "или"));
        assert!(!is_verb_inflection_of("чилл", "ер"));
    }

    #[test]
    fn test_noun_inflections() {
        assert!(is_noun_inflection("а"));
        assert!(is_noun_inflection("ами"));
        assert!(!is_noun_inflection("ение"));
        assert!(!is_noun_inflection(""));
    }

    #[test]
    fn test_noun_case_order() {
        assert_eq!(noun_case("ом"), Some(NounCase::Instrumental));
        assert_eq!(noun_case("ей"), Some(NounCase::Instrumental));
        assert_eq!(noun_case("е"), Some(NounCase::Prepositional));
        assert_eq!(noun_case("а"), Some(NounCase::Genitive));
        assert_eq!(noun_case("ов"), Some(NounCase::Genitive));
        assert_eq!(noun_case("ю"), Some(NounCase::Accusative));
        assert_eq!(noun_case("ах"), None);
        assert_eq!(noun_case(""), None);
    }

    #[test]
    fn test_verb_signal_present() {
        assert_eq!(verb_signal("агрюсь"), Some(VerbSignal::Form(VerbForm::Present1)));
        assert_eq!(verb_signal("рофлишь"), Some(VerbSignal::Form(VerbForm::Present2)));
        assert_eq!(verb_signal("хейтит"), Some(VerbSignal::Form(VerbForm::Present3)));
        assert_eq!(verb_signal("чиллим"), Some(VerbSignal::Form(VerbForm::Present4)));
        assert_eq!(verb_signal("агритесь"), Some(VerbSignal::Form(VerbForm::Present5)));
        assert_eq!(verb_signal("агрятся"), Some(VerbSignal::Form(VerbForm::Present6)));
    }

    #[test]
    fn test_verb_signal_past_and_infinitive() {
        assert_eq!(verb_signal("хейтил"), Some(VerbSignal::Form(VerbForm::PastMasculine)));
        assert_eq!(verb_signal("агрилась"), Some(VerbSignal::Form(VerbForm::PastFeminine)));
        assert_eq!(verb_signal("чиллило"), Some(VerbSignal::Form(VerbForm::PastNeuter)));
        assert_eq!(verb_signal("флексили"), Some(VerbSignal::Form(VerbForm::PastPlural)));
        assert_eq!(verb_signal("рофлить"), Some(VerbSignal::Infinitive));
        assert_eq!(verb_signal("агриться"), Some(VerbSignal::Infinitive));
        assert_eq!(verb_signal("агрись"), None);
    }

    #[test]
    fn test_past_markers() {
        assert!(is_past("агрилась"));
        assert!(is_feminine_past("агрилась"));
        assert!(is_past("хейтил"));
        assert!(!is_feminine_past("хейтил"));
        assert!(!is_past("хейтит"));
    }
}
