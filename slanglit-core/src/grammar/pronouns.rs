//! Subject pronouns and the verb forms they select

use crate::dictionary::VerbForm;

/// Personal pronoun acting as the grammatical subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectPronoun {
    /// я
    FirstSingular,
    /// ты
    SecondSingular,
    /// он
    ThirdMasculine,
    /// она
    ThirdFeminine,
    /// оно
    ThirdNeuter,
    /// мы
    FirstPlural,
    /// вы
    SecondPlural,
    /// они
    ThirdPlural,
}

impl SubjectPronoun {
    /// Recognise a lowercase word as a subject pronoun
    pub fn from_word(word: &str) -> Option<Self> {
        let pronoun = match word {
            "я" => SubjectPronoun::FirstSingular,
            "ты" => SubjectPronoun::SecondSingular,
            "он" => SubjectPronoun::ThirdMasculine,
            "она" => SubjectPronoun::ThirdFeminine,
            "оно" => SubjectPronoun::ThirdNeuter,
            "мы" => SubjectPronoun::FirstPlural,
            "вы" => SubjectPronoun::SecondPlural,
            "они" => SubjectPronoun::ThirdPlural,
            _ => return None,
        };
        Some(pronoun)
    }

    /// Verb form agreeing with this subject
    ///
    /// я/ты carry no gender, so in the past tense the verb's own `-ла`
    /// decides between feminine and masculine.
    pub fn verb_form(self, past: bool, feminine_past: bool) -> VerbForm {
        use SubjectPronoun::*;

        if past {
            return match self {
                FirstSingular | SecondSingular if feminine_past => VerbForm::PastFeminine,
                FirstSingular | SecondSingular | ThirdMasculine => VerbForm::PastMasculine,
                ThirdFeminine => VerbForm::PastFeminine,
                ThirdNeuter => VerbForm::PastNeuter,
                FirstPlural | SecondPlural | ThirdPlural => VerbForm::PastPlural,
            };
        }

        match self {
            FirstSingular => VerbForm::Present1,
            SecondSingular => VerbForm::Present2,
            ThirdMasculine | ThirdFeminine | ThirdNeuter => VerbForm::Present3,
            FirstPlural => VerbForm::Present4,
            SecondPlural => VerbForm::Present5,
            ThirdPlural => VerbForm::Present6,
        }
    }
}
