//! Governing prepositions
//!
//! Groups are consulted in declaration order, so a preposition listed in
//! several groups resolves to the first one. The accusative group repeats
//! в/на/за/под/о/об; those duplicates never win and only через/про
//! effectively govern the accusative here. The noun's own ending usually
//! settles the ambiguity afterwards (see [`super::context`]).

use crate::dictionary::NounCase;

const PREPOSITION_GROUPS: &[(NounCase, &[&str])] = &[
    (NounCase::Prepositional, &["о", "об", "при", "в", "на"]),
    (NounCase::Dative, &["к", "по", "благодаря", "согласно"]),
    (
        NounCase::Instrumental,
        &["с", "со", "за", "под", "над", "перед", "между"],
    ),
    (
        NounCase::Genitive,
        &[
            "из", "от", "до", "у", "для", "без", "около", "вокруг", "после", "вместо",
        ],
    ),
    (
        NounCase::Accusative,
        &["через", "про", "в", "на", "за", "под", "о", "об"],
    ),
];

/// Case governed by `word` (lowercase), if it is a known preposition
pub fn governed_case(word: &str) -> Option<NounCase> {
    PREPOSITION_GROUPS
        .iter()
        .find(|(_, words)| words.contains(&word))
        .map(|(case, _)| *case)
}
