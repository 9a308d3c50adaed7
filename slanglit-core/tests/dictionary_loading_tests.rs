//! Loading external dictionaries from disk

use slanglit_core::dictionary::{from_file, EntryConfig};
use slanglit_core::{transform, CoreError, MatchKind, NounCase, PartOfSpeech, VerbForm};
use std::io::Write;
use tempfile::Builder;

const TOML_DICTIONARY: &str = r#"
[metadata]
code = "ru"
name = "test"

[[entries]]
slang = "лол"
normal = "смех"
part_of_speech = "noun"
gender = "masculine"
normal_gender = "masculine"

[entries.cases]
genitive = "смеха"
instrumental = "смехом"

[[entries]]
slang = "гамать"
normal = "играть"
part_of_speech = "verb"

[entries.conjugations]
present1 = "играю"
present4 = "играем"
"#;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_toml_file() {
    let file = write_temp(".toml", TOML_DICTIONARY);
    let table = from_file(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.metadata().name, "test");
    // longest slang first
    assert_eq!(table.entries()[0].slang(), "гамать");

    let output = transform("Мы гамаем без лола", &table);
    assert_eq!(output.transformed, "Мы играем без смеха");
}

#[test]
fn test_load_json_file() {
    let json = r#"{
        "entries": [
            { "slang": "гамать", "normal": "играть", "part_of_speech": "verb",
              "conjugations": { "present1": "играю", "past_pl": "играли" } }
        ]
    }"#;
    let file = write_temp(".json", json);
    let table = from_file(file.path()).unwrap();

    let entry = table.get("гамать").unwrap();
    assert_eq!(entry.part_of_speech(), PartOfSpeech::Verb);
    assert_eq!(entry.verb_form(VerbForm::PastPlural), "играли");
    assert_eq!(table.lookup("гамали").unwrap().kind(), MatchKind::Inflected);
    assert_eq!(transform("они гамали", &table).transformed, "они играли");
}

#[test]
fn test_missing_forms_fall_back_to_normal() {
    let file = write_temp(".toml", TOML_DICTIONARY);
    let table = from_file(file.path()).unwrap();

    let entry = table.get("лол").unwrap();
    assert_eq!(entry.case_form(NounCase::Dative), "смех");
    assert_eq!(transform("к лолу", &table).transformed, "к смех");
}

#[test]
fn test_duplicate_entries_are_rejected() {
    let toml = r#"
        [[entries]]
        slang = "лол"
        normal = "смех"
        part_of_speech = "noun"

        [[entries]]
        slang = "ЛОЛ"
        normal = "хохот"
        part_of_speech = "noun"
    "#;
    let file = write_temp(".toml", toml);
    match from_file(file.path()) {
        Err(CoreError::DuplicateEntry(slang)) => assert_eq!(slang, "лол"),
        other => panic!("Expected DuplicateEntry, got {other:?}"),
    }
}

#[test]
fn test_empty_dictionary_is_rejected() {
    let file = write_temp(".toml", "[metadata]\ncode = \"ru\"\nname = \"empty\"\n");
    assert!(matches!(
        from_file(file.path()),
        Err(CoreError::EmptyDictionary)
    ));
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".yaml", "entries: []");
    match from_file(file.path()) {
        Err(CoreError::UnsupportedFormat(ext)) => assert_eq!(ext, "yaml"),
        other => panic!("Expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn test_entry_config_round_trips_through_json() {
    let table = slanglit_core::builtin_table();
    let entry = table.get("вайб").unwrap();
    let config = EntryConfig::from(entry);
    let text = serde_json::to_string(&config).unwrap();
    let parsed: EntryConfig = serde_json::from_str(&text).unwrap();
    assert_eq!(&parsed.into_entry().unwrap(), entry);
}
