//! Validate command implementation

use anyhow::Result;
use clap::Args;
use slanglit_core::{NounCase, PartOfSpeech, SlangEntry, VerbForm};
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the dictionary file to validate (TOML or JSON)
    #[arg(short, long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        match slanglit_core::dictionary::from_file(&self.dictionary) {
            Ok(table) => {
                println!("✓ Dictionary is valid!");
                println!("  Code: {}", table.metadata().code);
                println!("  Name: {}", table.metadata().name);
                println!("  Entries: {}", table.len());

                for part_of_speech in [PartOfSpeech::Noun, PartOfSpeech::Verb] {
                    let count = table
                        .entries()
                        .iter()
                        .filter(|entry| entry.part_of_speech() == part_of_speech)
                        .count();
                    println!("  {part_of_speech}s: {count}");
                }

                for entry in table.entries() {
                    let missing = missing_forms(entry);
                    if !missing.is_empty() {
                        println!(
                            "  ! '{}' lacks {} (falls back to '{}')",
                            entry.slang(),
                            missing.join(", "),
                            entry.normal()
                        );
                    }
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

/// Inflection keys absent from an entry's table
fn missing_forms(entry: &SlangEntry) -> Vec<&'static str> {
    match entry.part_of_speech() {
        PartOfSpeech::Noun => NounCase::ALL
            .iter()
            .filter(|case| !entry.cases().contains_key(*case))
            .map(|case| case.as_str())
            .collect(),
        PartOfSpeech::Verb => VerbForm::ALL
            .iter()
            .filter(|form| !entry.conjugations().contains_key(*form))
            .map(|form| form.as_str())
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            dictionary: PathBuf::from("test.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("test.toml"));
    }

    #[test]
    fn test_validate_valid_dictionary() {
        let toml_content = r#"
[metadata]
code = "ru"
name = "Test"

[[entries]]
slang = "кринж"
normal = "стыд"
part_of_speech = "noun"

[entries.cases]
genitive = "стыда"
"#;

        let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            dictionary: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_dictionary() {
        let toml_content = r#"
[[entries]]
slang = ""
normal = "стыд"
part_of_speech = "noun"
"#;

        let mut temp_file = Builder::new().suffix(".toml").tempfile().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            dictionary: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_err());
    }

    #[test]
    fn test_missing_forms() {
        let entry = SlangEntry::new("кринж", "стыд", PartOfSpeech::Noun)
            .with_case(NounCase::Nominative, "стыд")
            .with_case(NounCase::Genitive, "стыда");
        assert_eq!(
            missing_forms(&entry),
            vec!["dative", "accusative", "instrumental", "prepositional"]
        );

        let adverb = SlangEntry::new("изи", "легко", PartOfSpeech::Adverb);
        assert!(missing_forms(&adverb).is_empty());
    }
}
