//! Slang dictionary: entries, the lookup table and loaders

pub mod config;
mod entry;
pub mod loader;
mod table;

pub use config::{DictionaryConfig, EntryConfig, MetadataConfig};
pub use entry::{Gender, NounCase, PartOfSpeech, SlangEntry, VerbForm};
pub use loader::{builtin_table, from_file, from_json_str, from_toml_str};
pub use table::{Match, MatchKind, SlangTable};
