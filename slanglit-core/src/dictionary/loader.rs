//! Dictionary loading
//!
//! The built-in Russian dictionary is embedded at compile time and parsed
//! once on first access. External dictionaries are read from TOML or JSON.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use super::config::DictionaryConfig;
use super::table::SlangTable;
use crate::error::{CoreError, Result};

static BUILTIN: OnceLock<SlangTable> = OnceLock::new();

const BUILTIN_DICTIONARY: &str = include_str!("../../configs/dictionary/russian.toml");

/// The embedded default dictionary
pub fn builtin_table() -> &'static SlangTable {
    BUILTIN.get_or_init(|| {
        from_toml_str(BUILTIN_DICTIONARY).expect("Failed to load embedded slang dictionary")
    })
}

/// Parse a dictionary from TOML
pub fn from_toml_str(content: &str) -> Result<SlangTable> {
    let config: DictionaryConfig = toml::from_str(content)?;
    build(config)
}

/// Parse a dictionary from JSON
pub fn from_json_str(content: &str) -> Result<SlangTable> {
    let config: DictionaryConfig = serde_json::from_str(content)?;
    build(config)
}

/// Load a dictionary file, choosing the format by extension
pub fn from_file(path: impl AsRef<Path>) -> Result<SlangTable> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let parse: fn(&str) -> Result<SlangTable> = match extension.as_str() {
        "toml" => from_toml_str,
        "json" => from_json_str,
        _ => return Err(CoreError::UnsupportedFormat(extension)),
    };

    let content = fs::read_to_string(path)?;
    let table = parse(&content)?;
    log::info!(
        "Loaded {} slang entries from {}",
        table.len(),
        path.display()
    );
    Ok(table)
}

fn build(config: DictionaryConfig) -> Result<SlangTable> {
    let metadata = config.metadata.clone();
    let entries = config.into_entries()?;
    log::debug!(
        "Building slang table '{}' ({}) with {} entries",
        metadata.name,
        metadata.code,
        entries.len()
    );
    Ok(SlangTable::new(entries)?.with_metadata(metadata))
}
