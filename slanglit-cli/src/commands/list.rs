//! List command implementation

use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::commands::transform::load_table;
use crate::output::OutputFormat;

/// Arguments for `list entries`
#[derive(Debug, Args)]
pub struct EntriesArgs {
    /// Dictionary file (default: built-in Russian dictionary)
    #[arg(short, long, value_name = "FILE")]
    pub dictionary: Option<PathBuf>,
}

impl EntriesArgs {
    /// Print every entry in match order
    pub fn execute(&self) -> Result<()> {
        let loaded;
        let table = match &self.dictionary {
            Some(path) => {
                loaded = load_table(path)?;
                &loaded
            }
            None => slanglit_core::builtin_table(),
        };

        println!("{} ({} entries):", table.metadata().name, table.len());
        for entry in table.entries() {
            match entry.category() {
                Some(category) => println!(
                    "  {:<12} → {:<24} {:<10} [{category}]",
                    entry.slang(),
                    entry.normal(),
                    entry.part_of_speech().as_str()
                ),
                None => println!(
                    "  {:<12} → {:<24} {}",
                    entry.slang(),
                    entry.normal(),
                    entry.part_of_speech().as_str()
                ),
            }
        }

        Ok(())
    }
}

/// Print the supported output formats
pub fn print_formats() -> Result<()> {
    println!("Available output formats:");
    for format in OutputFormat::value_variants() {
        println!("  {:<10} - {}", format.name(), format.description());
    }
    Ok(())
}
