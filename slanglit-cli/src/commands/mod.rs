//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod list;
pub mod transform;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Replace slang in text, files or stdin
    Transform(transform::TransformArgs),

    /// Check that a dictionary file loads cleanly
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List dictionary entries
    Entries(list::EntriesArgs),

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Transform(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::List { subcommand } => match subcommand {
                ListCommands::Entries(args) => args.execute(),
                ListCommands::Formats => list::print_formats(),
            },
        }
    }
}
