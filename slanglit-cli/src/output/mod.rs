//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use slanglit_core::TransformOutput;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one transformed document
    ///
    /// `source` names where the text came from: a file path, `<text>` or `<stdin>`.
    fn format_document(&mut self, source: &str, output: &TransformOutput) -> Result<()>;

    /// Finalize output (e.g., write the collected JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Transformed text only
    Text,
    /// JSON array of documents with their replacement reports
    Json,
    /// Markdown with a replacements table per document
    Markdown,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "markdown",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            OutputFormat::Text => "Transformed text only",
            OutputFormat::Json => "JSON documents with replacement reports",
            OutputFormat::Markdown => "Markdown with a replacements table",
        }
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
