//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use slanglit_core::{Replacement, TransformOutput};
use std::io::Write;

/// JSON formatter - collects documents and writes them as one array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    include_replacements: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct DocumentData {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    pub transformed: String,
    pub has_slang: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replacements: Option<Vec<Replacement>>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: true,
            include_replacements: true,
            documents: Vec::new(),
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn include_replacements(mut self, include: bool) -> Self {
        self.include_replacements = include;
        self
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, source: &str, output: &TransformOutput) -> Result<()> {
        self.documents.push(DocumentData {
            source: source.to_string(),
            transformed: output.transformed.clone(),
            has_slang: output.has_slang,
            replacements: self
                .include_replacements
                .then(|| output.replacements.clone()),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
