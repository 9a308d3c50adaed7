//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use slanglit_core::TransformOutput;
use std::io::Write;

/// Markdown formatter - one section per document with a replacements table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    replacement_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            replacement_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_document(&mut self, source: &str, output: &TransformOutput) -> Result<()> {
        writeln!(self.writer, "## {source}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", output.transformed.trim_end())?;
        writeln!(self.writer)?;

        if output.replacements.is_empty() {
            return Ok(());
        }

        writeln!(self.writer, "| Original | Replacement | Slang | Form |")?;
        writeln!(self.writer, "|---|---|---|---|")?;
        for replacement in &output.replacements {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                replacement.original, replacement.replacement, replacement.slang, replacement.form
            )?;
        }
        writeln!(self.writer)?;
        self.replacement_count += output.replacements.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total replacements: {}*", self.replacement_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slanglit_core::{builtin_table, transform};

    #[test]
    fn test_markdown_table_and_total() {
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer);
            let output = transform("Это был такой кринж", builtin_table());
            formatter.format_document("notes.txt", &output).unwrap();
            let output = transform("Обычный текст", builtin_table());
            formatter.format_document("plain.txt", &output).unwrap();
            formatter.finish().unwrap();
        }

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("## notes.txt\n\nЭто был такой стыд\n"));
        assert!(text.contains("| кринж | стыд | кринж |"));
        assert!(text.contains("## plain.txt"));
        assert!(text.ends_with("*Total replacements: 1*\n"));
    }
}
