//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use slanglit_core::TransformOutput;
use std::io::{self, Write};

/// Plain text formatter - writes each transformed document as is
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, _source: &str, output: &TransformOutput) -> Result<()> {
        write!(self.writer, "{}", output.transformed)?;
        if !output.transformed.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slanglit_core::{builtin_table, transform};

    #[test]
    fn test_text_formatter_terminates_lines() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer);
            let output = transform("Какой кринж", builtin_table());
            formatter.format_document("<text>", &output).unwrap();
            let output = transform("Изи\n", builtin_table());
            formatter.format_document("<text>", &output).unwrap();
            formatter.finish().unwrap();
        }

        assert_eq!(String::from_utf8(buffer).unwrap(), "Какой стыд\nЛегко\n");
    }
}
