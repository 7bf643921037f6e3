//! Output writing utilities
//!
//! Documents and tables go to stdout so they can be piped or redirected.
//! Status messages go to stderr and are silenced by `--quiet`.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// Output writer that separates documents from status messages
pub struct OutputWriter {
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
    messages: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout and stderr
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            use_color,
            quiet,
            writer: Box::new(io::stdout()),
            messages: Box::new(io::stderr()),
        }
    }

    /// Create an output writer with custom document and message sinks
    #[cfg(test)]
    pub fn with_writers(
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
        messages: Box<dyn Write>,
    ) -> Self {
        Self {
            use_color,
            quiet,
            writer,
            messages,
        }
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a rendered document. Documents are printed even in quiet mode.
    pub fn document(&mut self, content: &str) -> Result<()> {
        debug!(bytes = content.len(), "Writing document");
        self.writeln(content)
    }

    fn message(&mut self, content: &str) -> Result<()> {
        writeln!(self.messages, "{}", content)?;
        self.messages.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.message(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.message(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_color {
            self.message(&message.green().to_string())
        } else {
            self.message(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.use_color {
            self.message(&message.yellow().to_string())
        } else {
            self.message(&format!("WARNING: {}", message))
        }
    }

    /// Write an aligned table
    pub fn table(&mut self, headers: &[&str], rows: Vec<Vec<String>>) -> Result<()> {
        // Calculate column widths
        let mut widths = headers.iter().map(|h| h.chars().count()).collect::<Vec<_>>();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let header_row = headers
            .iter()
            .enumerate()
            .map(|(i, h)| format!("{:width$}", h, width = widths[i]))
            .collect::<Vec<_>>()
            .join(" │ ");

        if self.use_color {
            self.writeln(header_row.trim_end().bold().to_string().as_str())?;
        } else {
            self.writeln(header_row.trim_end())?;
        }

        let separator = widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─");
        self.writeln(&separator)?;

        for row in rows {
            let row_str = row
                .iter()
                .enumerate()
                .map(|(i, cell)| match widths.get(i) {
                    Some(width) => format!("{:width$}", cell, width = *width),
                    None => cell.clone(),
                })
                .collect::<Vec<_>>()
                .join(" │ ");
            self.writeln(row_str.trim_end())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Cloneable in-memory sink
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn writer(quiet: bool) -> (OutputWriter, SharedBuffer, SharedBuffer) {
        let out = SharedBuffer::default();
        let err = SharedBuffer::default();
        let writer =
            OutputWriter::with_writers(false, quiet, Box::new(out.clone()), Box::new(err.clone()));
        (writer, out, err)
    }

    #[test]
    fn test_documents_and_messages_are_separated() {
        let (mut output, out, err) = writer(false);
        output.info("Documenting 1 model").unwrap();
        output.document("# Person Model").unwrap();
        output.success("done").unwrap();

        assert_eq!(out.contents(), "# Person Model\n");
        assert_eq!(err.contents(), "INFO: Documenting 1 model\ndone\n");
    }

    #[test]
    fn test_quiet_keeps_documents_and_warnings() {
        let (mut output, out, err) = writer(true);
        output.info("hidden").unwrap();
        output.success("hidden").unwrap();
        output.warning("manifest declares no models").unwrap();
        output.document("Person Model").unwrap();

        assert_eq!(out.contents(), "Person Model\n");
        assert_eq!(err.contents(), "WARNING: manifest declares no models\n");
    }

    #[test]
    fn test_table_alignment() {
        let (mut output, out, _) = writer(false);
        output
            .table(
                &["Format", "Extension"],
                vec![
                    vec!["markdown".to_string(), "md".to_string()],
                    vec!["csv".to_string(), "csv".to_string()],
                ],
            )
            .unwrap();

        let expected = "Format   │ Extension\n\
                        ─────────┼──────────\n\
                        markdown │ md\n\
                        csv      │ csv\n";
        assert_eq!(out.contents(), expected);
    }
}
