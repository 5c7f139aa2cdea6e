//! Output formatting for CLI commands
//!
//! Everything goes through a locked stdout and returns `io::Result`, so a
//! closed pipe (`rfcs list | head`) surfaces as an error instead of a panic.

use std::io::{self, Write};

use serde::Serialize;

use crate::storage::OutputFormat;

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
}

impl Output {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Prints a success message
    pub fn success(&self, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.line(message),
            OutputFormat::Json => self.line(
                &serde_json::json!({
                    "success": true,
                    "message": message
                })
                .to_string(),
            ),
        }
    }

    /// Prints structured data
    pub fn data<T: Serialize>(&self, data: &T) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        match self.format {
            OutputFormat::Text => serde_json::to_writer_pretty(&mut stdout, data)?,
            OutputFormat::Json => serde_json::to_writer(&mut stdout, data)?,
        }
        writeln!(stdout)
    }

    /// Prints one line of text
    pub fn line(&self, text: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{}", text)
    }

    /// Prints several lines under a single lock
    pub fn lines<I, S>(&self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stdout = io::stdout().lock();
        for line in lines {
            writeln!(stdout, "{}", line.as_ref())?;
        }
        stdout.flush()
    }

    /// Writes raw bytes to stdout unchanged
    pub fn raw(&self, bytes: &[u8]) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()
    }

    /// Returns true if using JSON format
    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

/// Returns true if `err` was caused by the reader closing stdout
pub fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
