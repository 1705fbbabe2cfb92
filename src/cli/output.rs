//! Output formatting for CLI commands.

use crate::cli::args::OutputFormat;
use crate::error::Result;
use serde::Serialize;

/// Helper for formatting and printing output.
pub struct Output {
    format: OutputFormat,
    quiet: bool,
}

impl Output {
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Print a serializable value in the configured structured format.
    ///
    /// Callers handle `Text` themselves via [`Output::print_raw`].
    pub fn print<T: Serialize>(&self, value: &T) -> Result<()> {
        let output = match self.format {
            OutputFormat::Json | OutputFormat::Text => serde_json::to_string_pretty(value)?,
            OutputFormat::Yaml => serde_yaml::to_string(value)?,
        };
        println!("{}", output);
        Ok(())
    }

    /// Print raw text (not serialized).
    pub fn print_raw(&self, text: &str) {
        println!("{}", text);
    }

    /// Print an error message to stderr unless in quiet mode.
    ///
    /// Quiet mode only silences the message; the exit code still reports
    /// the failure.
    pub fn error(&self, message: &str) {
        if !self.quiet {
            eprintln!("Error: {}", message);
        }
    }
}
