//! Output formatting for command results

use crate::error::{Result, TicketFlowError};
use colored::Colorize;
use serde::Serialize;

/// Formats command output for the terminal
///
/// In JSON mode, handlers print a single machine-readable document via
/// [`print_json`]; the plain-text helpers are for human consumption.
///
/// [`print_json`]: OutputFormatter::print_json
pub struct OutputFormatter {
    json: bool,
    no_color: bool,
}

impl OutputFormatter {
    /// Create a formatter from the global CLI flags
    #[must_use]
    pub const fn new(json: bool, no_color: bool) -> Self {
        Self { json, no_color }
    }

    /// Whether JSON output was requested
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success line
    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    /// Print an informational line
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print an error line to stderr
    pub fn error(&self, message: &str) {
        let line = format!("Error: {message}");
        if self.no_color {
            eprintln!("{line}");
        } else {
            eprintln!("{}", line.red());
        }
    }

    /// Print a value as pretty JSON
    pub fn print_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let rendered = serde_json::to_string_pretty(value)
            .map_err(|e| TicketFlowError::Serialization(format!("Failed to render JSON: {e}")))?;
        println!("{rendered}");
        Ok(())
    }
}
