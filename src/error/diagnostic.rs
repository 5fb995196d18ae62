//! Diagnostic formatting for better error messages
//!
//! This module formats errors with color and, for lexical errors, the
//! source line that contains the offending character.

use super::LexdumpError;
use colored::Colorize;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a LexdumpError,
    source: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a LexdumpError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source text context
    pub fn with_source(error: &'a LexdumpError, source: &'a str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        // Error header
        let kind = self.error.kind().red().bold();
        output.push_str(&format!("{}: ", kind));
        output.push_str(&self.error.message());
        output.push('\n');

        if let Some(offset) = self.error.offset() {
            let (line, column) = match self.source {
                Some(source) => locate(source, offset),
                None => (0, 0),
            };

            if line == 0 {
                output.push_str(&format!("  {} offset {}\n", "-->".blue().bold(), offset));
            } else {
                output.push_str(&format!(
                    "  {} offset {} (line {}, column {})\n",
                    "-->".blue().bold(),
                    offset,
                    line,
                    column
                ));
            }

            if let Some(source) = self.source {
                output.push_str(&format_source_context(source, line, column));
            }
        }

        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// Translate a character offset into a 1-based (line, column) pair
fn locate(source: &str, offset: usize) -> (usize, usize) {
    let mut line = 1;
    let mut column = 1;

    for c in source.chars().take(offset) {
        if c == '\n' {
            line += 1;
            column = 1;
        } else {
            column += 1;
        }
    }

    (line, column)
}

/// Format the offending line with a caret under `column`
fn format_source_context(source: &str, line: usize, column: usize) -> String {
    let mut output = String::new();
    let lines: Vec<&str> = source.lines().collect();

    if line == 0 || line > lines.len() {
        return output;
    }

    let line_num_width = line.to_string().len();

    output.push_str(&format!(
        "  {} {}\n",
        format!("{:width$}", line, width = line_num_width)
            .blue()
            .bold(),
        lines[line - 1]
    ));

    let indicator_padding = " ".repeat(line_num_width + 2 + column);
    output.push_str(&format!("{}{}\n", indicator_padding, "^".red().bold()));

    output
}
