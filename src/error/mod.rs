//! Error handling for the lexdump driver
//!
//! The scanner itself never fails; it reports problems as `Error` tokens.
//! The types here cover what can go wrong around it: reading the input and
//! the fail-fast policy that turns the first `Error` token into a failure.

use std::io;
use std::path::PathBuf;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for lexdump operations
pub type LexdumpResult<T> = Result<T, LexdumpError>;

/// Main error type for lexdump
#[derive(Debug, thiserror::Error)]
pub enum LexdumpError {
    /// The input file could not be read
    #[error("Failed to read file '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Standard input could not be read
    #[error("Failed to read standard input: {0}")]
    ReadStdin(#[source] io::Error),

    /// An `Error` token surfaced while scanning in fail-fast mode
    #[error("{message} at offset {offset}")]
    Lexical { message: String, offset: usize },
}

impl LexdumpError {
    /// Create a new lexical error
    pub fn lexical(message: impl Into<String>, offset: usize) -> Self {
        Self::Lexical {
            message: message.into(),
            offset,
        }
    }

    /// Get the error kind as a string
    pub fn kind(&self) -> &str {
        match self {
            Self::ReadFile { .. } | Self::ReadStdin(_) => "Input Error",
            Self::Lexical { .. } => "Lexical Error",
        }
    }

    /// Get the error message without the kind or location
    pub fn message(&self) -> String {
        match self {
            Self::Lexical { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// Character offset into the input, for lexical errors
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Lexical { offset, .. } => Some(*offset),
            _ => None,
        }
    }
}
