//! Token definitions for lexdump
//!
//! This module defines the token kinds and the fixed classification tables
//! used by the scanner.

use std::fmt;

/// Character that ends the scan. It is never consumed.
pub const STATEMENT_TERMINATOR: char = ';';

/// Literals classified as `Boolean`
pub const BOOLEAN_LITERALS: [&str; 2] = ["true", "false"];

/// Operators recognized before any single-character operator
pub const TWO_CHAR_OPERATORS: [&str; 8] = ["==", "!=", "<=", ">=", "&&", "||", "<<", ">>"];

pub const SINGLE_CHAR_OPERATORS: [char; 10] = ['+', '-', '*', '/', '%', '^', '&', '|', '!', '='];

/// Check whether `text` is a boolean literal
pub fn is_boolean_literal(text: &str) -> bool {
    BOOLEAN_LITERALS.contains(&text)
}

/// Check whether `text` is one of the two-character operators
pub fn is_two_char_operator(text: &str) -> bool {
    TWO_CHAR_OPERATORS.contains(&text)
}

/// Check whether `c` is one of the single-character operators
pub fn is_single_char_operator(c: char) -> bool {
    SINGLE_CHAR_OPERATORS.contains(&c)
}

/// A token produced by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The matched lexeme, or the diagnostic message for `Error`
    pub text: String,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// The end-of-input marker
    pub fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, String::new())
    }

    /// An error token carrying a diagnostic message
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(TokenKind::Error, message)
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_error(&self) -> bool {
        self.kind == TokenKind::Error
    }

    /// The keyword this token spells, if it is a `Keyword` token
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword => Keyword::from_str(&self.text),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

/// Token kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Number,
    String,
    Boolean,
    Operator,
    Keyword,
    Identifier,
    EndOfInput,
    Error,
}

impl TokenKind {
    /// Name used when rendering tokens as text
    pub fn name(&self) -> &'static str {
        match self {
            Self::Number => "NUMBER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Operator => "OPERATOR",
            Self::Keyword => "KEYWORD",
            Self::Identifier => "IDENTIFIER",
            Self::EndOfInput => "END_OF_LINE",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Recognized keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Else,
    Elif,
    While,
    For,
    Return,
}

impl Keyword {
    /// Get keyword from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "elif" => Some(Self::Elif),
            "while" => Some(Self::While),
            "for" => Some(Self::For),
            "return" => Some(Self::Return),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::Elif => "elif",
            Self::While => "while",
            Self::For => "for",
            Self::Return => "return",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
