//! # lexdump
//!
//! A small single-pass tokenizer for expression-like text. It recognizes:
//! - integer numbers and double-quoted strings
//! - identifiers, keywords (`if`, `else`, `elif`, `while`, `for`, `return`)
//!   and boolean literals (`true`, `false`)
//! - one- and two-character operators
//! - `//` line comments and `/* */` block comments
//!
//! ## Architecture
//!
//! - `lexer`: token definitions and the scanner
//! - `dump`: rendering token streams for the command-line driver
//! - `error`: driver errors and diagnostics
//!
//! Scanning problems never raise errors. They come back as `Error` tokens
//! and the caller decides whether to stop.

pub mod dump;
pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use dump::{dump, dump_table, format_token, scan_strict};
pub use error::{LexdumpError, LexdumpResult};
pub use lexer::{Keyword, Lexer, Token, TokenKind};

/// Version of lexdump
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize `source`, returning every token including the final `EndOfInput`
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
