//! Lexical analysis module
//!
//! This module handles tokenization of raw input text.

pub mod token;
pub mod scanner;

pub use token::{Token, TokenKind, Keyword};
pub use scanner::Lexer;
