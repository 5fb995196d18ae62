//! Rendering of token streams for the command-line driver

use colored::{ColoredString, Colorize};

use crate::error::{LexdumpError, LexdumpResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// Render one token in the plain line format
pub fn format_token(token: &Token) -> String {
    format!("Token: {} Type: {}", token.text, token.kind)
}

/// Tokenize `source` and render one line per token, stopping before
/// `EndOfInput`. Error tokens are rendered and scanning continues.
pub fn dump(source: &str) -> String {
    Lexer::new(source)
        .map(|token| format_token(&token) + "\n")
        .collect()
}

/// Render tokens as an indexed table with colored kinds
pub fn dump_table(tokens: &[Token]) -> String {
    let mut output = String::new();
    let rule = "=".repeat(60);

    output.push_str(&rule);
    output.push('\n');
    for (i, token) in tokens.iter().enumerate() {
        let kind = format!("{:12}", token.kind.name());
        output.push_str(&format!("{:4}: {} | {:?}\n", i, paint(token.kind, kind), token.text));
    }
    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!("Total tokens: {}\n", tokens.len()));

    output
}

/// Scan `source`, failing on the first `Error` token.
///
/// On success the returned tokens exclude `EndOfInput`.
pub fn scan_strict(source: &str) -> LexdumpResult<Vec<Token>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        match token.kind {
            TokenKind::EndOfInput => return Ok(tokens),
            TokenKind::Error => return Err(LexdumpError::lexical(token.text, lexer.token_start())),
            _ => tokens.push(token),
        }
    }
}

fn paint(kind: TokenKind, text: String) -> ColoredString {
    match kind {
        TokenKind::Error => text.red().bold(),
        TokenKind::Keyword => text.magenta(),
        TokenKind::Operator => text.yellow(),
        TokenKind::Number | TokenKind::String | TokenKind::Boolean => text.green(),
        TokenKind::Identifier => text.cyan(),
        TokenKind::EndOfInput => text.dimmed(),
    }
}
