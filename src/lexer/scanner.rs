//! Lexer/Scanner implementation for lexdump
//!
//! The scanner hands out one token per call. Failures never abort the scan:
//! they come back as `Error` tokens and the caller decides what to do next.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use super::token::{
    is_boolean_literal, is_single_char_operator, is_two_char_operator, Keyword, Token, TokenKind,
    STATEMENT_TERMINATOR,
};

/// Lexer over a single input text
#[derive(Debug, Clone)]
pub struct Lexer {
    source: Vec<char>,
    start: usize,
    current: usize,
}

impl Lexer {
    /// Create a new lexer positioned at the start of `source`
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            start: 0,
            current: 0,
        }
    }

    /// Scan the next token and advance past it.
    ///
    /// Once `EndOfInput` has been returned every further call returns it
    /// again: the statement terminator is never consumed.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace_and_comments();
        self.start = self.current;

        let token = self.scan_token();
        trace!(kind = %token.kind, text = %token.text, start = self.start, "scanned token");
        token
    }

    /// Tokenize the rest of the input, including the final `EndOfInput`
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.is_end();
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Current cursor, in characters from the start of the input
    pub fn position(&self) -> usize {
        self.current
    }

    /// Offset at which the most recently scanned token began
    pub fn token_start(&self) -> usize {
        self.start
    }

    /// Check if we've reached the end of the source
    pub fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn scan_token(&mut self) -> Token {
        if self.is_at_end() || self.peek() == STATEMENT_TERMINATOR {
            return Token::end_of_input();
        }

        let c = self.peek();

        if c.is_ascii_digit() {
            return self.scan_number();
        }

        if c == '"' {
            return self.scan_string();
        }

        if c.is_ascii_alphabetic() || c == '_' {
            return self.scan_identifier();
        }

        if let Some(token) = self.scan_two_char_operator() {
            return token;
        }

        if is_single_char_operator(c) {
            self.advance();
            return Token::new(TokenKind::Operator, c.to_string());
        }

        self.advance();
        debug!(character = %c.escape_debug(), offset = self.start, "unexpected character");
        Token::error(format!("Unexpected character: {}", c))
    }

    fn skip_whitespace_and_comments(&mut self) {
        while !self.is_at_end() {
            match (self.peek(), self.peek_next()) {
                (c, _) if is_whitespace(c) => {
                    self.advance();
                }
                ('/', '/') => {
                    // Stops at the newline, which the next pass skips
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                }
                ('/', '*') => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    /// Skip a `/* ... */` comment. Comments do not nest; an unterminated
    /// comment swallows the rest of the input without an error token.
    fn skip_block_comment(&mut self) {
        let opened_at = self.current;
        self.current += 2;

        while self.current + 1 < self.source.len() {
            if self.source[self.current] == '*' && self.source[self.current + 1] == '/' {
                self.current += 2;
                return;
            }
            self.current += 1;
        }

        debug!(offset = opened_at, "unterminated block comment runs to end of input");
        self.current = self.source.len();
    }

    /// Scan a run of decimal digits
    fn scan_number(&mut self) -> Token {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }
        Token::new(TokenKind::Number, self.lexeme())
    }

    /// Scan a double-quoted string. There are no escape sequences.
    fn scan_string(&mut self) -> Token {
        // Opening quote
        self.advance();

        while !self.is_at_end() && self.peek() != '"' {
            self.advance();
        }

        if self.is_at_end() {
            debug!(offset = self.start, "unterminated string literal");
            return Token::error("Unterminated string literal");
        }

        let value: String = self.source[self.start + 1..self.current].iter().collect();

        // Closing quote
        self.advance();

        Token::new(TokenKind::String, value)
    }

    /// Scan an identifier, keyword or boolean literal
    fn scan_identifier(&mut self) -> Token {
        while !self.is_at_end() && (self.peek().is_ascii_alphanumeric() || self.peek() == '_') {
            self.advance();
        }

        let lexeme = self.lexeme();
        let kind = if Keyword::from_str(&lexeme).is_some() {
            TokenKind::Keyword
        } else if is_boolean_literal(&lexeme) {
            TokenKind::Boolean
        } else {
            TokenKind::Identifier
        };

        Token::new(kind, lexeme)
    }

    fn scan_two_char_operator(&mut self) -> Option<Token> {
        if self.current + 1 >= self.source.len() {
            return None;
        }

        let pair: String = self.source[self.current..self.current + 2].iter().collect();
        if !is_two_char_operator(&pair) {
            return None;
        }

        self.current += 2;
        Some(Token::new(TokenKind::Operator, pair))
    }

    /// Text of the token being scanned
    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Peek at the next character without consuming it
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }
}

/// Yields tokens up to, but not including, `EndOfInput`
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}

impl FusedIterator for Lexer {}

/// C-locale whitespace, vertical tab included
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn tokenize_source(source: &str) -> Vec<Token> {
        Lexer::new(source).tokenize()
    }

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    #[test]
    fn test_empty_source() {
        let tokens = tokenize_source("");
        assert_eq!(tokens, vec![Token::end_of_input()]);
    }

    #[test]
    fn test_whitespace_and_comments_only() {
        for source in ["   \t\n", "// just a comment", "/* block */ \n // line", "\x0B\x0C"] {
            assert_eq!(Lexer::new(source).next_token(), Token::end_of_input(), "{:?}", source);
        }
    }

    #[test]
    fn test_numbers_and_strings() {
        let tokens = tokenize_source("123 \"hello world\" 456 \"C\"");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Number, "123"),
                tok(TokenKind::String, "hello world"),
                tok(TokenKind::Number, "456"),
                tok(TokenKind::String, "C"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_comparison_expression() {
        let tokens = tokenize_source("x1 == 42 && true");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "x1"),
                tok(TokenKind::Operator, "=="),
                tok(TokenKind::Number, "42"),
                tok(TokenKind::Operator, "&&"),
                tok(TokenKind::Boolean, "true"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_parenthesis_is_unexpected() {
        let tokens = tokenize_source("if (x) return;");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Keyword, "if"),
                Token::error("Unexpected character: ("),
                tok(TokenKind::Identifier, "x"),
                Token::error("Unexpected character: )"),
                tok(TokenKind::Keyword, "return"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_error_advances_exactly_one_character() {
        let mut lexer = Lexer::new("@@1");
        assert_eq!(lexer.next_token(), Token::error("Unexpected character: @"));
        assert_eq!(lexer.position(), 1);
        assert_eq!(lexer.next_token(), Token::error("Unexpected character: @"));
        assert_eq!(lexer.position(), 2);
        assert_eq!(lexer.next_token(), tok(TokenKind::Number, "1"));
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("\"unterminated");
        assert_eq!(lexer.next_token(), Token::error("Unterminated string literal"));
        assert!(lexer.is_at_end());
        assert_eq!(lexer.next_token(), Token::end_of_input());
    }

    #[test]
    fn test_line_comment() {
        let tokens = tokenize_source("// comment\n42");
        assert_eq!(tokens, vec![tok(TokenKind::Number, "42"), Token::end_of_input()]);
    }

    #[test]
    fn test_block_comment() {
        let tokens = tokenize_source("a /* x * y / z */ b /**/ c");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Identifier, "b"),
                tok(TokenKind::Identifier, "c"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_block_comments_do_not_nest() {
        let tokens = tokenize_source("/* outer /* inner */ tail */");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "tail"),
                tok(TokenKind::Operator, "*"),
                tok(TokenKind::Operator, "/"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_silent() {
        for source in ["1 /* never closed", "/*/", "/*"] {
            let mut lexer = Lexer::new(source);
            let tokens: Vec<Token> = lexer.by_ref().collect();
            assert!(tokens.iter().all(|t| !t.is_error()), "{:?}", source);
            assert!(lexer.is_at_end());
        }
    }

    #[test]
    fn test_lone_slash_is_an_operator() {
        let tokens = tokenize_source("a / b /");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Identifier, "a"),
                tok(TokenKind::Operator, "/"),
                tok(TokenKind::Identifier, "b"),
                tok(TokenKind::Operator, "/"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_two_char_before_single_char() {
        let tokens = tokenize_source("== != <= >= && || << >> = ! & |");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["==", "!=", "<=", ">=", "&&", "||", "<<", ">>", "=", "!", "&", "|", ""]
        );
        assert!(tokens[..12].iter().all(|t| t.kind == TokenKind::Operator));
    }

    #[test]
    fn test_triple_equals_splits_greedily() {
        let tokens = tokenize_source("===");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Operator, "=="),
                tok(TokenKind::Operator, "="),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_lone_angle_bracket_is_unexpected() {
        let tokens = tokenize_source("a < b");
        assert_eq!(tokens[1], Token::error("Unexpected character: <"));
    }

    #[test]
    fn test_keywords_and_booleans() {
        let tokens = tokenize_source("if else elif while for return true false truthy _if");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Keyword,
                TokenKind::Boolean,
                TokenKind::Boolean,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::EndOfInput,
            ]
        );
        assert_eq!(tokens[2].keyword(), Some(Keyword::Elif));
    }

    #[test]
    fn test_number_then_identifier() {
        let tokens = tokenize_source("12ab 3.5");
        assert_eq!(
            tokens,
            vec![
                tok(TokenKind::Number, "12"),
                tok(TokenKind::Identifier, "ab"),
                tok(TokenKind::Number, "3"),
                Token::error("Unexpected character: ."),
                tok(TokenKind::Number, "5"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_string_spans_lines_and_keeps_comment_markers() {
        let tokens = tokenize_source("\"a\n// b\"");
        assert_eq!(
            tokens,
            vec![tok(TokenKind::String, "a\n// b"), Token::end_of_input()]
        );
    }

    #[test]
    fn test_empty_string() {
        let tokens = tokenize_source("\"\"");
        assert_eq!(tokens, vec![tok(TokenKind::String, ""), Token::end_of_input()]);
    }

    #[test]
    fn test_terminator_is_not_consumed() {
        let mut lexer = Lexer::new("x; y");
        assert_eq!(lexer.next_token(), tok(TokenKind::Identifier, "x"));
        assert_eq!(lexer.next_token(), Token::end_of_input());
        assert_eq!(lexer.position(), 1);
        assert_eq!(lexer.next_token(), Token::end_of_input());
        assert_eq!(lexer.position(), 1);
    }

    #[test]
    fn test_non_ascii_character() {
        let tokens = tokenize_source("é1");
        assert_eq!(
            tokens,
            vec![
                Token::error("Unexpected character: é"),
                tok(TokenKind::Number, "1"),
                Token::end_of_input(),
            ]
        );
    }

    #[test]
    fn test_token_start_skips_whitespace() {
        let mut lexer = Lexer::new("  /* c */ foo");
        lexer.next_token();
        assert_eq!(lexer.token_start(), 10);
        assert_eq!(lexer.position(), 13);
    }

    #[test]
    fn test_iterator_stops_at_end() {
        let mut lexer = Lexer::new("a b");
        assert_eq!(lexer.next().map(|t| t.text), Some("a".to_string()));
        assert_eq!(lexer.next().map(|t| t.text), Some("b".to_string()));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
    }

    proptest! {
        #[test]
        fn test_tokenize_is_repeatable(source in "[ -~\n\t]{0,64}") {
            prop_assert_eq!(tokenize_source(&source), tokenize_source(&source));
        }

        #[test]
        fn test_cursor_never_moves_backwards(source in "[ -~\n\t]{0,64}") {
            let mut lexer = Lexer::new(&source);
            let len = source.chars().count();
            let mut last = lexer.position();
            loop {
                let token = lexer.next_token();
                let position = lexer.position();
                prop_assert!(position >= last);
                prop_assert!(position <= len);
                last = position;
                if token.is_end() {
                    break;
                }
            }
        }

        #[test]
        fn test_blank_input_ends_immediately(
            parts in prop::collection::vec(
                prop_oneof![
                    Just(" ".to_string()),
                    Just("\n".to_string()),
                    "// [a-z ]{0,8}\n",
                    "/\\* [a-z ]{0,8} \\*/",
                ],
                0..8,
            )
        ) {
            let source = parts.concat();
            prop_assert_eq!(Lexer::new(&source).next_token(), Token::end_of_input());
        }
    }
}
