//! Lexer for filter expressions.
//!
//! The lexer converts source text into a stream of tokens. Identifiers are
//! classified here: logical keywords become operators, column aliases become
//! [`TokenKind::Field`], and anything else stays an [`TokenKind::Ident`] for
//! the parser to reject.

use valuetable_foundation::Column;

use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Lexer for filter source.
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Remaining source text.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
        }
    }

    /// Returns the next token from the source.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.position;
        let Some(c) = self.peek_char() else {
            return Token::new(TokenKind::Eof, Span::at(start));
        };

        let kind = match c {
            '(' => {
                self.advance();
                TokenKind::LParen
            }
            ')' => {
                self.advance();
                TokenKind::RParen
            }
            '>' => self.scan_with_equals(TokenKind::Gt, TokenKind::Ge),
            '<' => self.scan_with_equals(TokenKind::Lt, TokenKind::Le),
            '=' => {
                self.advance();
                if self.peek_char() == Some('=') {
                    self.advance();
                    TokenKind::EqEq
                } else {
                    TokenKind::Error("use '==' to compare for equality".into())
                }
            }
            '!' => self.scan_with_equals(TokenKind::Not, TokenKind::NotEq),
            '~' => {
                self.advance();
                TokenKind::Not
            }
            '&' => self.scan_doubled('&', TokenKind::And),
            '|' => self.scan_doubled('|', TokenKind::Or),
            '`' => self.scan_quoted_column(),
            c if c.is_ascii_digit() => self.scan_number(),
            '.' if self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit()) => self.scan_number(),
            '-' | '+'
                if self
                    .peek_char_n(1)
                    .is_some_and(|c| c.is_ascii_digit() || c == '.') =>
            {
                self.scan_number()
            }
            c if is_ident_start(c) => self.scan_ident(),
            c => {
                self.advance();
                TokenKind::Error(format!("unexpected character: {c}"))
            }
        };

        Token::new(kind, Span::new(start, self.position))
    }

    /// Tokenizes all source and returns a vector of tokens ending in `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Peeks at the next character without consuming it.
    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// Peeks `n` characters ahead.
    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    /// Advances past the next character.
    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
        }
    }

    /// Skips whitespace characters.
    fn skip_whitespace(&mut self) {
        while self.peek_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Scans a one-character operator that has a two-character `=` form.
    fn scan_with_equals(&mut self, single: TokenKind, with_equals: TokenKind) -> TokenKind {
        self.advance();
        if self.peek_char() == Some('=') {
            self.advance();
            with_equals
        } else {
            single
        }
    }

    /// Scans `&`/`&&` or `|`/`||`.
    fn scan_doubled(&mut self, c: char, kind: TokenKind) -> TokenKind {
        self.advance();
        if self.peek_char() == Some(c) {
            self.advance();
        }
        kind
    }

    /// Scans a back-quoted column header like `` `Demand (out of 10)` ``.
    fn scan_quoted_column(&mut self) -> TokenKind {
        self.advance(); // consume opening '`'
        let start = self.position;
        loop {
            match self.peek_char() {
                Some('`') => break,
                Some(_) => self.advance(),
                None => return TokenKind::Error("unterminated back-quoted column".into()),
            }
        }
        let text = &self.source[start..self.position];
        self.advance(); // consume closing '`'

        Column::from_header(text)
            .or_else(|| Column::from_alias(text.trim()))
            .map_or_else(|| TokenKind::Ident(text.to_string()), TokenKind::Field)
    }

    /// Scans a numeric literal with an optional sign and fraction.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        let mut has_dot = false;

        if matches!(self.peek_char(), Some('-' | '+')) {
            self.advance();
        }

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.advance();
            } else if c == '.' && !has_dot {
                has_dot = true;
                self.advance();
            } else {
                break;
            }
        }

        let text = &self.source[start..self.position];
        match text.parse::<f64>() {
            Ok(n) if n.is_finite() => TokenKind::Number(n),
            Ok(_) => TokenKind::Error(format!("number out of range: {text}")),
            Err(e) => TokenKind::Error(format!("invalid number '{text}': {e}")),
        }
    }

    /// Scans an identifier, keyword, or column alias.
    fn scan_ident(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(is_ident_char) {
            self.advance();
        }
        let text = &self.source[start..self.position];

        if text.eq_ignore_ascii_case("and") {
            TokenKind::And
        } else if text.eq_ignore_ascii_case("or") {
            TokenKind::Or
        } else if text.eq_ignore_ascii_case("not") {
            TokenKind::Not
        } else if let Some(column) = Column::from_alias(text) {
            TokenKind::Field(column)
        } else {
            TokenKind::Ident(text.to_string())
        }
    }
}

/// Returns true if `c` can start an identifier.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

/// Returns true if `c` can appear in an identifier (not at start).
fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
