/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:      scanner.rs
 * Purpose:   Single-pass lexical scanner converting Briar source text into
 *            an ordered, end-of-input-terminated token sequence.
 *
 * License:
 * This file is part of the Briar programming language project.
 *
 * Briar is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::diagnostics::Reporter;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind, TokenLiteral};
use crate::span::Span;

/// The Briar lexical scanner.
///
/// All scan state (`start`, `current`, `line`) lives on the instance, so
/// scanning is reentrant by construction; one scanner processes one
/// immutable source string to completion and is consumed doing so.
///
/// Scanning never fails outright. Lexical errors (unexpected characters,
/// unterminated strings or block comments) are sent to the shared
/// [`Reporter`] and the scan continues, so the caller always receives a
/// token sequence terminated by exactly one `Eof` token.
pub struct Scanner<'a> {
    chars: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
    line_start: usize,
    start_span: Span,
    tokens: Vec<Token>,
    reporter: &'a mut Reporter,
}

impl<'a> Scanner<'a> {
    /// Creates a new scanner over `source`, reporting into `reporter`.
    ///
    /// # Parameters
    /// - `source`: A UTF-8 encoded Briar source string.
    /// - `reporter`: The driver-owned diagnostic sink.
    ///
    /// # Returns
    /// A fully initialized `Scanner` with:
    /// - Cursor at position `0`
    /// - Line counter set to `1`
    /// - Empty token output buffer
    pub fn new(source: &str, reporter: &'a mut Reporter) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            line_start: 0,
            start_span: Span { line: 1, column: 0 },
            tokens: Vec::new(),
            reporter,
        }
    }

    /// Performs complete lexical analysis over the entire source input.
    ///
    /// Repeatedly scans individual tokens until the end of the source is
    /// reached, then appends a final `Eof` token.
    ///
    /// # Behavior
    /// - Ignores whitespace and comments
    /// - Emits structured `Token` values in source order
    /// - Guarantees a terminating `TokenKind::Eof` marker
    ///
    /// Consumes the scanner, so a fresh instance is required per source.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_span = Span {
                line: self.line,
                column: self.current - self.line_start,
            };
            self.scan_token();
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            literal: None,
            span: Span {
                line: self.line,
                column: self.current - self.line_start,
            },
        });

        self.tokens
    }

    /// Scans a single token from the source stream.
    ///
    /// Reads one character, classifies it, and routes to the specialized
    /// scans for strings, numbers, identifiers/keywords, comments, and
    /// multi-character operators (one character of lookahead).
    fn scan_token(&mut self) {
        let ch = self.advance();

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '?' => self.add_token(TokenKind::Question),
            ':' => self.add_token(TokenKind::Colon),

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }

            // Line comment, block comment, or division.
            '/' => {
                if self.match_char('/') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else if self.match_char('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            // Whitespace.
            ' ' | '\r' | '\t' => {}
            '\n' => self.newline(),

            '"' => self.string(),

            '0'..='9' => self.number(),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),

            _ => self.reporter.error(self.line, "Unexpected character"),
        }
    }

    /// Scans a string literal after the opening `"` has been consumed.
    ///
    /// The body is taken verbatim between the quotes (no escape
    /// sequences). Newlines inside the string bump the line counter, but
    /// the emitted token is attributed to the line the string began on.
    ///
    /// An unterminated string reports "Unterminated string" and emits no
    /// token; scanning continues from end of input.
    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            let ch = self.advance();
            if ch == '\n' {
                self.line += 1;
                self.line_start = self.current;
            }
        }

        if self.is_at_end() {
            self.reporter.error(self.line, "Unterminated string");
            return;
        }

        // Closing quote.
        self.advance();

        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();
        self.push_token(TokenKind::String, Some(TokenLiteral::Str(value)));
    }

    /// Scans an integer or floating-point numeric literal.
    ///
    /// Consumes a digit run, then a `.` plus digit run only when a digit
    /// actually follows the dot (so `1.` leaves the dot for the parser).
    /// The decode path is chosen by whether a fractional part was
    /// consumed: `Float` with one, `Int` without.
    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        let mut has_fraction = false;
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            has_fraction = true;
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text: String = self.chars[self.start..self.current].iter().collect();

        let literal = if has_fraction {
            text.parse::<f64>().ok().map(TokenLiteral::Float)
        } else {
            text.parse::<i64>().ok().map(TokenLiteral::Int)
        };

        match literal {
            Some(literal) => self.push_token(TokenKind::Number, Some(literal)),
            None => self.reporter.error(self.start_span.line, "Number literal out of range"),
        }
    }

    /// Scans an identifier or keyword token.
    ///
    /// Reads the longest run of ASCII alphanumeric and underscore
    /// characters (the same set that can start one), then consults the
    /// keyword table. Every reserved word, including `or`, flows through
    /// this single path.
    fn identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text: String = self.chars[self.start..self.current].iter().collect();
        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    /// Skips a block comment delimited by `/* ... */`.
    ///
    /// Tracks line numbers across the comment body. Reaching end of input
    /// before the closing delimiter reports "Unexpected end of comment"
    /// and leaves the scan at end of input; this is non-fatal.
    fn block_comment(&mut self) {
        while !self.is_at_end() {
            if self.peek() == '*' && self.peek_next() == '/' {
                self.advance();
                self.advance();
                return;
            }

            let ch = self.advance();
            if ch == '\n' {
                self.line += 1;
                self.line_start = self.current;
            }
        }

        self.reporter.error(self.line, "Unexpected end of comment");
    }

    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    /// Conditionally consumes the next character.
    ///
    /// # Returns
    /// - `true` if the next character matched `expected` and was consumed
    /// - `false` otherwise (no consumption)
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() {
            return false;
        }
        if self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.push_token(kind, None);
    }

    /// Emits a token for the current lexeme, attributed to the position
    /// the lexeme began at.
    fn push_token(&mut self, kind: TokenKind, literal: Option<TokenLiteral>) {
        let lexeme: String = self.chars[self.start..self.current].iter().collect();
        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            span: self.start_span,
        });
    }

    /// Advances the scan cursor by one character.
    ///
    /// # Safety
    /// Caller must ensure end of input has not been reached.
    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    /// Returns the current character without consuming it, or `'\0'` at
    /// end of input.
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    /// Returns the character after the current one without consuming it,
    /// or `'\0'` if the lookahead runs past the input.
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
