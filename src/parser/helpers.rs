/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     helpers.rs
 * Purpose:  Cursor primitives and panic-mode synchronization shared by the
 *           whole parser.
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

use crate::error::SyntaxError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl<'a> Parser<'a> {
    /// Returns the current token without consuming it.
    pub(crate) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Returns the previously consumed token.
    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Consumes the current token and returns it.
    ///
    /// Never moves past the end-of-input sentinel.
    pub(crate) fn advance(&mut self) -> Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous().clone()
    }

    /// True iff the cursor sits on the end-of-input sentinel.
    pub(crate) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// True iff not at end of input and the current token matches `kind`.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek().kind == kind
    }

    /// Consumes the current token if its kind is any of `kinds`.
    ///
    /// # Returns
    /// - `true` if a kind matched and one token was consumed
    /// - `false` otherwise, with the token stream left untouched
    pub(crate) fn match_kinds(&mut self, kinds: &[TokenKind]) -> bool {
        for &kind in kinds {
            if self.check(kind) {
                self.advance();
                return true;
            }
        }

        false
    }

    /// Consumes a required token or raises a hard syntax error.
    ///
    /// The error is attributed to the current token (rendered `at end`
    /// when that token is the end-of-input sentinel).
    pub(crate) fn consume(&mut self, kind: TokenKind, message: &str) -> Result<Token, SyntaxError> {
        if self.check(kind) {
            return Ok(self.advance());
        }

        Err(self.error(self.peek().clone(), message))
    }

    /// Reports a syntax error at `token` and builds the value that unwinds
    /// the recursive descent.
    pub(crate) fn error(&mut self, token: Token, message: &str) -> SyntaxError {
        self.reporter.error_at(&token, message);
        SyntaxError::new(message, token.span)
    }

    /// Panic-mode recovery: skips tokens until a statement boundary is
    /// plausible.
    ///
    /// Stops immediately after a `;`, or just in front of a keyword that
    /// can begin a statement. With only the expression grammar in place
    /// this is a forward-looking hook for statement parsing, but the
    /// cursor discipline is real and tested.
    pub(crate) fn synchronize(&mut self) {
        // Nothing to skip when the error already sits on the sentinel;
        // advancing here would also ask for a previous token that may not
        // exist (empty input).
        if self.is_at_end() {
            return;
        }

        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon {
                return;
            }

            match self.peek().kind {
                TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return => return,
                _ => {}
            }

            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::Reporter;
    use crate::lexer::token::TokenKind;
    use crate::lexer::tokenize;
    use crate::parser::parser::Parser;

    #[test]
    fn synchronize_stops_after_semicolon() {
        let mut reporter = Reporter::new();
        let tokens = tokenize("1 2 ; 3", &mut reporter);
        let mut parser = Parser::new(tokens, &mut reporter);

        parser.synchronize();
        assert_eq!(parser.peek().kind, TokenKind::Number);
        assert_eq!(parser.peek().lexeme, "3");
        assert_eq!(parser.previous().kind, TokenKind::Semicolon);
    }

    #[test]
    fn synchronize_stops_before_statement_keyword() {
        let mut reporter = Reporter::new();
        let tokens = tokenize("+ + var x", &mut reporter);
        let mut parser = Parser::new(tokens, &mut reporter);

        parser.synchronize();
        assert_eq!(parser.peek().kind, TokenKind::Var);
    }

    #[test]
    fn synchronize_is_a_no_op_on_an_empty_stream() {
        let mut reporter = Reporter::new();
        let tokens = tokenize("", &mut reporter);
        let mut parser = Parser::new(tokens, &mut reporter);

        parser.synchronize();
        assert!(parser.is_at_end());
        assert_eq!(parser.peek().kind, TokenKind::Eof);
    }

    #[test]
    fn synchronize_runs_out_at_end_of_input() {
        let mut reporter = Reporter::new();
        let tokens = tokenize("1 2 3", &mut reporter);
        let mut parser = Parser::new(tokens, &mut reporter);

        parser.synchronize();
        assert!(parser.is_at_end());
    }

    #[test]
    fn advance_never_moves_past_the_sentinel() {
        let mut reporter = Reporter::new();
        let tokens = tokenize("1", &mut reporter);
        let mut parser = Parser::new(tokens, &mut reporter);

        for _ in 0..5 {
            parser.advance();
        }
        assert_eq!(parser.peek().kind, TokenKind::Eof);
    }

    #[test]
    fn check_is_false_for_the_sentinel_itself() {
        let mut reporter = Reporter::new();
        let tokens = tokenize("", &mut reporter);
        let parser = Parser::new(tokens, &mut reporter);

        assert!(!parser.check(TokenKind::Eof));
        assert!(parser.is_at_end());
    }
}
