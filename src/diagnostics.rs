/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:      diagnostics.rs
 * Purpose:   The shared error sink used by the scanner and the parser.
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

use crate::lexer::token::{Token, TokenKind};
use std::fmt;

/// A single recorded error, lexical or syntactic.
///
/// Rendered as `[line <N>] Error<location>: <message>`, where the location
/// is empty for lexical errors, `" at end"` when a syntax error points at
/// the end-of-input token, and `" at '<lexeme>'"` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based source line the error is attributed to.
    pub line: usize,

    /// Location fragment inserted after `Error` in the rendered form.
    pub location: String,

    /// Human-readable error message.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error{}: {}", self.line, self.location, self.message)
    }
}

/// The append-only diagnostic sink for one run of the front end.
///
/// The driver owns exactly one `Reporter` and lends it (`&mut`) to the
/// scanner and then the parser, so every error from a single run lands in
/// one ordered list. Each diagnostic is written to stderr the moment it is
/// reported and retained for later inspection.
///
/// Diagnostics are never cleared mid-parse; the driver resets the
/// had-error flag between independent runs (for example between REPL
/// lines).
#[derive(Debug, Default)]
pub struct Reporter {
    diagnostics: Vec<Diagnostic>,
    had_error: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reports a lexical error with no token context.
    pub fn error(&mut self, line: usize, message: &str) {
        self.report(line, String::new(), message);
    }

    /// Reports a syntax error attributed to a specific token.
    ///
    /// The end-of-input token renders as `at end`; every other token
    /// renders with its original lexeme.
    pub fn error_at(&mut self, token: &Token, message: &str) {
        let location = if token.kind == TokenKind::Eof {
            " at end".to_string()
        } else {
            format!(" at '{}'", token.lexeme)
        };
        self.report(token.span.line, location, message);
    }

    fn report(&mut self, line: usize, location: String, message: &str) {
        let diagnostic = Diagnostic {
            line,
            location,
            message: message.to_string(),
        };
        eprintln!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
        self.had_error = true;
    }

    /// True if any diagnostic has been reported since the last reset.
    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Every diagnostic reported so far, in source order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Clears the had-error flag between independent runs.
    ///
    /// The recorded diagnostics themselves are append-only and survive the
    /// reset.
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}
