/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
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

use crate::span::Span;
use std::fmt;

/// A hard syntax error raised inside the parser.
///
/// By the time one of these is constructed the error has already been
/// reported through the [`Reporter`](crate::diagnostics::Reporter); the
/// value itself only unwinds the recursive descent back to the top-level
/// `parse` entry point, which discards the partial tree.
#[derive(Debug, Clone)]
pub struct SyntaxError {
    /// Human-readable error message.
    pub message: String,

    /// Primary source location.
    pub span: Span,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.span.line, self.message)
    }
}

impl std::error::Error for SyntaxError {}

/// Parser-internal result alias.
pub type Result<T> = std::result::Result<T, SyntaxError>;
