/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the fundamental lexical token types used by the Briar
 *            front end during the scanning and parsing stages.
 *
 * License:
 * This file is part of the Briar programming language project.
 *
 * Briar is dual-licensed under the terms of:
 *   - The MIT License
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
use serde::Serialize;
use std::fmt;

/// Represents the **category of a lexical token** in the Briar language.
///
/// `TokenKind` identifies how a sequence of characters from the source
/// code should be interpreted by the parser.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Scanner → TokenKind → Parser → AST
/// ```
///
/// Each token kind directly influences:
/// - Expression parsing
/// - Operator precedence
/// - Error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    // Single-character punctuation and operators.
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Question,
    Colon,

    // One- or two-character operators.
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals.
    Identifier,
    String,
    Number,

    // Reserved keywords.
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    /// End-of-input marker.
    ///
    /// This token is always appended as the **final token** during
    /// scanning and is used by the parser to determine when input has
    /// been fully consumed.
    Eof,
}

/// The decoded value carried by a literal token.
///
/// Only `Number` and `String` tokens carry one; every other kind leaves
/// the field absent. A digit run with a fractional part decodes as
/// `Float`, a plain digit run as `Int`, and a string body is taken
/// verbatim between its quotes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenLiteral {
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for TokenLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenLiteral::Int(n) => write!(f, "{}", n),
            TokenLiteral::Float(x) => write!(f, "{}", x),
            TokenLiteral::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Represents a **single lexical token** produced by the Briar scanner.
///
/// A `Token` is a fully classified unit of source code consisting of:
/// - A token category (`TokenKind`)
/// - The original source text (`lexeme`)
/// - The decoded literal value, when the token is a literal
/// - The source position for error reporting
///
/// Tokens are immutable once created. The scanner produces the full
/// sequence exactly once per scan and the parser consumes it without
/// mutating it.
#[derive(Debug, Clone, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token.
    ///
    /// This value is preserved verbatim for:
    /// - Error messages
    /// - Debug output
    pub lexeme: String,

    /// The decoded literal value, present only for literal tokens.
    pub literal: Option<TokenLiteral>,

    /// The source position where this token's lexeme began.
    pub span: Span,
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**.
    ///
    /// This implementation intentionally prints only the token's lexeme
    /// (the exact source text), rather than its full internal structure.
    /// In compiler error output, users care about *what they wrote*, not
    /// about kind tags and spans.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
