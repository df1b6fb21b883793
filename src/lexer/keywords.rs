/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords for the Briar programming
 *            language.
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

use crate::lexer::token::TokenKind;

/// Maps an identifier to its **reserved keyword** kind, if it is one.
///
/// This function is used exclusively by the scanner during tokenization to
/// distinguish **user-defined identifiers** from **language-defined
/// keywords**. Every word in the source flows through the same
/// longest-match identifier scan first, so `fortune` is one identifier
/// rather than `for` followed by `tune`, and `or` is recognized here
/// rather than by any special case in the scanner.
///
/// # Parameters
/// - `word`: The identifier string extracted from source code.
///
/// # Returns
/// - `Some(kind)` if the word is a reserved Briar keyword.
/// - `None` if the word should be treated as a normal identifier.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "and" => Some(TokenKind::And),
        "class" => Some(TokenKind::Class),
        "else" => Some(TokenKind::Else),
        "false" => Some(TokenKind::False),
        "for" => Some(TokenKind::For),
        "fun" => Some(TokenKind::Fun),
        "if" => Some(TokenKind::If),
        "nil" => Some(TokenKind::Nil),
        "or" => Some(TokenKind::Or),
        "print" => Some(TokenKind::Print),
        "return" => Some(TokenKind::Return),
        "super" => Some(TokenKind::Super),
        "this" => Some(TokenKind::This),
        "true" => Some(TokenKind::True),
        "var" => Some(TokenKind::Var),
        "while" => Some(TokenKind::While),
        _ => None,
    }
}
