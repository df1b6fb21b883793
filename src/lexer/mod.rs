/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for the Briar lexical scanner.
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

/// Token and decoded-literal definitions.
pub mod token;

/// The reserved-word table.
pub mod keywords;

/// The scanner itself.
pub mod scanner;

pub use scanner::Scanner;
pub use token::{Token, TokenKind, TokenLiteral};

use crate::diagnostics::Reporter;

/// Scans `source` into an end-of-input-terminated token sequence.
///
/// Convenience entry point over [`Scanner`]; lexical errors land in
/// `reporter` and never abort the scan.
pub fn tokenize(source: &str, reporter: &mut Reporter) -> Vec<Token> {
    Scanner::new(source, reporter).scan_tokens()
}
