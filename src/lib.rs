/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Library root exposing the Briar front-end pipeline.
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

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;

use crate::ast::Expr;
use crate::diagnostics::Reporter;

/// Runs the full front-end pipeline over `source`.
///
/// ```text
/// source text → Scanner → tokens → Parser → AST root
/// ```
///
/// Lexical and syntactic errors land in `reporter`; the caller decides
/// what to do with a run that reported diagnostics (and must not use the
/// tree of such a run for anything downstream).
///
/// # Returns
/// `Some(expr)` when parsing produced a tree, `None` after an
/// unrecoverable syntax error.
pub fn parse_source(source: &str, reporter: &mut Reporter) -> Option<Expr> {
    let tokens = lexer::tokenize(source, reporter);
    parser::parse(tokens, reporter)
}
