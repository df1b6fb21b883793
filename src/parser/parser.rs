/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver function used to transform a token stream into an expression tree
 * for the Briar programming language.
 *
 * The parsing implementation itself is split across multiple modules:
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token matching, consumption, and synchronization
 *
 * This file serves as the **root coordinator** of the parsing process.
 *
 * --------------------------------------------------------------------------
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

use crate::ast::Expr;
use crate::diagnostics::Reporter;
use crate::lexer::token::Token;

/// The core Briar recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the scanner
/// - The current cursor position into that stream
/// - A borrow of the driver-owned diagnostic reporter
///
/// The cursor is monotonically non-decreasing; one instance parses one
/// token stream, once, and must not be reused across independent parses.
/// The grammar logic is implemented through extension modules
/// (`expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser<'a> {
    /// Complete list of tokens to be parsed. Always terminated by a
    /// single end-of-input sentinel.
    pub(crate) tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub(crate) current: usize,

    /// Shared diagnostic sink.
    pub(crate) reporter: &'a mut Reporter,
}

/// Public entry point for the Briar parsing phase.
///
/// Creates a fresh `Parser` over `tokens` and runs it to completion.
///
/// # Returns
/// `Some(expr)` on success; `None` after an unrecoverable syntax error,
/// in which case at least one diagnostic has been reported.
pub fn parse(tokens: Vec<Token>, reporter: &mut Reporter) -> Option<Expr> {
    let mut parser = Parser::new(tokens, reporter);
    parser.parse()
}

impl<'a> Parser<'a> {
    pub fn new(tokens: Vec<Token>, reporter: &'a mut Reporter) -> Self {
        Self {
            tokens,
            current: 0,
            reporter,
        }
    }

    /// Parses one expression from the token stream.
    ///
    /// A hard syntax error unwinds back here through the `Result` chain;
    /// the cursor is then synchronized to the next plausible statement
    /// boundary (so future statement parsing can surface several
    /// independent errors per run) and `None` is returned. The caller must
    /// check for the absent result before using the tree.
    pub fn parse(&mut self) -> Option<Expr> {
        match self.expression() {
            Ok(expr) => Some(expr),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }
}
