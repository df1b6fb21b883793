/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     rpn.rs
 * Purpose:  Renders an expression tree in reverse-Polish notation.
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

use crate::ast::expr::{Expr, ExprVisitor, Lit};
use crate::lexer::token::{Token, TokenKind};

/// Prints expression trees in postfix order.
///
/// Unary minus is rendered as `~` so it cannot be confused with the
/// binary subtraction operator. Grouping nodes disappear; postfix order
/// already encodes the structure.
pub struct RpnPrinter;

impl RpnPrinter {
    pub fn new() -> Self {
        RpnPrinter
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }
}

impl Default for RpnPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprVisitor<String> for RpnPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        format!("{} {} {}", left.accept(self), right.accept(self), operator.lexeme)
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        let op = if operator.kind == TokenKind::Minus {
            "~"
        } else {
            operator.lexeme.as_str()
        };
        format!("{} {}", right.accept(self), op)
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        inner.accept(self)
    }

    fn visit_literal(&mut self, value: &Lit) -> String {
        value.to_string()
    }
}
