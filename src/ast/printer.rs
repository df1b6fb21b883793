/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     printer.rs
 * Purpose:  Renders an expression tree as a fully parenthesized
 *           s-expression, e.g. `(* (- 123) (group 45.67))`.
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
use crate::lexer::token::Token;

/// Pretty-prints expression trees in prefix (Lisp) notation.
///
/// Grouping nodes render as `(group ...)`, so explicit parentheses in the
/// source survive into the printed form.
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    pub fn print(&mut self, expr: &Expr) -> String {
        expr.accept(self)
    }

    fn parenthesize(&mut self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = String::new();

        out.push('(');
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&expr.accept(self));
        }
        out.push(')');

        out
    }
}

impl Default for AstPrinter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprVisitor<String> for AstPrinter {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[left, right])
    }

    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> String {
        self.parenthesize(&operator.lexeme, &[right])
    }

    fn visit_grouping(&mut self, inner: &Expr) -> String {
        self.parenthesize("group", &[inner])
    }

    fn visit_literal(&mut self, value: &Lit) -> String {
        value.to_string()
    }
}
