/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     expr.rs
 * Purpose:  The Briar expression AST and its visitor traversal contract.
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

use crate::lexer::token::Token;
use serde::Serialize;
use std::fmt;

/// The decoded value of a literal expression.
///
/// A closed union rather than an open-ended dynamic value, so every
/// visitor can match it exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Lit {
    Bool(bool),
    Nil,
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Lit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lit::Bool(b) => write!(f, "{}", b),
            Lit::Nil => write!(f, "nil"),
            Lit::Int(n) => write!(f, "{}", n),
            Lit::Float(x) => write!(f, "{}", x),
            Lit::Str(s) => write!(f, "{}", s),
        }
    }
}

/// A Briar expression tree node.
///
/// The tree is acyclic and strictly owned top-down: each child is boxed
/// inside exactly one parent, and the whole tree lives as long as whoever
/// holds the root the parser returned.
#[derive(Debug, Clone, Serialize)]
pub enum Expr {
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    Unary {
        operator: Token,
        right: Box<Expr>,
    },

    /// Explicit parenthesization. Semantically a no-op, but preserved so
    /// printers can round-trip the structure the user wrote.
    Grouping(Box<Expr>),

    Literal(Lit),
}

/// The traversal contract every AST consumer implements.
///
/// One handler per expression variant; [`Expr::accept`] routes each node
/// to the matching handler and the handler recurses into the children it
/// receives. Consumers never inspect node internals outside this contract.
pub trait ExprVisitor<R> {
    fn visit_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> R;
    fn visit_unary(&mut self, operator: &Token, right: &Expr) -> R;
    fn visit_grouping(&mut self, inner: &Expr) -> R;
    fn visit_literal(&mut self, value: &Lit) -> R;
}

impl Expr {
    /// Dispatches this node to the matching visitor handler.
    pub fn accept<R>(&self, visitor: &mut dyn ExprVisitor<R>) -> R {
        match self {
            Expr::Binary { left, operator, right } => visitor.visit_binary(left, operator, right),
            Expr::Unary { operator, right } => visitor.visit_unary(operator, right),
            Expr::Grouping(inner) => visitor.visit_grouping(inner),
            Expr::Literal(value) => visitor.visit_literal(value),
        }
    }
}
