/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     ast/mod.rs
 * Purpose:  Root module for the Briar abstract syntax tree.
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

/// Expression node variants, the literal union, and the visitor contract.
pub mod expr;

/// Parenthesized s-expression rendering.
pub mod printer;

/// Reverse-Polish rendering.
pub mod rpn;

pub use expr::{Expr, ExprVisitor, Lit};
pub use printer::AstPrinter;
pub use rpn::RpnPrinter;
