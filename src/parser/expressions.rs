/*
 * ==========================================================================
 * BRIAR - A Thorny Little Expression Language
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Implements the Briar expression grammar using recursive descent
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * This module contains the **entire Briar expression grammar**.
 *
 * Parsing order follows strict precedence, loosest binding first:
 *
 *   conditional → logical → equality → comparison → term → factor
 *               → unary → primary
 *
 * Every left-associative layer folds repeated operators with a loop, so
 * chains like `a and b and c` or `8 - 4 - 2` nest to the left. A single
 * conditional at any layer would silently truncate such chains.
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

use crate::ast::expr::{Expr, Lit};
use crate::error::Result;
use crate::lexer::token::{TokenKind, TokenLiteral};
use crate::parser::parser::Parser;

impl<'a> Parser<'a> {
    /// expression → conditional
    pub fn expression(&mut self) -> Result<Expr> {
        self.conditional()
    }

    /// conditional → logical ( "?" expression ":" conditional )?
    ///
    /// The ternary is right-associative at the then/else boundary and is
    /// encoded as two nested binary nodes (`?` above `:`), keeping the AST
    /// closed at four variants so every visitor stays exhaustive.
    fn conditional(&mut self) -> Result<Expr> {
        let expr = self.logical()?;

        if self.match_kinds(&[TokenKind::Question]) {
            let question = self.previous().clone();
            let then_branch = self.expression()?;
            let colon = self.consume(TokenKind::Colon, "Expect ':' after expression")?;
            let else_branch = self.conditional()?;

            return Ok(Expr::Binary {
                left: Box::new(expr),
                operator: question,
                right: Box::new(Expr::Binary {
                    left: Box::new(then_branch),
                    operator: colon,
                    right: Box::new(else_branch),
                }),
            });
        }

        Ok(expr)
    }

    /// logical → equality ( ( "and" | "or" ) equality )*
    fn logical(&mut self) -> Result<Expr> {
        let mut expr = self.equality()?;

        while self.match_kinds(&[TokenKind::And, TokenKind::Or]) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// equality → comparison ( ( "!=" | "==" ) comparison )*
    fn equality(&mut self) -> Result<Expr> {
        let mut expr = self.comparison()?;

        while self.match_kinds(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            let right = self.comparison()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// comparison → term ( ( ">" | ">=" | "<" | "<=" ) term )*
    fn comparison(&mut self) -> Result<Expr> {
        let mut expr = self.term()?;

        while self.match_kinds(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            let right = self.term()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// term → factor ( ( "-" | "+" ) factor )*
    fn term(&mut self) -> Result<Expr> {
        let mut expr = self.factor()?;

        while self.match_kinds(&[TokenKind::Minus, TokenKind::Plus]) {
            let operator = self.previous().clone();
            let right = self.factor()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// factor → unary ( ( "/" | "*" ) unary )*
    fn factor(&mut self) -> Result<Expr> {
        let mut expr = self.unary()?;

        while self.match_kinds(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// unary → ( "!" | "-" ) unary | primary
    ///
    /// Self-recursive so chained prefixes (`--x`, `!!x`) nest to the right.
    fn unary(&mut self) -> Result<Expr> {
        if self.match_kinds(&[TokenKind::Bang, TokenKind::Minus]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.primary()
    }

    /// primary → literal | "(" expression ")" | error productions
    fn primary(&mut self) -> Result<Expr> {
        if self.match_kinds(&[TokenKind::False]) {
            return Ok(Expr::Literal(Lit::Bool(false)));
        }
        if self.match_kinds(&[TokenKind::True]) {
            return Ok(Expr::Literal(Lit::Bool(true)));
        }
        if self.match_kinds(&[TokenKind::Nil]) {
            return Ok(Expr::Literal(Lit::Nil));
        }

        if self.match_kinds(&[TokenKind::Number, TokenKind::String]) {
            // The scanner always attaches a decoded literal to Number and
            // String tokens.
            let lit = match &self.previous().literal {
                Some(TokenLiteral::Int(n)) => Lit::Int(*n),
                Some(TokenLiteral::Float(x)) => Lit::Float(*x),
                Some(TokenLiteral::Str(s)) => Lit::Str(s.clone()),
                None => Lit::Nil,
            };
            return Ok(Expr::Literal(lit));
        }

        if self.match_kinds(&[TokenKind::LeftParen]) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        // Soft recovery: a binary operator with no left operand. Report it,
        // then consume the orphaned right operand at the operator's own
        // precedence so the cursor stays synchronized, and hand back a
        // placeholder instead of unwinding.
        if self.match_kinds(&[TokenKind::BangEqual, TokenKind::EqualEqual]) {
            let operator = self.previous().clone();
            self.reporter.error_at(&operator, "Missing left-hand operand");
            self.equality()?;
            return Ok(Expr::Literal(Lit::Nil));
        }
        if self.match_kinds(&[
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
        ]) {
            let operator = self.previous().clone();
            self.reporter.error_at(&operator, "Missing left-hand operand");
            self.comparison()?;
            return Ok(Expr::Literal(Lit::Nil));
        }
        if self.match_kinds(&[TokenKind::Plus]) {
            let operator = self.previous().clone();
            self.reporter.error_at(&operator, "Missing left-hand operand");
            self.term()?;
            return Ok(Expr::Literal(Lit::Nil));
        }
        if self.match_kinds(&[TokenKind::Slash, TokenKind::Star]) {
            let operator = self.previous().clone();
            self.reporter.error_at(&operator, "Missing left-hand operand");
            self.factor()?;
            return Ok(Expr::Literal(Lit::Nil));
        }

        Err(self.error(self.peek().clone(), "Expect expression"))
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostics::Reporter;
    use crate::lexer::token::TokenKind;
    use crate::lexer::tokenize;
    use crate::parser::parser::Parser;

    #[test]
    fn missing_operand_recovery_consumes_the_right_operand() {
        let mut reporter = Reporter::new();
        let tokens = tokenize("* 5", &mut reporter);
        let mut parser = Parser::new(tokens, &mut reporter);

        let expr = parser.expression().expect("soft recovery must not unwind");
        assert!(parser.is_at_end(), "cursor must sit past the consumed '5'");
        drop(expr);

        assert_eq!(reporter.diagnostics().len(), 1);
        let diagnostic = &reporter.diagnostics()[0];
        assert_eq!(diagnostic.message, "Missing left-hand operand");
        assert_eq!(diagnostic.location, " at '*'");
    }

    #[test]
    fn hard_error_leaves_cursor_on_the_offending_token() {
        let mut reporter = Reporter::new();
        let tokens = tokenize(") 1", &mut reporter);
        let mut parser = Parser::new(tokens, &mut reporter);

        assert!(parser.expression().is_err());
        assert_eq!(parser.peek().kind, TokenKind::RightParen);
    }
}
