/*
 * ==========================================================================
 * BISAYA++ - Sugod na!
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Implements the Bisaya++ expression grammar using recursive descent
 *
 * --------------------------------------------------------------------------
 *  LICENSE
 * --------------------------------------------------------------------------
 * This file is part of the Bisaya++ programming language project.
 *
 * Bisaya++ is dual-licensed under the terms of:
 *   - The MIT License
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * Parsing order, loosest binding first:
 *
 *   assignment → or → and → equality → comparison → term → factor
 *              → unary → primary
 *
 * Every binary level folds its operators into a left-associative chain.
 *
 * ==========================================================================
 */

use crate::ast::Expr;
use crate::lexer::token::TokenKind;
use crate::parser::parser::{ParseResult, Parser};
use crate::value::Value;

impl Parser {
    /// expression → assignment
    pub(crate) fn expression(&mut self) -> ParseResult<Expr> {
        self.assignment()
    }

    /// assignment → IDENTIFIER "=" assignment | or
    ///
    /// An invalid target is reported but does not unwind: the right-hand
    /// side has already been parsed, so the parser is still in step.
    fn assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.logical_or()?;

        if self.match_kind(TokenKind::Assign) {
            let equals = self.previous().clone();
            let value = self.assignment()?;

            if let Expr::Variable(name) = expr {
                return Ok(Expr::Assign {
                    name,
                    value: Box::new(value),
                });
            }

            self.error(equals, "Invalid assignment target.");
        }

        Ok(expr)
    }

    /// Parses a logical OR (`O`) expression.
    ///
    /// # Grammar
    /// ```text
    /// logical_or → logical_and ( "O" logical_and )*
    /// ```
    ///
    /// Lowest-precedence boolean operator; `a O b O c` folds to
    /// `(a O b) O c`.
    fn logical_or(&mut self) -> ParseResult<Expr> {
        let mut expr = self.logical_and()?;

        while self.match_kind(TokenKind::Or) {
            let operator = self.previous().clone();
            let right = self.logical_and()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// logical_and → equality ( "UG" equality )*
    fn logical_and(&mut self) -> ParseResult<Expr> {
        let mut expr = self.equality()?;

        while self.match_kind(TokenKind::And) {
            let operator = self.previous().clone();
            let right = self.equality()?;
            expr = Expr::Logical {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// equality → comparison ( ( "==" | "<>" ) comparison )*
    fn equality(&mut self) -> ParseResult<Expr> {
        let mut expr = self.comparison()?;

        while self.match_any(&[TokenKind::EqualEqual, TokenKind::NotEqual]) {
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
    fn comparison(&mut self) -> ParseResult<Expr> {
        let mut expr = self.term()?;

        while self.match_any(&[
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

    /// term → factor ( ( "+" | "-" | "&" | "$" ) factor )*
    fn term(&mut self) -> ParseResult<Expr> {
        let mut expr = self.factor()?;

        while self.match_any(&[
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Ampersand,
            TokenKind::Dollar,
        ]) {
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

    /// factor → unary ( ( "*" | "/" | "%" ) unary )*
    fn factor(&mut self) -> ParseResult<Expr> {
        let mut expr = self.unary()?;

        while self.match_any(&[TokenKind::Star, TokenKind::Slash, TokenKind::Percent]) {
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

    /// unary → ( "-" | "DILI" &"(" ) unary | primary
    ///
    /// `DILI` doubles as the false literal. It only acts as logical not
    /// when a parenthesised operand follows it directly.
    fn unary(&mut self) -> ParseResult<Expr> {
        let is_not = self.check(TokenKind::False) && self.check_next(TokenKind::LeftParen);

        if is_not || self.check(TokenKind::Minus) {
            let operator = self.advance();
            let right = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.primary()
    }

    fn primary(&mut self) -> ParseResult<Expr> {
        if self.match_kind(TokenKind::True) {
            return Ok(Expr::Literal(Value::Bool(true)));
        }

        if self.match_kind(TokenKind::False) {
            return Ok(Expr::Literal(Value::Bool(false)));
        }

        if self.match_any(&[
            TokenKind::Number,
            TokenKind::String,
            TokenKind::Character,
            TokenKind::EscapeCode,
        ]) {
            let literal = self.previous().literal.clone().unwrap_or(Value::Null);
            return Ok(Expr::Literal(literal));
        }

        // A bare `$` is a newline on its own: IPAKITA: a & $ & b
        if self.match_kind(TokenKind::Dollar) {
            return Ok(Expr::Literal(Value::Char('\n')));
        }

        if self.match_kind(TokenKind::LeftParen) {
            let expr = self.expression()?;
            self.consume(TokenKind::RightParen, "Expect ')' after expression.")?;
            return Ok(Expr::Grouping(Box::new(expr)));
        }

        if self.match_kind(TokenKind::Identifier) {
            let name = self.previous().clone();

            // x++
            if self.check(TokenKind::Plus) && self.check_next(TokenKind::Plus) {
                self.advance();
                self.advance();
                return Ok(Expr::Increment { name });
            }

            return Ok(Expr::Variable(name));
        }

        Err(self.error(self.peek().clone(), "Expect expression."))
    }
}
