/*
 * ==========================================================================
 * BISAYA++ - Sugod na!
 * ==========================================================================
 *
 * Statement-Level Parsing Logic
 *
 * This file contains all grammar rules responsible for parsing Bisaya++
 * statements into their corresponding AST forms.
 *
 * It handles:
 * - Declarations (`MUGNA NUMERO a, b = 2`)
 * - Control flow (`KUNG`, `KUNG DILI`, `KUNG WALA`, `ALANG SA`)
 * - Console statements (`IPAKITA:`, `DAWAT:`)
 * - Blocks and expression statements
 *
 * --------------------------------------------------------------------------
 * License:
 * This file is part of the Bisaya++ programming language project.
 *
 * Bisaya++ is dual-licensed under the terms of:
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

use crate::ast::{Expr, Stmt, Var};
use crate::lexer::token::TokenKind;
use crate::parser::parser::{ParseResult, Parser};
use crate::value::{DeclaredType, Value};

impl Parser {
    /// declaration → "MUGNA" var_declaration | statement
    ///
    /// This is the recovery point of the parser: a malformed statement is
    /// reported, skipped up to the next boundary and dropped from the tree.
    pub(crate) fn declaration(&mut self) -> Option<Stmt> {
        let result = if self.match_kind(TokenKind::Declare) {
            self.var_declaration()
        } else {
            self.statement()
        };

        match result {
            Ok(stmt) => Some(stmt),
            Err(_) => {
                self.synchronize();
                None
            }
        }
    }

    /// Parses a single statement.
    ///
    /// This is the **main dispatcher** for statement grammar forms. It
    /// inspects the leading token and routes to the appropriate parser,
    /// falling back to an expression statement.
    pub(crate) fn statement(&mut self) -> ParseResult<Stmt> {
        if self.match_kind(TokenKind::If) {
            return self.if_statement();
        }

        if self.match_kind(TokenKind::For) {
            return self.for_statement();
        }

        if self.match_kind(TokenKind::Print) {
            return self.print_statement();
        }

        if self.match_kind(TokenKind::Input) {
            return self.input_statement();
        }

        if self.match_kind(TokenKind::LeftBrace) {
            return Ok(Stmt::Block(self.block()?));
        }

        self.expression_statement()
    }

    /// var_declaration → type var_entry ( "," var_entry )*
    fn var_declaration(&mut self) -> ParseResult<Stmt> {
        let declared_type = self.type_name()?;

        let mut vars = Vec::new();
        loop {
            vars.push(self.var_entry(declared_type)?);

            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }

        Ok(Stmt::VarDeclarationList(vars))
    }

    /// type → "NUMERO" | "TIPIK" | "LETRA" | "TINUOD"
    fn type_name(&mut self) -> ParseResult<DeclaredType> {
        if let Some(declared_type) = DeclaredType::from_token_kind(&self.peek().kind) {
            self.advance();
            return Ok(declared_type);
        }

        Err(self.error(
            self.peek().clone(),
            "Expect type name (NUMERO, TIPIK, LETRA or TINUOD) after 'MUGNA'.",
        ))
    }

    /// var_entry → IDENTIFIER ( "=" expression )?
    fn var_entry(&mut self, declared_type: DeclaredType) -> ParseResult<Var> {
        let name = self.consume(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.match_kind(TokenKind::Assign) {
            Some(self.expression()?)
        } else {
            None
        };

        Ok(Var {
            name,
            initializer,
            declared_type,
        })
    }

    /// if → "KUNG" "(" expression ")" "PUNDOK" statement
    ///      ( "KUNG DILI" if_tail | "KUNG WALA" "PUNDOK" statement )?
    ///
    /// `KUNG DILI` re-enters this rule, so an else-if chain becomes a chain
    /// of nested `If` nodes hanging off each `else_branch`.
    fn if_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'KUNG'.")?;
        let condition = self.expression()?;
        self.consume(TokenKind::RightParen, "Expect ')' after KUNG condition.")?;
        self.consume(TokenKind::Block, "Expect 'PUNDOK' after ')'.")?;

        let then_branch = Box::new(self.statement()?);

        let else_branch = if self.match_kind(TokenKind::ElseIf) {
            Some(Box::new(self.if_statement()?))
        } else if self.match_kind(TokenKind::Else) {
            self.consume(TokenKind::Block, "Expect 'PUNDOK' after 'KUNG WALA'.")?;
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    /// for → "ALANG SA" "(" init? "," expression? "," expression? ")" "PUNDOK" statement
    ///
    /// There is no for node in the tree. The loop is lowered here to:
    ///
    /// ```text
    /// Block [
    ///     init,
    ///     While(condition or OO, Block [ body, increment ])
    /// ]
    /// ```
    ///
    /// The outer block keeps the loop variable out of the enclosing scope.
    fn for_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::LeftParen, "Expect '(' after 'ALANG SA'.")?;

        let initializer = if self.check(TokenKind::Comma) {
            None
        } else if self.match_kind(TokenKind::Declare) {
            let declared_type = self.type_name()?;
            Some(Stmt::Var(self.var_entry(declared_type)?))
        } else {
            Some(Stmt::Expression(self.expression()?))
        };
        self.consume(TokenKind::Comma, "Expect ',' after loop initializer.")?;

        let condition = if self.check(TokenKind::Comma) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Comma, "Expect ',' after loop condition.")?;

        let increment = if self.check(TokenKind::RightParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RightParen, "Expect ')' after ALANG SA clauses.")?;
        self.consume(TokenKind::Block, "Expect 'PUNDOK' after ')'.")?;

        let body = self.statement()?;

        let mut body_statements = vec![body];
        if let Some(increment) = increment {
            body_statements.push(Stmt::Expression(increment));
        }

        let condition = condition.unwrap_or(Expr::Literal(Value::Bool(true)));

        let mut statements = Vec::new();
        if let Some(initializer) = initializer {
            statements.push(initializer);
        }
        statements.push(Stmt::While {
            condition,
            body: Box::new(Stmt::Block(body_statements)),
        });

        Ok(Stmt::Block(statements))
    }

    /// print → "IPAKITA" ":" expression
    fn print_statement(&mut self) -> ParseResult<Stmt> {
        let keyword = self.previous().clone();
        self.consume(TokenKind::Colon, "Expect ':' after 'IPAKITA'.")?;
        let value = self.expression()?;
        Ok(Stmt::Print { keyword, value })
    }

    /// input → "DAWAT" ":" IDENTIFIER ( "," IDENTIFIER )*
    fn input_statement(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::Colon, "Expect ':' after 'DAWAT'.")?;

        let mut names = Vec::new();
        loop {
            names.push(self.consume(TokenKind::Identifier, "Expect variable name.")?);

            if !self.match_kind(TokenKind::Comma) {
                break;
            }
        }

        Ok(Stmt::Input(names))
    }

    /// block → "{" declaration* "}"
    ///
    /// The opening brace has already been consumed.
    pub(crate) fn block(&mut self) -> ParseResult<Vec<Stmt>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::RightBrace)
            && !self.check(TokenKind::End)
            && !self.is_at_end()
        {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    fn expression_statement(&mut self) -> ParseResult<Stmt> {
        let expr = self.expression()?;
        Ok(Stmt::Expression(expr))
    }
}
