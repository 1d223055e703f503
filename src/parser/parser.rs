/*
 * ==========================================================================
 * BISAYA++ - Sugod na!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver function used to transform a token stream into a `Program`
 * statement.
 *
 * The grammar itself is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar (`KUNG`, `ALANG SA`, etc.)
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token matching, consumption, and navigation utilities
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

use tracing::debug;

use crate::ast::Stmt;
use crate::error::BisayaError;
use crate::lexer::token::{Token, TokenKind};

/// Signal used to unwind out of a malformed statement.
///
/// It carries nothing: the diagnostic has already been recorded by the time
/// one of these is created. Only `declaration()` catches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParseError;

pub(crate) type ParseResult<T> = Result<T, ParseError>;

/// The Bisaya++ recursive-descent parser.
///
/// This structure maintains:
/// - The full token stream produced by the lexer
/// - The current cursor position into that stream
/// - Every syntax diagnostic reported so far
///
/// The actual grammar logic is implemented through extension modules
/// (`statements`, `expressions`, `helpers`) via additional `impl Parser` blocks.
pub struct Parser {
    /// Complete list of tokens to be parsed.
    pub tokens: Vec<Token>,

    /// Current cursor position within the token stream.
    pub current: usize,

    pub(crate) diagnostics: Vec<BisayaError>,
}

/// Public entry point for the parsing phase.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST → Interpreter
/// ```
///
/// # Returns
/// The `Stmt::Program` node on success, otherwise every syntax diagnostic
/// collected while recovering through the rest of the file.
pub fn parse(tokens: Vec<Token>) -> Result<Stmt, Vec<BisayaError>> {
    let mut parser = Parser::new(tokens);
    parser.parse()
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map_or(true, |token| token.kind != TokenKind::Eof) {
            let span = tokens.last().map(|token| token.span).unwrap_or_default();
            tokens.push(Token::new(TokenKind::Eof, "", None, span));
        }

        Self {
            tokens,
            current: 0,
            diagnostics: Vec::new(),
        }
    }

    /// Parses the entire token stream into a `Program`.
    ///
    /// # Behavior
    /// - A missing `SUGOD` or `KATAPUSAN` is fatal and stops parsing.
    /// - Any other syntax error is recorded, the parser resynchronises at
    ///   the next statement boundary and keeps going.
    /// - The program is only returned when no diagnostic was recorded.
    pub fn parse(&mut self) -> Result<Stmt, Vec<BisayaError>> {
        let program = self.program();

        debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "parsing finished"
        );

        match program {
            Ok(program) if self.diagnostics.is_empty() => Ok(program),
            _ => Err(std::mem::take(&mut self.diagnostics)),
        }
    }

    /// program → "SUGOD" declaration* "KATAPUSAN" EOF
    fn program(&mut self) -> ParseResult<Stmt> {
        self.consume(TokenKind::Start, "Expect 'SUGOD' at the start of the program.")?;

        let mut statements = Vec::new();
        while !self.check(TokenKind::End) && !self.is_at_end() {
            if let Some(stmt) = self.declaration() {
                statements.push(stmt);
            }
        }

        self.consume(TokenKind::End, "Expect 'KATAPUSAN' at the end of the program.")?;

        if !self.is_at_end() {
            return Err(self.error(
                self.peek().clone(),
                "Expect end of file after 'KATAPUSAN'.",
            ));
        }

        Ok(Stmt::Program(statements))
    }

    /// Skips tokens until a likely statement boundary.
    ///
    /// The offending token is always dropped first, unless it is the
    /// program terminator, which the enclosing loops must still see.
    pub(crate) fn synchronize(&mut self) {
        if !self.check(TokenKind::End) {
            self.advance();
        }

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Dollar {
                return;
            }

            match self.peek().kind {
                TokenKind::Declare
                | TokenKind::Start
                | TokenKind::End
                | TokenKind::Print
                | TokenKind::Input
                | TokenKind::Block
                | TokenKind::If
                | TokenKind::ElseIf
                | TokenKind::Else
                | TokenKind::For => return,
                _ => {}
            }

            self.advance();
        }
    }
}
