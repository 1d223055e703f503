/*
 * ==========================================================================
 * BISAYA++ - Sugod na!
 * ==========================================================================
 *
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

//! Bisaya++: a small, statically tagged teaching language with Cebuano
//! keywords.
//!
//! Source text goes through three stages:
//!
//! 1. [`lexer::tokenize`] turns text into tokens
//! 2. [`parser::parse`] builds a single `Program` statement
//! 3. [`interpreter::Interpreter`] walks that tree
//!
//! [`run`] chains all three against a [`Console`].

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod value;

use thiserror::Error;

pub use ast::{Expr, Stmt};
pub use error::BisayaError;
pub use interpreter::{Console, Interpreter, ScriptedConsole, StdConsole};
pub use lexer::{tokenize, Token, TokenKind};
pub use value::{DeclaredType, Value};

/// Why a run did not complete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RunError {
    /// Lexical or syntax diagnostics. Nothing was executed.
    #[error("{} error(s) found before execution", .0.len())]
    Diagnostics(Vec<BisayaError>),

    /// The first runtime error; execution stopped there.
    #[error(transparent)]
    Runtime(BisayaError),
}

impl RunError {
    /// Every diagnostic carried by this error, in report order.
    pub fn errors(&self) -> &[BisayaError] {
        match self {
            RunError::Diagnostics(errors) => errors.as_slice(),
            RunError::Runtime(error) => std::slice::from_ref(error),
        }
    }
}

/// Lexes and parses `source` into a `Program` without running it.
///
/// Lexical errors are all reported before parsing is attempted.
pub fn parse_source(source: &str) -> Result<Stmt, RunError> {
    let tokens = tokenize(source).map_err(RunError::Diagnostics)?;
    parser::parse(tokens).map_err(RunError::Diagnostics)
}

/// Lexes, parses and executes `source`, printing to and reading from
/// `console`.
pub fn run(source: &str, console: &mut dyn Console) -> Result<(), RunError> {
    let program = parse_source(source)?;

    Interpreter::new(console)
        .interpret(&program)
        .map_err(RunError::Runtime)
}
