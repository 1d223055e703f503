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

use thiserror::Error;

use crate::span::Span;

/// A single Bisaya++ diagnostic.
///
/// The same record is used for every stage of the pipeline: the lexer and
/// parser collect many of them, the interpreter stops at the first one.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("[line {}] Error{location}: {message}", .span.line)]
pub struct BisayaError {
    /// Stable error code (E_LEX, E_SYNTAX, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Where on the line the problem sits, e.g. ` at 'x'` or ` at end`.
    /// Empty for lexical and runtime errors.
    pub location: String,

    /// Optional note / help text
    pub help: Option<String>,
}

impl BisayaError {
    /// Generic constructor
    pub fn new(code: &'static str, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            location: String::new(),
            help: None,
        }
    }

    /// Lexical error (bad character, unterminated literal)
    pub fn lexical_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_LEX", message, span)
    }

    /// Syntax error raised by the parser
    pub fn syntax_error(
        message: impl Into<String>,
        span: Span,
        location: impl Into<String>,
    ) -> Self {
        let mut error = Self::new("E_SYNTAX", message, span);
        error.location = location.into();
        error
    }

    /// Runtime error (during evaluation)
    pub fn runtime_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_RUNTIME", message, span)
    }

    /// Type error (declared type mismatch, non-numeric operand)
    pub fn type_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_TYPE", message, span)
    }

    /// Reference error (undefined variable or type)
    pub fn reference_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_REFERENCE", message, span)
    }

    /// Input coercion error for `DAWAT`
    pub fn input_error(message: impl Into<String>, span: Span) -> Self {
        Self::new("E_INPUT", message, span)
    }

    /// Attach a help message to the error (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn line(&self) -> usize {
        self.span.line
    }
}
