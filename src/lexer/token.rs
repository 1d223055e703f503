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

use std::fmt;

use serde::Serialize;

use crate::span::Span;
use crate::value::Value;

/// Represents the **category of a lexical token** in Bisaya++.
///
/// `TokenKind` identifies how a sequence of characters from the source
/// code should be interpreted by the parser.
///
/// # Compiler Pipeline Role
/// ```text
/// Source Code → Lexer → TokenKind → Parser → AST
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Colon,
    /// `&` – string concatenation
    Ampersand,
    /// `$` – newline join
    Dollar,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    EqualEqual,
    /// `<>`
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,

    // Structural keywords
    /// `SUGOD`
    Start,
    /// `KATAPUSAN`
    End,
    /// `MUGNA`
    Declare,
    /// `PUNDOK`
    Block,
    /// `KUNG`
    If,
    /// `KUNG DILI`
    ElseIf,
    /// `KUNG WALA`
    Else,
    /// `ALANG SA`
    For,
    /// `UG`
    And,
    /// `O`
    Or,
    /// `IPAKITA`
    Print,
    /// `DAWAT`
    Input,

    // Literals
    Number,
    String,
    Character,
    /// `[c]` – a bracketed escape code producing one character
    EscapeCode,
    /// `OO`
    True,
    /// `DILI`
    False,

    // Type names
    Numero,
    Tipik,
    Letra,
    Tinuod,

    Identifier,

    /// End-of-file marker.
    ///
    /// Always the **final token**; the parser uses it to determine when
    /// input has been fully consumed.
    Eof,
}

/// Represents a **single lexical token** produced by the Bisaya++ lexer.
///
/// # Example Tokens
/// ```text
/// MUGNA  →  { kind: Declare,    lexeme: "MUGNA", literal: None }
/// x      →  { kind: Identifier, lexeme: "x",     literal: None }
/// 42     →  { kind: Number,     lexeme: "42",    literal: Some(Number(42.0)) }
/// ```
///
/// Tokens are immutable once produced; the parser only reads them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    /// The classified category of the token.
    pub kind: TokenKind,

    /// The exact source text that produced this token, quotes included.
    pub lexeme: String,

    /// Decoded value for literal tokens.
    pub literal: Option<Value>,

    /// Where the token starts.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, literal: Option<Value>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            span,
        }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }
}

impl fmt::Display for Token {
    /// Formats a token for **user-facing output**: only its lexeme.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
