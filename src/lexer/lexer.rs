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

use tracing::debug;

use crate::error::BisayaError;
use crate::lexer::keywords::{keyword, starts_multi_word};
use crate::lexer::token::{Token, TokenKind};
use crate::span::Span;
use crate::value::Value;

/// Scans `source` into a token stream terminated by `Eof`.
///
/// Scanning never stops at the first problem: every lexical error is
/// collected and all of them are returned together.
pub fn tokenize(source: &str) -> Result<Vec<Token>, Vec<BisayaError>> {
    let mut lexer = Lexer::new(source);
    lexer.scan_tokens();

    debug!(
        tokens = lexer.tokens.len(),
        errors = lexer.errors.len(),
        "lexing finished"
    );

    if lexer.errors.is_empty() {
        Ok(lexer.tokens)
    } else {
        Err(lexer.errors)
    }
}

struct Lexer {
    chars: Vec<char>,
    start: usize,
    current: usize,
    line: usize,
    line_start: usize,
    token_line: usize,
    token_column: usize,
    tokens: Vec<Token>,
    errors: Vec<BisayaError>,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            line_start: 0,
            token_line: 1,
            token_column: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn scan_tokens(&mut self) {
        while !self.is_at_end() {
            self.start = self.current;
            self.token_line = self.line;
            self.token_column = self.current - self.line_start;
            self.scan_token();
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            None,
            Span::new(self.line, self.current - self.line_start),
        ));
    }

    fn scan_token(&mut self) {
        let ch = self.advance();

        match ch {
            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => self.newline(),

            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            ':' => self.add_token(TokenKind::Colon),
            '&' => self.add_token(TokenKind::Ampersand),
            '$' => self.add_token(TokenKind::Dollar),
            '+' => self.add_token(TokenKind::Plus),
            '*' => self.add_token(TokenKind::Star),
            '/' => self.add_token(TokenKind::Slash),
            '%' => self.add_token(TokenKind::Percent),

            // Line comment --
            '-' => {
                if self.match_char('-') {
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Minus);
                }
            }

            // Multi-char operators: =, <, >
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Assign
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else if self.match_char('>') {
                    TokenKind::NotEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            '"' => self.string(),
            '\'' => self.character(),
            '[' => self.escape_code(),

            '0'..='9' => self.number(),

            'a'..='z' | 'A'..='Z' | '_' => self.identifier(),

            other => self.error(format!("Unexpected character '{}'.", other)),
        }
    }

    fn string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.advance() == '\n' {
                self.newline();
            }
        }

        if self.is_at_end() {
            self.error("Unterminated string.");
            return;
        }

        self.advance(); // closing quote

        let value: String = self.chars[self.start + 1..self.current - 1].iter().collect();

        // "OO" and "DILI" in quotes are the boolean literals
        match value.as_str() {
            "OO" => self.add_literal(TokenKind::True, Value::Bool(true)),
            "DILI" => self.add_literal(TokenKind::False, Value::Bool(false)),
            _ => self.add_literal(TokenKind::String, Value::String(value)),
        }
    }

    fn character(&mut self) {
        if self.is_at_end() || self.peek() == '\n' {
            self.error("Unterminated character literal.");
            return;
        }

        let mut ch = self.advance();

        if ch == '\'' {
            self.error("Empty character literal.");
            return;
        }

        if ch == '\\' && !self.is_at_end() {
            ch = match self.advance() {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                '0' => '\0',
                other => other,
            };
        }

        if !self.match_char('\'') {
            self.skip_to_closing_quote();
            self.error("Unterminated or invalid character literal.");
            return;
        }

        self.add_literal(TokenKind::Character, Value::Char(ch));
    }

    /// Skips the remains of a malformed character literal so one mistake
    /// reports one error.
    fn skip_to_closing_quote(&mut self) {
        let mut probe = self.current;
        while probe < self.chars.len() && self.chars[probe] != '\n' {
            if self.chars[probe] == '\'' {
                self.current = probe + 1;
                return;
            }
            probe += 1;
        }
    }

    fn escape_code(&mut self) {
        if self.is_at_end() || self.peek() == '\n' {
            self.error("Unterminated escape code.");
            return;
        }

        let ch = self.advance();

        if !self.match_char(']') {
            self.error("Escape code must be a single character in square brackets.");
            return;
        }

        self.add_literal(TokenKind::EscapeCode, Value::Char(ch));
    }

    fn number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let text = self.lexeme();
        match text.parse::<f64>() {
            Ok(n) => self.add_literal(TokenKind::Number, Value::Number(n)),
            Err(_) => self.error(format!("Invalid number '{}'.", text)),
        }
    }

    fn identifier(&mut self) {
        while Self::is_word_char(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();

        if starts_multi_word(&text) {
            if let Some(kind) = self.multi_word_keyword(&text) {
                self.add_token(kind);
                return;
            }
        }

        let kind = keyword(&text).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    /// Tries to extend `first` with the next word on the same line into a
    /// multi-word keyword such as `KUNG WALA`. Consumes the second word on
    /// success and leaves the cursor untouched otherwise.
    fn multi_word_keyword(&mut self, first: &str) -> Option<TokenKind> {
        let mut probe = self.current;
        while probe < self.chars.len() && matches!(self.chars[probe], ' ' | '\t') {
            probe += 1;
        }

        if probe == self.current {
            return None;
        }

        let word_start = probe;
        while probe < self.chars.len() && Self::is_word_char(self.chars[probe]) {
            probe += 1;
        }

        if word_start == probe {
            return None;
        }

        let second: String = self.chars[word_start..probe].iter().collect();
        let kind = keyword(&format!("{} {}", first, second))?;

        self.current = probe;
        Some(kind)
    }

    fn is_word_char(ch: char) -> bool {
        ch.is_ascii_alphanumeric() || ch == '_'
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.current].iter().collect()
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme();
        let span = Span::new(self.token_line, self.token_column);
        self.tokens.push(Token::new(kind, lexeme, None, span));
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Value) {
        let lexeme = self.lexeme();
        let span = Span::new(self.token_line, self.token_column);
        self.tokens.push(Token::new(kind, lexeme, Some(literal), span));
    }

    fn error(&mut self, message: impl Into<String>) {
        let error =
            BisayaError::lexical_error(message, Span::new(self.token_line, self.token_column));
        debug!(line = error.line(), reason = %error.message, "lexical error");
        self.errors.push(error);
    }

    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.current;
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.chars[self.current] != expected {
            return false;
        }
        self.current += 1;
        true
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.current];
        self.current += 1;
        ch
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.chars[self.current]
        }
    }

    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() {
            '\0'
        } else {
            self.chars[self.current + 1]
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }
}
