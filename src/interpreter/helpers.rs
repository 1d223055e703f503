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

use crate::error::BisayaError;
use crate::lexer::token::Token;
use crate::value::{DeclaredType, Value};

/// Determines whether a runtime `Value` is considered **truthy**.
///
/// # Truthiness Rules
/// - `Value::Null` is false
/// - `Value::Bool(b)` is `b`
/// - everything else is true, numeric zero and empty strings included
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        _ => true,
    }
}

pub fn check_number_operand(operator: &Token, operand: &Value) -> Result<f64, BisayaError> {
    operand.as_number().ok_or_else(|| {
        BisayaError::type_error("Operand must be a number.", operator.span)
            .with_help(format!("got a {} value", operand.type_name()))
    })
}

pub fn check_number_operands(
    operator: &Token,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), BisayaError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(BisayaError::type_error(
            format!("Operands of '{}' must be numbers.", operator.lexeme),
            operator.span,
        )
        .with_help(format!(
            "got {} and {}",
            left.type_name(),
            right.type_name()
        ))),
    }
}

/// Turns one captured `DAWAT` line into a value of `declared_type`.
///
/// The line terminator and any double quotes are stripped first.
pub fn coerce_input(
    raw: &str,
    declared_type: DeclaredType,
    name: &Token,
) -> Result<Value, BisayaError> {
    let text = raw.trim_end_matches(['\n', '\r']).replace('"', "");

    match declared_type {
        DeclaredType::Numero | DeclaredType::Tipik => {
            let trimmed = text.trim();

            // finite values only
            let number = trimmed.parse::<f64>().ok().filter(|n| n.is_finite());

            number.map(Value::Number).ok_or_else(|| {
                BisayaError::input_error(
                    format!(
                        "Invalid input for {} '{}': '{}'.",
                        declared_type, name.lexeme, trimmed
                    ),
                    name.span,
                )
            })
        }

        DeclaredType::Tinuod => match text.trim() {
            "OO" => Ok(Value::Bool(true)),
            "DILI" => Ok(Value::Bool(false)),
            other => Err(BisayaError::input_error(
                format!(
                    "Invalid input for TINUOD '{}': '{}'.",
                    name.lexeme, other
                ),
                name.span,
            )
            .with_help("type OO or DILI")),
        },

        DeclaredType::Letra => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(Value::Char(c)),
                _ => Err(BisayaError::input_error(
                    format!("Expected a single character for '{}'.", name.lexeme),
                    name.span,
                )),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::token::TokenKind;
    use crate::span::Span;

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name, None, Span::line(4))
    }

    #[test]
    fn zero_and_empty_string_are_truthy() {
        assert!(is_truthy(&Value::Number(0.0)));
        assert!(is_truthy(&Value::String(String::new())));
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&Value::Bool(false)));
    }

    #[test]
    fn numeric_input_accepts_signed_decimals() {
        let n = ident("n");
        assert_eq!(
            coerce_input("-12.5\n", DeclaredType::Tipik, &n),
            Ok(Value::Number(-12.5))
        );
        assert_eq!(
            coerce_input("\"7\"\r\n", DeclaredType::Numero, &n),
            Ok(Value::Number(7.0))
        );
    }

    #[test]
    fn numeric_input_accepts_any_float_spelling() {
        let n = ident("n");
        let cases = [(".5", 0.5), ("3.", 3.0), ("1e2", 100.0), ("2.5E1", 25.0), ("+4", 4.0)];

        for (text, expected) in cases {
            assert_eq!(
                coerce_input(text, DeclaredType::Tipik, &n),
                Ok(Value::Number(expected)),
                "{text:?} should be accepted"
            );
        }
    }

    #[test]
    fn numeric_input_rejects_non_numbers() {
        let n = ident("n");
        for text in ["abc", "inf", "NaN", "", "1.2.3", "12abc"] {
            let error = coerce_input(text, DeclaredType::Numero, &n).unwrap_err();
            assert_eq!(error.code, "E_INPUT", "{text:?} should be rejected");
            assert_eq!(error.line(), 4);
        }
    }

    #[test]
    fn boolean_input_accepts_only_canonical_spellings() {
        let b = ident("b");
        assert_eq!(coerce_input("OO\n", DeclaredType::Tinuod, &b), Ok(Value::Bool(true)));
        assert_eq!(coerce_input("DILI", DeclaredType::Tinuod, &b), Ok(Value::Bool(false)));
        assert!(coerce_input("oo", DeclaredType::Tinuod, &b).is_err());
        assert!(coerce_input("true", DeclaredType::Tinuod, &b).is_err());
    }

    #[test]
    fn char_input_requires_exactly_one_character() {
        let c = ident("c");
        assert_eq!(coerce_input("x\n", DeclaredType::Letra, &c), Ok(Value::Char('x')));
        assert_eq!(coerce_input(" ", DeclaredType::Letra, &c), Ok(Value::Char(' ')));
        assert!(coerce_input("xy", DeclaredType::Letra, &c).is_err());
        assert!(coerce_input("\n", DeclaredType::Letra, &c).is_err());
    }
}
