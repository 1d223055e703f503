/*
 * ============================================================================
 * BISAYA++ - Sugod na!
 * ============================================================================
 *
 * License:
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
 * ============================================================================
 */

use crate::ast::Expr;
use crate::error::BisayaError;
use crate::interpreter::display::value_to_string;
use crate::interpreter::environment::ScopeId;
use crate::interpreter::helpers::{check_number_operand, check_number_operands, is_truthy};
use crate::interpreter::Interpreter;
use crate::lexer::token::{Token, TokenKind};
use crate::value::Value;

impl Interpreter<'_> {
    /// Evaluates a single Bisaya++ expression and returns its runtime value.
    ///
    /// This is the **core expression dispatcher** used throughout the
    /// interpreter. Every expression eventually passes through here.
    ///
    /// # Arguments
    /// - `expr`  → The AST expression to evaluate
    /// - `scope` → The innermost scope visible to the expression
    pub(crate) fn eval_expr(&mut self, expr: &Expr, scope: ScopeId) -> Result<Value, BisayaError> {
        match expr {
            // -----------------------------------------------------------------
            // Literal Values
            // -----------------------------------------------------------------
            Expr::Literal(value) => Ok(value.clone()),

            Expr::Grouping(inner) => self.eval_expr(inner, scope),

            // -----------------------------------------------------------------
            // Identifier Lookup
            // -----------------------------------------------------------------
            Expr::Variable(name) => self.environment.get(scope, name),

            Expr::Unary { operator, right } => {
                let right = self.eval_expr(right, scope)?;
                self.eval_unary(operator, right)
            }

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expr(left, scope)?;
                let right = self.eval_expr(right, scope)?;
                eval_binary(operator, left, right)
            }

            // -----------------------------------------------------------------
            // Short-circuit Logic (UG / O)
            // -----------------------------------------------------------------
            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.eval_expr(left, scope)?;

                let settled = match operator.kind {
                    TokenKind::Or => is_truthy(&left),
                    _ => !is_truthy(&left),
                };

                if settled {
                    Ok(left)
                } else {
                    self.eval_expr(right, scope)
                }
            }

            // -----------------------------------------------------------------
            // Assignment
            // -----------------------------------------------------------------
            Expr::Assign { name, value } => {
                let value = self.eval_expr(value, scope)?;
                let declared_type = self.environment.binding(scope, name)?.declared_type;

                if !declared_type.accepts(&value) {
                    return Err(BisayaError::type_error(
                        format!("Expected {} for assignment.", declared_type),
                        name.span,
                    )
                    .with_help(format!(
                        "'{}' holds {} values, got {}",
                        name.lexeme,
                        declared_type,
                        value.type_name()
                    )));
                }

                self.environment.assign(scope, name, value.clone())?;
                Ok(value)
            }

            Expr::Increment { name } => self.step(name, 1.0, scope),
            Expr::Decrement { name } => self.step(name, -1.0, scope),
        }
    }

    fn eval_unary(&mut self, operator: &Token, right: Value) -> Result<Value, BisayaError> {
        match operator.kind {
            TokenKind::Minus => {
                let n = check_number_operand(operator, &right)?;
                Ok(Value::Number(-n))
            }

            // DILI( ... )
            _ => Ok(Value::Bool(!is_truthy(&right))),
        }
    }

    /// Adds `delta` to a numeric variable in place and returns the new value.
    fn step(&mut self, name: &Token, delta: f64, scope: ScopeId) -> Result<Value, BisayaError> {
        let current = self.environment.get(scope, name)?;

        let Value::Number(n) = current else {
            return Err(BisayaError::type_error(
                "Only numbers can be incremented or decremented.",
                name.span,
            ));
        };

        let updated = Value::Number(n + delta);
        self.environment.assign(scope, name, updated.clone())?;
        Ok(updated)
    }
}

/// Applies a binary operator to two already evaluated operands.
fn eval_binary(operator: &Token, left: Value, right: Value) -> Result<Value, BisayaError> {
    match operator.kind {
        // ---------------------------------------------------------------------
        // Arithmetic
        // ---------------------------------------------------------------------
        TokenKind::Plus => match (&left, &right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            _ => Ok(Value::String(format!(
                "{}{}",
                value_to_string(&left),
                value_to_string(&right)
            ))),
        },

        TokenKind::Minus => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Number(a - b))
        }

        TokenKind::Star => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Number(a * b))
        }

        TokenKind::Slash => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Number(a / b))
        }

        TokenKind::Percent => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Number(a % b))
        }

        // ---------------------------------------------------------------------
        // Comparison
        // ---------------------------------------------------------------------
        TokenKind::Greater => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a > b))
        }

        TokenKind::GreaterEqual => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a >= b))
        }

        TokenKind::Less => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a < b))
        }

        TokenKind::LessEqual => {
            let (a, b) = check_number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a <= b))
        }

        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::NotEqual => Ok(Value::Bool(left != right)),

        // ---------------------------------------------------------------------
        // Text joins
        // ---------------------------------------------------------------------
        TokenKind::Ampersand => Ok(Value::String(format!(
            "{}{}",
            value_to_string(&left),
            value_to_string(&right)
        ))),

        TokenKind::Dollar => Ok(Value::String(format!(
            "{}\n{}",
            value_to_string(&left),
            value_to_string(&right)
        ))),

        _ => Err(BisayaError::runtime_error(
            format!("Unknown binary operator '{}'.", operator.lexeme),
            operator.span,
        )),
    }
}
