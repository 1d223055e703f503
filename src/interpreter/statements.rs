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

/*!
 * Bisaya++ Statement Executor
 * ---------------------------
 *
 * Executes all program-level and block-level statements. Expression
 * evaluation lives in `expressions.rs`.
 *
 * This file handles:
 *
 *  • Variable declarations and their type checks
 *  • IPAKITA / DAWAT
 *  • Control flow (KUNG, the lowered ALANG SA loop)
 *  • Block scoping
 */

use std::io;

use tracing::trace;

use crate::ast::{Stmt, Var};
use crate::error::BisayaError;
use crate::interpreter::display::value_to_string;
use crate::interpreter::environment::ScopeId;
use crate::interpreter::helpers::{coerce_input, is_truthy};
use crate::interpreter::Interpreter;
use crate::span::Span;

impl Interpreter<'_> {
    /// Executes a single Bisaya++ statement inside `scope`.
    ///
    /// This is the **core dispatch function for all statement execution**.
    /// The first runtime error aborts execution and is handed back as-is.
    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt, scope: ScopeId) -> Result<(), BisayaError> {
        match stmt {
            /* ------------------------------------------------------------------
             * Program
             * ---------------------------------------------------------------- */
            Stmt::Program(statements) => statements
                .iter()
                .try_for_each(|stmt| self.exec_stmt(stmt, scope)),

            Stmt::Expression(expr) => {
                self.eval_expr(expr, scope)?;
                Ok(())
            }

            /* ------------------------------------------------------------------
             * Variable Declarations
             * ---------------------------------------------------------------- */
            Stmt::Var(var) => self.declare(var, scope),

            Stmt::VarDeclarationList(vars) => {
                vars.iter().try_for_each(|var| self.declare(var, scope))
            }

            /* ------------------------------------------------------------------
             * Console I/O
             * ---------------------------------------------------------------- */
            Stmt::Print { keyword, value } => {
                let value = self.eval_expr(value, scope)?;
                let text = value_to_string(&value);

                self.console
                    .write_line(&text)
                    .map_err(|e| console_error(e, keyword.span))
            }

            Stmt::Input(names) => {
                for name in names {
                    let prompt = format!("Enter value for {}: ", name.lexeme);

                    let line = self
                        .console
                        .read_line(&prompt)
                        .map_err(|e| console_error(e, name.span))?
                        .ok_or_else(|| {
                            BisayaError::input_error(
                                format!("No input left for '{}'.", name.lexeme),
                                name.span,
                            )
                        })?;

                    let declared_type = self.environment.get_type(scope, name)?;
                    let value = coerce_input(&line, declared_type, name)?;

                    trace!(name = %name.lexeme, value = ?value, "input captured");
                    self.environment.assign(scope, name, value)?;
                }

                Ok(())
            }

            /* ------------------------------------------------------------------
             * Control Flow
             * ---------------------------------------------------------------- */
            Stmt::Block(statements) => self.exec_block(statements, scope),

            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = self.eval_expr(condition, scope)?;

                if is_truthy(&condition) {
                    self.exec_scoped(then_branch, scope)
                } else if let Some(else_branch) = else_branch {
                    self.exec_scoped(else_branch, scope)
                } else {
                    Ok(())
                }
            }

            Stmt::While { condition, body } => {
                loop {
                    let value = self.eval_expr(condition, scope)?;
                    if !is_truthy(&value) {
                        break;
                    }
                    self.exec_scoped(body, scope)?;
                }

                Ok(())
            }
        }
    }

    /// Runs `statements` in a fresh child of `parent`.
    ///
    /// The child scope is dropped before returning, whether the block
    /// finished or failed.
    pub(crate) fn exec_block(&mut self, statements: &[Stmt], parent: ScopeId) -> Result<(), BisayaError> {
        let scope = self.environment.push_scope(parent);

        let result = statements
            .iter()
            .try_for_each(|stmt| self.exec_stmt(stmt, scope));

        self.environment.pop_scope(scope);
        result
    }

    /// Branch and loop bodies always get their own scope, braced or not.
    fn exec_scoped(&mut self, stmt: &Stmt, parent: ScopeId) -> Result<(), BisayaError> {
        match stmt {
            Stmt::Block(statements) => self.exec_block(statements, parent),
            other => self.exec_block(std::slice::from_ref(other), parent),
        }
    }

    fn declare(&mut self, var: &Var, scope: ScopeId) -> Result<(), BisayaError> {
        let value = match &var.initializer {
            Some(initializer) => {
                let value = self.eval_expr(initializer, scope)?;

                if !var.declared_type.accepts(&value) {
                    return Err(BisayaError::type_error(
                        format!(
                            "Variable '{}' must be of type {}.",
                            var.name.lexeme, var.declared_type
                        ),
                        var.name.span,
                    )
                    .with_help(format!("the initializer produced a {} value", value.type_name())));
                }

                value
            }
            None => var.declared_type.zero_value(),
        };

        trace!(name = %var.name.lexeme, declared_type = %var.declared_type, "variable declared");
        self.environment
            .define(scope, &var.name.lexeme, value, var.declared_type);

        Ok(())
    }
}

fn console_error(error: io::Error, span: Span) -> BisayaError {
    BisayaError::runtime_error(format!("Console failure: {}", error), span)
}
