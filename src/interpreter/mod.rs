/*
 * ==========================================================================
 * BISAYA++ - Sugod na!
 * ==========================================================================
 *
 * File:     mod.rs
 * Purpose:  Tree-walking interpreter entry point
 *
 * --------------------------------------------------------------------------
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
 * ==========================================================================
 */

pub mod console;
pub mod display;
pub mod environment;
pub mod expressions;
pub mod helpers;
pub mod statements;

use tracing::debug;

use crate::ast::Stmt;
use crate::error::BisayaError;
use crate::interpreter::environment::Environment;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use display::value_to_string;

/// Walks a parsed program and executes it.
///
/// The interpreter owns the variable environment and borrows the console
/// it prints to and reads from for its whole lifetime.
pub struct Interpreter<'a> {
    pub(crate) environment: Environment,
    pub(crate) console: &'a mut dyn Console,
}

impl<'a> Interpreter<'a> {
    pub fn new(console: &'a mut dyn Console) -> Self {
        Self {
            environment: Environment::new(),
            console,
        }
    }

    /// Executes a full Bisaya++ program in the global scope.
    ///
    /// Stops at the first runtime error and returns it.
    pub fn interpret(&mut self, program: &Stmt) -> Result<(), BisayaError> {
        let global = self.environment.global();
        let result = self.exec_stmt(program, global);

        match &result {
            Ok(()) => debug!("program finished"),
            Err(error) => debug!(code = error.code, line = error.line(), "program aborted"),
        }

        result
    }

    /// Variables still visible at the top level after `interpret`.
    pub fn environment(&self) -> &Environment {
        &self.environment
    }
}
