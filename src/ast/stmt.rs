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

use serde::Serialize;

use crate::ast::Expr;
use crate::lexer::token::Token;
use crate::value::DeclaredType;

/// One `type name [= initializer]` entry of a `MUGNA` declaration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Var {
    pub name: Token,
    pub initializer: Option<Expr>,
    pub declared_type: DeclaredType,
}

/// All executable Bisaya++ statements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    /* ----------------------------- */
    /* EXPRESSIONS                   */
    /* ----------------------------- */

    Expression(Expr),

    /// `IPAKITA: value`. The keyword token locates console failures.
    Print {
        keyword: Token,
        value: Expr,
    },

    /* ----------------------------- */
    /* VARIABLES                     */
    /* ----------------------------- */

    Var(Var),

    /// `MUGNA NUMERO a, b = 2` – every entry shares one type.
    VarDeclarationList(Vec<Var>),

    /// `DAWAT: a, b`
    Input(Vec<Token>),

    /* ----------------------------- */
    /* CONTROL FLOW                  */
    /* ----------------------------- */

    Block(Vec<Stmt>),

    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },

    /// The only loop; `ALANG SA` is lowered to this by the parser.
    While {
        condition: Expr,
        body: Box<Stmt>,
    },

    /* ----------------------------- */
    /* PROGRAM                       */
    /* ----------------------------- */

    /// The whole `SUGOD … KATAPUSAN` unit.
    Program(Vec<Stmt>),
}
