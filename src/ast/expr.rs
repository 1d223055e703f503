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

use crate::lexer::token::Token;
use crate::value::Value;

/// Every Bisaya++ expression. Each one evaluates to exactly one `Value`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Literal(Value),
    Variable(Token),
    Grouping(Box<Expr>),
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// Short-circuiting `UG` / `O`.
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Assign {
        name: Token,
        value: Box<Expr>,
    },
    Increment {
        name: Token,
    },
    Decrement {
        name: Token,
    },
}
