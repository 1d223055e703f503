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

use crate::lexer::token::TokenKind;

/// Bisaya++ runtime value representation.
///
/// This is the core type that flows through the interpreter.
/// Every expression ultimately evaluates to one of these. Numbers are a
/// single `f64` regardless of the declared `NUMERO`/`TIPIK` tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Char(char),
    String(String),
    Null,
}

impl Value {
    /// Returns a stable type name string (useful for errors).
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Bool(_) => "Bool",
            Value::Char(_) => "Char",
            Value::String(_) => "String",
            Value::Null => "Null",
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// The four type tags a `MUGNA` declaration can carry.
///
/// The tag is fixed when the variable is declared and every later
/// assignment is checked against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DeclaredType {
    /// `NUMERO` – whole-valued number
    Numero,
    /// `TIPIK` – fractional number
    Tipik,
    /// `LETRA` – single character
    Letra,
    /// `TINUOD` – boolean
    Tinuod,
}

impl DeclaredType {
    /// Maps a type-name token kind onto its tag.
    pub fn from_token_kind(kind: &TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Numero => Some(DeclaredType::Numero),
            TokenKind::Tipik => Some(DeclaredType::Tipik),
            TokenKind::Letra => Some(DeclaredType::Letra),
            TokenKind::Tinuod => Some(DeclaredType::Tinuod),
            _ => None,
        }
    }

    /// Source spelling of the tag.
    pub fn name(&self) -> &'static str {
        match self {
            DeclaredType::Numero => "NUMERO",
            DeclaredType::Tipik => "TIPIK",
            DeclaredType::Letra => "LETRA",
            DeclaredType::Tinuod => "TINUOD",
        }
    }

    /// Value given to a declaration without an initializer.
    pub fn zero_value(&self) -> Value {
        match self {
            DeclaredType::Numero | DeclaredType::Tipik => Value::Number(0.0),
            DeclaredType::Letra => Value::Char('\0'),
            DeclaredType::Tinuod => Value::Bool(false),
        }
    }

    /// Whether `value` may be stored in a variable of this type.
    pub fn accepts(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (DeclaredType::Numero | DeclaredType::Tipik, Value::Number(_))
                | (DeclaredType::Letra, Value::Char(_))
                | (DeclaredType::Tinuod, Value::Bool(_))
        )
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
