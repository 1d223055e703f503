/*
 * =============================================================================
 *  BISAYA++ - Sugod na!
 * =============================================================================
 *
 *  File:     display.rs
 *  Purpose:  Runtime Value Display.
 *            Converts runtime `Value` objects into the text used by
 *            IPAKITA, `&` concatenation and `$` newline joins.
 *
 * -----------------------------------------------------------------------------
 *  License:
 * -----------------------------------------------------------------------------
 *  This file is part of the Bisaya++ programming language project.
 *
 *  Bisaya++ is dual-licensed under the terms of:
 *    - The MIT License
 *    - The Apache License, Version 2.0
 *
 *  You may choose either license to govern your use of this software.
 *
 * -----------------------------------------------------------------------------
 *  Warranty Disclaimer:
 * -----------------------------------------------------------------------------
 *  Unless required by applicable law or agreed to in writing, this software is
 *  distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 *  either express or implied.
 *
 * =============================================================================
 */

use crate::value::Value;

/// ============================================================================
/// value_to_string
/// ============================================================================
/// Converts a runtime `Value` into its canonical text.
///
/// Examples:
///   - Number(10.0)     → "10"
///   - Number(2.5)      → "2.5"
///   - Bool(true)       → "OO"
///   - Bool(false)      → "DILI"
///   - Char('a')        → "a"
///   - Null             → "null"
/// ============================================================================
pub fn value_to_string(val: &Value) -> String {
    match val {
        Value::Number(n) => {
            let text = n.to_string();
            match text.strip_suffix(".0") {
                Some(whole) => whole.to_string(),
                None => text,
            }
        }
        Value::Bool(true) => "OO".to_string(),
        Value::Bool(false) => "DILI".to_string(),
        Value::Char(c) => c.to_string(),
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
    }
}
