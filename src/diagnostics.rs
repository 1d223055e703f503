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

use std::fmt::Write;

use crate::error::BisayaError;
use crate::span::Span;

/// Renders compiler-style diagnostics for Bisaya++ errors.
///
/// The printer shows:
/// - the error code, message and `file:line:column`
/// - the offending source line
/// - a caret (`^`) under the reported column
/// - the optional help text
///
/// Output stays readable without color.
pub struct DiagnosticPrinter {
    /// Full source text of the file being run.
    source: String,

    /// Display name of the source file (e.g. `hello.bpp`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Formats one diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E_TYPE]: Variable 'x' must be of type NUMERO.
    ///   --> hello.bpp:2:15
    ///    |
    ///  2 | MUGNA NUMERO x = 'a'
    ///    |              ^
    /// help: the initializer produced a Char value
    /// ```
    pub fn render(&self, error: &BisayaError) -> String {
        let Span { line, column } = error.span;

        // Lines are 1-indexed; line 0 means "unknown".
        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        let mut out = String::new();

        let _ = writeln!(
            out,
            "error[{}]{}: {}\n  --> {}:{}:{}",
            error.code,
            error.location,
            error.message,
            self.file_name,
            line,
            column + 1
        );
        let _ = writeln!(out, "   |");
        let _ = writeln!(out, "{:>3} | {}", line, src_line);
        let _ = writeln!(out, "   | {}^", " ".repeat(column));

        if let Some(help) = &error.help {
            let _ = writeln!(out, "help: {}", help);
        }

        out
    }

    /// Prints a formatted diagnostic to stderr.
    pub fn print(&self, error: &BisayaError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_sits_under_the_reported_column() {
        let printer = DiagnosticPrinter::new("t.bpp", "SUGOD\nMUGNA NUMERO x = 'a'\nKATAPUSAN");
        let error = BisayaError::type_error("Variable 'x' must be of type NUMERO.", Span::new(2, 13))
            .with_help("the initializer produced a Char value");

        let text = printer.render(&error);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "error[E_TYPE]: Variable 'x' must be of type NUMERO.");
        assert_eq!(lines[1], "  --> t.bpp:2:14");
        assert_eq!(lines[3], "  2 | MUGNA NUMERO x = 'a'");
        assert_eq!(lines[4], format!("   | {}^", " ".repeat(13)));
        assert_eq!(lines[5], "help: the initializer produced a Char value");
    }

    #[test]
    fn syntax_location_follows_the_message() {
        let printer = DiagnosticPrinter::new("t.bpp", "SUGOD");
        let error = BisayaError::syntax_error("Expect 'KATAPUSAN'.", Span::line(1), " at end");

        assert!(printer.render(&error).starts_with("error[E_SYNTAX] at end: Expect 'KATAPUSAN'."));
    }
}
