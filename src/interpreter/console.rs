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

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

/// The interpreter's only window to the outside world.
///
/// `IPAKITA` writes one line per statement, `DAWAT` reads one line per
/// target variable after showing `prompt`.
pub trait Console {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    /// Returns `Ok(None)` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Console backed by the process's stdin and stdout.
#[derive(Debug, Clone, Copy)]
pub struct StdConsole {
    prompt: bool,
}

impl StdConsole {
    pub fn new(prompt: bool) -> Self {
        Self { prompt }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", line)?;
        out.flush()
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        if self.prompt {
            let mut out = io::stdout().lock();
            write!(out, "{}", prompt)?;
            out.flush()?;
        }

        let mut buffer = String::new();
        let read = io::stdin().lock().read_line(&mut buffer)?;

        Ok((read > 0).then_some(buffer))
    }
}

/// In-memory console: input lines are queued up front, output lines and
/// prompts are recorded for inspection.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
    prompts: Vec<String>,
}

impl ScriptedConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every line written so far, one entry per `IPAKITA`.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// All output as it would have appeared on a terminal.
    pub fn output_text(&self) -> String {
        self.output.iter().map(|line| format!("{}\n", line)).collect()
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }
}
