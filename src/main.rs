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

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use bisaya::diagnostics::DiagnosticPrinter;
use bisaya::{parse_source, tokenize, Interpreter, RunError, StdConsole};

/// Source could not be lexed or parsed.
const EXIT_DATA_ERROR: u8 = 65;
/// Source file could not be read.
const EXIT_NO_INPUT: u8 = 66;
/// A runtime error aborted the program.
const EXIT_SOFTWARE: u8 = 70;

/// Runs a Bisaya++ program.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the `.bpp` source file.
    file: PathBuf,

    /// What to do with the source.
    #[arg(long, value_enum, default_value_t = Emit::Run)]
    emit: Emit,

    /// Don't print `Enter value for …` before each DAWAT read.
    #[arg(long)]
    no_prompt: bool,

    /// Log pipeline stages to stderr. `BISAYA_LOG` takes precedence.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Emit {
    /// Execute the program.
    Run,
    /// Print the token stream as JSON.
    Tokens,
    /// Print the parsed tree as JSON.
    Ast,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = match fs::read_to_string(&cli.file)
        .with_context(|| format!("failed to read '{}'", cli.file.display()))
    {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {:#}", e);
            return ExitCode::from(EXIT_NO_INPUT);
        }
    };

    let printer = DiagnosticPrinter::new(cli.file.display().to_string(), source.as_str());

    match execute(&cli, &source) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Run(error)) => {
            for diagnostic in error.errors() {
                printer.print(diagnostic);
            }

            match error {
                RunError::Diagnostics(_) => ExitCode::from(EXIT_DATA_ERROR),
                RunError::Runtime(_) => ExitCode::from(EXIT_SOFTWARE),
            }
        }
        Err(Failure::Other(e)) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

enum Failure {
    Run(RunError),
    Other(anyhow::Error),
}

impl From<RunError> for Failure {
    fn from(error: RunError) -> Self {
        Failure::Run(error)
    }
}

impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        Failure::Other(error)
    }
}

fn execute(cli: &Cli, source: &str) -> Result<(), Failure> {
    info!(file = %cli.file.display(), emit = ?cli.emit, "starting");

    match cli.emit {
        Emit::Tokens => {
            let tokens = tokenize(source).map_err(RunError::Diagnostics)?;
            let json = serde_json::to_string_pretty(&tokens).context("failed to encode tokens")?;
            println!("{}", json);
        }

        Emit::Ast => {
            let program = parse_source(source)?;
            let json = serde_json::to_string_pretty(&program).context("failed to encode tree")?;
            println!("{}", json);
        }

        Emit::Run => {
            let program = parse_source(source)?;
            let mut console = StdConsole::new(!cli.no_prompt);

            Interpreter::new(&mut console)
                .interpret(&program)
                .map_err(RunError::Runtime)?;
        }
    }

    debug!("done");
    Ok(())
}

/// Logs go to stderr so they never mix with program output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("BISAYA_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
