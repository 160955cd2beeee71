//! CLI binary entrypoint.

mod commands;
mod error;
mod format;
mod logging;

use clap::{Parser, Subcommand};
use commands::{run_collect, run_divide, run_hello, run_info};
use error::{CliError, ExitCode};
use format::{OutputArgs, OutputMode};
use std::io::{self, Write};

#[derive(Debug, Parser)]
#[command(
    name = "orx",
    version,
    about = "Option and Result demo CLI",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    output: OutputArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print a greeting assembled from `Ok` and `Some` values.
    Hello,
    /// Parse integers and sum them, failing on the first invalid value.
    Collect {
        /// Values to parse as signed 64-bit integers.
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Divide two integers with panics captured as errors.
    Divide {
        #[arg(allow_negative_numbers = true)]
        dividend: i64,
        #[arg(allow_negative_numbers = true)]
        divisor: i64,
    },
    /// Show build and version details.
    Info,
}

pub(crate) struct CliOutput {
    stdout: String,
    stderr: String,
    exit_code: ExitCode,
}

impl CliOutput {
    pub(crate) const fn success(stdout: String) -> Self {
        Self {
            stdout,
            stderr: String::new(),
            exit_code: ExitCode::Ok,
        }
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    logging::init(cli.output.verbose);
    let mode = OutputMode::from_args(&cli.output);

    match run(&cli.command, mode) {
        Ok(output) => match write_output(&output) {
            Ok(()) => std::process::ExitCode::from(output.exit_code.as_u8()),
            Err(error) => exit_with_error(&error),
        },
        Err(error) => exit_with_error(&error),
    }
}

fn exit_with_error(error: &CliError) -> std::process::ExitCode {
    tracing::debug!(exit_code = error.exit_code().as_u8(), "command failed");
    let _ = writeln!(io::stderr(), "error: {error}");
    std::process::ExitCode::from(error.exit_code().as_u8())
}

fn run(command: &Commands, mode: OutputMode) -> Result<CliOutput, CliError> {
    match command {
        Commands::Hello => run_hello(mode),
        Commands::Collect { values } => run_collect(mode, values),
        Commands::Divide { dividend, divisor } => run_divide(mode, *dividend, *divisor),
        Commands::Info => run_info(mode),
    }
}

fn write_output(output: &CliOutput) -> Result<(), CliError> {
    let mut stdout = io::stdout();
    stdout.write_all(output.stdout.as_bytes())?;

    if !output.stderr.is_empty() {
        let mut stderr = io::stderr();
        stderr.write_all(output.stderr.as_bytes())?;
        stderr.flush()?;
    }

    Ok(())
}
