//! CLI module for the verdict harness
//!
//! ## Commands
//!
//! - `selftest` - Run the bundled self-check suite and print its outcomes
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod selftest;

use std::process;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::{ColorChoice, RunConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// A command failure: the message to print (empty when the command already reported) and the exit status.
#[derive(Debug)]
pub struct CliError {
    pub message: String,
    pub exit_code: i32,
}

impl CliError {
    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: 1,
        }
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Async test execution and aggregation harness
#[derive(Parser, Debug)]
#[command(name = "verdict")]
#[command(version)]
#[command(about = "Async test execution and aggregation harness", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the bundled self-check suite
    Selftest {
        /// Only print the summary line
        #[arg(short, long)]
        quiet: bool,
        /// Colour error lines
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
        /// Upper bound for fixtures that wait on callbacks, in milliseconds
        #[arg(long = "timeout-ms", value_name = "MS", default_value_t = 1000)]
        timeout_ms: u64,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    if let Err(e) = execute(cli) {
        if !e.message.is_empty() {
            eprintln!("{}", e.message);
        }
        process::exit(e.exit_code);
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<()> {
    match cli.command {
        Some(Command::Selftest {
            quiet,
            color,
            timeout_ms,
        }) => {
            let config = RunConfig::new()
                .with_print_results(!quiet)
                .with_color(color)
                .with_until_timeout(Some(Duration::from_millis(timeout_ms)));
            selftest::run_selftest(&config)
        }
        None => Err(CliError::failure("no command given; try `verdict --help`")),
    }
}

// ============================================================================
// Tests
// ============================================================================
