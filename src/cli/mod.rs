//! CLI module for the Javelin vocabulary tool
//!
//! ## Commands
//!
//! - `render <ORDINAL>` - Render a token ordinal (`token(N)` for unassigned ordinals)
//! - `classify <TEXT>` - Classify identifier text as a keyword or a plain name
//! - `lookup <SYMBOL>` - Resolve a separator/operator symbol to its kind
//! - `precedence <SYMBOL>` - Show binary precedence and associativity
//! - `check` - Validate the token registry
//! - `reference [--output PATH]` - Generate the Markdown token reference
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions write to a caller-supplied writer and return `CliResult<ExitCode>`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use javelin_core::RegistryError;
use thiserror::Error;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::failure(format!("Error writing output: {e}"))
    }
}

impl From<RegistryError> for CliError {
    fn from(e: RegistryError) -> Self {
        CliError::failure(format!("Registry check failed: {e}"))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Inspect the Javelin token vocabulary
#[derive(Parser, Debug)]
#[command(name = "javelin")]
#[command(version = VERSION)]
#[command(about = "Inspect the Javelin token vocabulary", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render a token ordinal
    Render {
        /// Token ordinal
        #[arg(value_name = "ORDINAL")]
        ordinal: u32,
    },

    /// Classify identifier text as a keyword or a plain name
    Classify {
        /// Identifier text (exact, case-sensitive)
        #[arg(value_name = "TEXT")]
        text: String,
    },

    /// Resolve a separator or operator symbol to its kind
    Lookup {
        /// Symbol such as `>>>=` or `;`
        #[arg(value_name = "SYMBOL", allow_hyphen_values = true)]
        symbol: String,
    },

    /// Show binary precedence and associativity of an operator
    Precedence {
        /// Operator symbol, or `instanceof`
        #[arg(value_name = "SYMBOL", allow_hyphen_values = true)]
        symbol: String,
    },

    /// Validate the token registry
    Check,

    /// Generate the Markdown token reference
    Reference {
        /// Output file (default: stdout)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
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

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = execute(cli, &mut out);
    let _ = out.flush();

    match result {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command, writing its output to `out`.
pub fn execute(cli: Cli, out: &mut dyn Write) -> CliResult<ExitCode> {
    tracing::debug!(command = ?cli.command, "executing command");
    match cli.command {
        Command::Render { ordinal } => commands::render(out, ordinal),
        Command::Classify { text } => commands::classify(out, &text),
        Command::Lookup { symbol } => commands::lookup(out, &symbol),
        Command::Precedence { symbol } => commands::precedence(out, &symbol),
        Command::Check => commands::check(out),
        Command::Reference { output } => commands::reference(out, output.as_deref()),
    }
}
