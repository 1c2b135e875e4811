use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
#[allow(dead_code)]
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
///
/// Variants name the pipeline stage, so a fatal error always tells the
/// user where it happened (input, cache, mapping, assembly, validation).
pub enum CliError {
    /// Bad file path, unreadable input, parse failure.
    Input(String),
    /// Argument / usage errors.
    Usage(String),
    /// Identifier cache load/save problems.
    Cache(stagegraph_gupri::GupriError),
    /// Document assembly problems (prefix conflicts, malformed lines).
    Assembly(stagegraph_turtle::TurtleError),
    /// Combined document failed syntax validation.
    Validation(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Input(msg) => write!(f, "{} input: {msg}", "error:".red().bold()),
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Cache(e) => write!(f, "{} cache: {e}", "error:".red().bold()),
            CliError::Assembly(e) => write!(f, "{} assembly: {e}", "error:".red().bold()),
            CliError::Validation(msg) => {
                write!(f, "{} validation: {msg}", "error:".red().bold())
            }
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<stagegraph_gupri::GupriError> for CliError {
    fn from(e: stagegraph_gupri::GupriError) -> Self {
        CliError::Cache(e)
    }
}

impl From<stagegraph_turtle::TurtleError> for CliError {
    fn from(e: stagegraph_turtle::TurtleError) -> Self {
        CliError::Assembly(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        CliError::Input(format!("CSV read error: {e}"))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Input(format!("JSON parse error: {e}"))
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
