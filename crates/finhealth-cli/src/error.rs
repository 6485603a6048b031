//! CLI error types.

use finhealth_core::FinhealthError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither an input file nor inline figures were supplied.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Input could not be parsed.
    #[error("Invalid input in {source_name}: {reason}")]
    InvalidInput {
        source_name: String,
        reason: String,
    },

    /// Engine or validation error.
    #[error(transparent)]
    Assessment(#[from] FinhealthError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
