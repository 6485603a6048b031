//! Error types for the Finhealth engine.
//!
//! The scoring pipeline itself cannot fail; every error here is raised at a
//! boundary (snapshot validation, configuration loading, serialization).

use thiserror::Error;

/// A specialized Result type for Finhealth operations.
pub type FinhealthResult<T> = Result<T, FinhealthError>;

/// The main error type for Finhealth operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinhealthError {
    /// A snapshot field is missing, negative, or not a finite number.
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput {
        /// Name of the offending field.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// Payload could not be encoded or decoded.
    #[error("Serialization error: {reason}")]
    Serialization {
        /// Description of the failure.
        reason: String,
    },

    /// Configuration error.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl FinhealthError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error for a required field that was not supplied.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::invalid_input(field, "field is required")
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true if this error was caused by a rejected snapshot.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl From<serde_json::Error> for FinhealthError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}
