//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Does NOT handle:
//! - Non-fatal findings such as duplicate account names (see diagnostics.rs).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, bounds, etc.).
//! - Invalid values never echo password variables back to the caller.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("{var} must be between 0 and {max} (got {got})")]
    SlotCountTooLarge { var: String, max: usize, got: usize },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    pub(crate) fn invalid(var: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            var: var.into(),
            message: message.into(),
        }
    }

    /// Name of the offending environment variable, when there is one.
    pub fn var(&self) -> Option<&str> {
        match self {
            ConfigError::InvalidValue { var, .. } | ConfigError::SlotCountTooLarge { var, .. } => {
                Some(var)
            }
            _ => None,
        }
    }
}
