//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfigError` and `CliError` to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Any `ConfigError` anywhere in the chain maps to `ConfigurationError`.

use photosync_config::ConfigError;
use thiserror::Error;

/// Structured exit codes for photosync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - a variable or flag could not be parsed.
    ///
    /// Scripts should fix the environment and not retry unchanged.
    ConfigurationError = 2,

    /// Resource not found - unknown or unpaired account.
    NotFound = 4,

    /// Validation error - `check --strict` found issues.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Command failures that carry their own exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No Synology account is paired with Google account '{google}'")]
    PairingNotFound { google: String },

    #[error("Configuration check found {count} issue(s)")]
    ValidationFailed { count: usize },
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::PairingNotFound { .. } => ExitCode::NotFound,
            CliError::ValidationFailed { .. } => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ConfigurationError;
            }
        }

        ExitCode::GeneralError
    }
}
