//! CLI-specific error types and exit codes.

use storefront_admin::{AdminError, Notice};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The admin facade reported a failure to the operator.
    #[error("{0}")]
    Operation(String),

    /// Argument problem detected after parsing.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to an exit code.
    ///
    /// Exit codes follow sysexits.h where one fits.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Operation(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Io(_) => 74,       // EX_IOERR
            Self::Config(_) => 78,   // EX_CONFIG
        }
    }
}

impl From<&Notice> for CliError {
    fn from(notice: &Notice) -> Self {
        Self::Operation(notice.message.clone())
    }
}

impl From<AdminError> for CliError {
    fn from(err: AdminError) -> Self {
        match err {
            AdminError::Validation(e) => Self::Arguments(e.to_string()),
            AdminError::IndexOutOfRange { .. } => Self::Arguments(err.to_string()),
            other => Self::Operation(other.to_string()),
        }
    }
}
