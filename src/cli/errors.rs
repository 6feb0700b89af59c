//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::store::{SeedError, StoreError};

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Seed dataset could not be read or failed validation
    SeedInvalid,
    /// I/O error (stdout)
    IoError,
    /// Runtime or listener could not start
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::SeedInvalid => "MOVIES_SEED_INVALID",
            Self::IoError => "MOVIES_IO_ERROR",
            Self::BootFailed => "MOVIES_BOOT_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn seed_invalid(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::SeedInvalid, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<SeedError> for CliError {
    fn from(e: SeedError) -> Self {
        Self::seed_invalid(e.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::seed_invalid(e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_carries_code() {
        let err = CliError::boot_failed("port in use");
        assert_eq!(err.to_string(), "MOVIES_BOOT_FAILED: port in use");
    }

    #[test]
    fn test_seed_error_conversion() {
        let err = CliError::from(SeedError::DuplicateId {
            index: 1,
            id: "x".into(),
        });
        assert_eq!(err.code(), &CliErrorCode::SeedInvalid);
        assert!(err.message().contains("'x'"));
    }
}
