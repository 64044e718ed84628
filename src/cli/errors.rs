//! CLI-specific error types.

use std::fmt;
use std::io;

/// CLI error codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdin/stdout/files)
    IoError,
    /// Data file already initialized
    AlreadyInitialized,
    /// Server failed to boot
    BootFailed,
}

impl CliErrorCode {
    /// Get the error code string.
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "FORM_CLI_CONFIG_ERROR",
            Self::IoError => "FORM_CLI_IO_ERROR",
            Self::AlreadyInitialized => "FORM_CLI_ALREADY_INITIALIZED",
            Self::BootFailed => "FORM_CLI_BOOT_FAILED",
        }
    }
}

/// CLI error.
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error.
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Config error.
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    /// I/O error.
    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Already initialized.
    pub fn already_initialized(path: &str) -> Self {
        Self::new(
            CliErrorCode::AlreadyInitialized,
            format!("Data file '{}' already exists", path),
        )
    }

    /// Boot failed.
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    /// Get the error code.
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error message.
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

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(CliErrorCode::ConfigError.code(), "FORM_CLI_CONFIG_ERROR");
        assert_eq!(CliErrorCode::IoError.code(), "FORM_CLI_IO_ERROR");
        assert_eq!(
            CliErrorCode::AlreadyInitialized.code(),
            "FORM_CLI_ALREADY_INITIALIZED"
        );
        assert_eq!(CliErrorCode::BootFailed.code(), "FORM_CLI_BOOT_FAILED");
    }

    #[test]
    fn test_display_leads_with_code() {
        let err = CliError::config_error("bad port");
        assert!(err.to_string().starts_with("FORM_CLI_CONFIG_ERROR"));
    }
}
