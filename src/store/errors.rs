//! Storage error types.
//!
//! Error codes:
//! - FORM_STORAGE_READ_FAILED: the document could not be loaded
//! - FORM_STORAGE_WRITE_FAILED: the document could not be persisted
//! - FORM_STORAGE_INIT_FAILED: the data file could not be created

use std::fmt;
use std::io;

/// Storage-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Document read failed
    FormStorageReadFailed,
    /// Document write failed
    FormStorageWriteFailed,
    /// Data file creation failed
    FormStorageInitFailed,
}

impl StoreErrorCode {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::FormStorageReadFailed => "FORM_STORAGE_READ_FAILED",
            StoreErrorCode::FormStorageWriteFailed => "FORM_STORAGE_WRITE_FAILED",
            StoreErrorCode::FormStorageInitFailed => "FORM_STORAGE_INIT_FAILED",
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Storage error with code, message, and optional I/O source.
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StoreError {
    /// Document read failure.
    pub fn read_failed(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::FormStorageReadFailed,
            message: message.into(),
            source: None,
        }
    }

    /// Document read failure with I/O source.
    pub fn read_failed_io(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::FormStorageReadFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Document write failure.
    pub fn write_failed(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::FormStorageWriteFailed,
            message: message.into(),
            source: None,
        }
    }

    /// Document write failure with I/O source.
    pub fn write_failed_io(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::FormStorageWriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Data file creation failure.
    pub fn init_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::FormStorageInitFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(source) = &self.source {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as _)
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            StoreErrorCode::FormStorageReadFailed.code(),
            "FORM_STORAGE_READ_FAILED"
        );
        assert_eq!(
            StoreErrorCode::FormStorageWriteFailed.code(),
            "FORM_STORAGE_WRITE_FAILED"
        );
        assert_eq!(
            StoreErrorCode::FormStorageInitFailed.code(),
            "FORM_STORAGE_INIT_FAILED"
        );
    }

    #[test]
    fn test_display_includes_io_source() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::write_failed_io("saving document", io);
        let text = err.to_string();
        assert!(text.contains("FORM_STORAGE_WRITE_FAILED"));
        assert!(text.contains("denied"));
    }
}
