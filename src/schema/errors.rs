//! Schema error types.
//!
//! Error codes:
//! - FORM_SCHEMA_IO_ERROR: schema file could not be read
//! - FORM_SCHEMA_PARSE_FAILED: schema file is not valid JSON for the schema shape
//! - FORM_SCHEMA_INVALID: schema structure violates its invariants

use std::fmt;

/// Schema-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaErrorCode {
    /// Schema file read failure
    FormSchemaIoError,
    /// Schema file did not parse
    FormSchemaParseFailed,
    /// Schema structure invalid (duplicate ids, bad regex, options mismatch)
    FormSchemaInvalid,
}

impl SchemaErrorCode {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaErrorCode::FormSchemaIoError => "FORM_SCHEMA_IO_ERROR",
            SchemaErrorCode::FormSchemaParseFailed => "FORM_SCHEMA_PARSE_FAILED",
            SchemaErrorCode::FormSchemaInvalid => "FORM_SCHEMA_INVALID",
        }
    }
}

impl fmt::Display for SchemaErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Schema error with code and context.
#[derive(Debug)]
pub struct SchemaError {
    code: SchemaErrorCode,
    message: String,
}

impl SchemaError {
    /// Schema file read failure.
    pub fn io_error(message: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::FormSchemaIoError,
            message: message.into(),
        }
    }

    /// Schema file parse failure.
    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::FormSchemaParseFailed,
            message: message.into(),
        }
    }

    /// Structural invariant violation.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            code: SchemaErrorCode::FormSchemaInvalid,
            message: message.into(),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> SchemaErrorCode {
        self.code
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for SchemaError {}

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;
