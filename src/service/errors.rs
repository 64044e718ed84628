//! Submission service errors.
//!
//! Only conditions the caller can act on surface here. Storage failures are
//! recovered inside the service (failed reads degrade to an empty document,
//! failed writes are logged and dropped) and deliberately never reach the
//! caller; see the service module docs.

use std::collections::BTreeMap;

use thiserror::Error;

/// Result type for submission operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Submission service errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The candidate record violated the schema; one message per offending
    /// field, last failing rule wins.
    #[error("validation failed for {} field(s)", .0.len())]
    ValidationFailed(BTreeMap<String, String>),

    /// The referenced submission id does not exist.
    #[error("Submission not found")]
    NotFound,
}

impl ServiceError {
    /// Returns the stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::ValidationFailed(_) => "FORM_VALIDATION_FAILED",
            ServiceError::NotFound => "FORM_SUBMISSION_NOT_FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        let errors = BTreeMap::from([("age".to_string(), "Age is required".to_string())]);
        assert_eq!(
            ServiceError::ValidationFailed(errors).code(),
            "FORM_VALIDATION_FAILED"
        );
        assert_eq!(ServiceError::NotFound.code(), "FORM_SUBMISSION_NOT_FOUND");
    }

    #[test]
    fn test_not_found_message_is_client_facing() {
        assert_eq!(ServiceError::NotFound.to_string(), "Submission not found");
    }
}
