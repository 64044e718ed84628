//! HTTP boundary errors.
//!
//! Service errors translate to the wire contract here: validation failures
//! become 400 with the per-field error map, unknown ids become 404 with a
//! client-facing message. Storage degradation never surfaces (see the
//! service module).

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::service::ServiceError;

/// Errors surfaced by the API handlers.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The submitted record violated the schema.
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(BTreeMap<String, String>),

    /// The referenced submission does not exist.
    #[error("Submission not found")]
    NotFound,
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::ValidationFailed(errors) => ApiError::Validation(errors),
            ServiceError::NotFound => ApiError::NotFound,
        }
    }
}

/// 400 body: `{"success": false, "errors": {...}}`.
#[derive(Debug, Serialize)]
struct ValidationBody {
    success: bool,
    errors: BTreeMap<String, String>,
}

/// 404 body: `{"success": false, "message": "..."}`.
#[derive(Debug, Serialize)]
struct MessageBody {
    success: bool,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            ApiError::Validation(errors) => (
                status,
                Json(ValidationBody {
                    success: false,
                    errors,
                }),
            )
                .into_response(),
            ApiError::NotFound => (
                status,
                Json(MessageBody {
                    success: false,
                    message: "Submission not found".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
