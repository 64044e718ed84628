//! Submission CRUD and listing endpoints.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::query::ListParams;
use crate::service::SubmissionService;
use crate::store::{DocumentStore, SubmissionRecord};

use super::errors::ApiError;

// ==================
// Response Types
// ==================

/// 201 body for a created submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub success: bool,
    pub id: String,
    pub created_at: String,
}

/// 200 body for an updated submission.
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub success: bool,
    pub id: String,
}

/// 200 body for a deleted submission.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// 200 body for a listing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub submissions: Vec<SubmissionRecord>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

// ==================
// Routes
// ==================

/// Submission routes, nested under `/api` by the server.
pub fn submission_routes<S: DocumentStore + 'static>(
    service: Arc<SubmissionService<S>>,
) -> Router {
    Router::new()
        .route("/submissions", post(create_handler::<S>))
        .route("/submissions", get(list_handler::<S>))
        .route("/submissions/{id}", put(update_handler::<S>))
        .route("/submissions/{id}", delete(delete_handler::<S>))
        .with_state(service)
}

// ==================
// Handlers
// ==================

/// `POST /api/submissions` - validate and persist a new submission.
async fn create_handler<S: DocumentStore + 'static>(
    State(service): State<Arc<SubmissionService<S>>>,
    Json(body): Json<Value>,
) -> Result<(StatusCode, Json<CreateResponse>), ApiError> {
    let candidate = as_record(body);
    let created = service.create(candidate)?;

    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            success: true,
            id: created.id,
            created_at: created.created_at,
        }),
    ))
}

/// `PUT /api/submissions/{id}` - merge a partial update and re-validate.
async fn update_handler<S: DocumentStore + 'static>(
    State(service): State<Arc<SubmissionService<S>>>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let updates = as_record(body);
    service.update(&id, updates)?;

    Ok(Json(UpdateResponse { success: true, id }))
}

/// `DELETE /api/submissions/{id}` - remove a submission.
async fn delete_handler<S: DocumentStore + 'static>(
    State(service): State<Arc<SubmissionService<S>>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    service.delete(&id)?;

    Ok(Json(DeleteResponse {
        success: true,
        message: "Submission deleted".to_string(),
    }))
}

/// `GET /api/submissions` - the search/sort/paginate listing.
async fn list_handler<S: DocumentStore + 'static>(
    State(service): State<Arc<SubmissionService<S>>>,
    Query(raw): Query<HashMap<String, String>>,
) -> Json<ListResponse> {
    let params = ListParams::parse(&raw);
    let result = service.list(&params);

    Json(ListResponse {
        submissions: result.submissions,
        total: result.total,
        page: result.page,
        total_pages: result.total_pages,
    })
}

/// A non-object body validates like an empty record (every required field
/// missing) instead of failing deserialization.
fn as_record(body: Value) -> SubmissionRecord {
    match body {
        Value::Object(map) => map,
        _ => SubmissionRecord::new(),
    }
}
