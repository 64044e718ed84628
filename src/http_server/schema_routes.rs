//! Form schema endpoint.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::schema::FormSchema;
use crate::service::SubmissionService;
use crate::store::DocumentStore;

/// Routes serving the form schema document.
pub fn schema_routes<S: DocumentStore + 'static>(
    service: Arc<SubmissionService<S>>,
) -> Router {
    Router::new()
        .route("/form-schema", get(get_schema_handler::<S>))
        .with_state(service)
}

/// `GET /api/form-schema` - the schema document, served verbatim.
async fn get_schema_handler<S: DocumentStore + 'static>(
    State(service): State<Arc<SubmissionService<S>>>,
) -> Json<FormSchema> {
    Json(service.schema().clone())
}
