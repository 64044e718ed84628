//! HTTP surface of the form service.
//!
//! Endpoints:
//! - `GET /health` - health check
//! - `GET /api/form-schema` - the form schema document
//! - `POST /api/submissions` - create a submission
//! - `PUT /api/submissions/{id}` - update a submission
//! - `DELETE /api/submissions/{id}` - delete a submission
//! - `GET /api/submissions` - paginated/sortable/searchable listing

pub mod config;
pub mod errors;
pub mod schema_routes;
pub mod server;
pub mod submission_routes;

pub use config::HttpServerConfig;
pub use errors::ApiError;
pub use server::HttpServer;
