//! formbase - a schema-driven onboarding form service
//!
//! A declarative field schema describes a form; the server validates
//! submissions against it, persists them to a single JSON document, and
//! serves a paginated/sortable/searchable listing.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod schema;
pub mod service;
pub mod store;
