//! Submission orchestration.
//!
//! Every operation is a full load-mutate-store cycle over the injected
//! document store: validate via the schema engine, apply the change to an
//! in-memory copy of the document, write the whole document back.
//!
//! Storage degradation is deliberate and matches the documented contract:
//! a failed load behaves as an empty collection and a failed save is a
//! logged no-op, so callers can observe a success whose write never landed.
//! Cross-process writers race with last-writer-wins; the internal mutex
//! only serializes operations within one process, mirroring the reference
//! runtime's single-threaded event loop.

use std::sync::{Mutex, PoisonError};

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use uuid::Uuid;

use crate::observability::Logger;
use crate::query::{self, ListParams, QueryResult};
use crate::schema::{FormSchema, SchemaValidator};
use crate::store::{Document, DocumentStore, SubmissionRecord};

use super::errors::{ServiceError, ServiceResult};

/// Identity assigned to a newly created submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedSubmission {
    /// Fresh UUID
    pub id: String,
    /// RFC 3339 UTC creation timestamp
    pub created_at: String,
}

/// Orchestrates submission CRUD over a schema validator and a document
/// store.
pub struct SubmissionService<S> {
    store: S,
    validator: SchemaValidator,
    serial: Mutex<()>,
}

impl<S: DocumentStore> SubmissionService<S> {
    /// Creates a service over the given store and validator.
    pub fn new(store: S, validator: SchemaValidator) -> Self {
        Self {
            store,
            validator,
            serial: Mutex::new(()),
        }
    }

    /// The schema this service validates against.
    pub fn schema(&self) -> &FormSchema {
        self.validator.schema()
    }

    /// Validates and persists a new submission.
    ///
    /// Client-supplied `id`/`createdAt` keys are discarded; both are always
    /// server-assigned.
    pub fn create(&self, candidate: SubmissionRecord) -> ServiceResult<CreatedSubmission> {
        let errors = self.validator.validate(&candidate);
        if !errors.is_empty() {
            return Err(ServiceError::ValidationFailed(errors));
        }

        let _serial = self.lock();
        let mut document = self.load_document();

        let mut record = candidate;
        record.remove("id");
        record.remove("createdAt");

        let created = CreatedSubmission {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };
        record.insert("id".into(), Value::String(created.id.clone()));
        record.insert("createdAt".into(), Value::String(created.created_at.clone()));

        document.submissions.push(record);
        self.save_document(&document);

        Ok(created)
    }

    /// Merges a partial update into an existing submission and re-validates
    /// the merged record as a whole. `id`/`createdAt` stay untouched.
    pub fn update(&self, id: &str, updates: SubmissionRecord) -> ServiceResult<()> {
        let _serial = self.lock();
        let mut document = self.load_document();

        let position = document.position(id).ok_or(ServiceError::NotFound)?;

        let mut merged = document.submissions[position].clone();
        for (key, value) in updates {
            if key == "id" || key == "createdAt" {
                continue;
            }
            merged.insert(key, value);
        }

        let errors = self.validator.validate(&merged);
        if !errors.is_empty() {
            return Err(ServiceError::ValidationFailed(errors));
        }

        document.submissions[position] = merged;
        self.save_document(&document);

        Ok(())
    }

    /// Removes a submission.
    pub fn delete(&self, id: &str) -> ServiceResult<()> {
        let _serial = self.lock();
        let mut document = self.load_document();

        let position = document.position(id).ok_or(ServiceError::NotFound)?;
        document.submissions.remove(position);
        self.save_document(&document);

        Ok(())
    }

    /// Lists submissions through the query pipeline.
    pub fn list(&self, params: &ListParams) -> QueryResult {
        let _serial = self.lock();
        let document = self.load_document();
        query::run(document.submissions, params)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ()> {
        self.serial.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load with degrade: a failed read is logged and treated as an empty
    /// collection.
    fn load_document(&self) -> Document {
        match self.store.load() {
            Ok(document) => document,
            Err(e) => {
                Logger::warn(
                    "STORE_READ_DEGRADED",
                    &[("error", &e.to_string()), ("fallback", "empty document")],
                );
                Document::empty()
            }
        }
    }

    /// Save with degrade: a failed write is logged and dropped.
    fn save_document(&self, document: &Document) {
        if let Err(e) = self.store.save(document) {
            Logger::warn("STORE_WRITE_DROPPED", &[("error", &e.to_string())]);
        }
    }
}
