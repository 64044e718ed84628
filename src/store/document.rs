//! The persisted document.
//!
//! The entire service state is one JSON document with a single top-level
//! `submissions` list. Mutations are whole-document read-modify-write; there
//! are no partial updates at the storage layer.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One persisted form response. Keys are schema field ids plus the
/// server-assigned `id` and `createdAt`.
pub type SubmissionRecord = Map<String, Value>;

/// The whole persisted state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Ordered submission list, append order = creation order.
    #[serde(default)]
    pub submissions: Vec<SubmissionRecord>,
}

impl Document {
    /// An empty document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Position of the submission with the given id, if present.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.submissions
            .iter()
            .position(|record| record_id(record) == Some(id))
    }
}

/// The server-assigned id of a record, if it has one.
pub fn record_id(record: &SubmissionRecord) -> Option<&str> {
    record.get("id").and_then(Value::as_str)
}
