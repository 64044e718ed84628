//! In-memory document store for tests and ephemeral runs.

use std::sync::{Mutex, PoisonError};

use super::document::Document;
use super::errors::StoreResult;
use super::DocumentStore;

/// Document store keeping the document in memory. Behaves like the file
/// store minus the disk: loads clone, saves replace wholesale.
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<Document>,
}

impl MemoryStore {
    /// An empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with a document.
    pub fn seeded(document: Document) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn load(&self) -> StoreResult<Document> {
        let guard = self
            .document
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        Ok(guard.clone())
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        let mut guard = self
            .document
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = document.clone();
        Ok(())
    }
}
