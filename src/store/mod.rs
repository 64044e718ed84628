//! Document storage.
//!
//! The store owns the persisted document exclusively; callers read the
//! whole document, mutate an in-memory copy, and write the whole document
//! back. Implementations do not lock: concurrent writers race and the last
//! write wins, which is this service's documented contract.

pub mod document;
pub mod errors;
pub mod json_file;
pub mod memory;

pub use document::{record_id, Document, SubmissionRecord};
pub use errors::{StoreError, StoreErrorCode, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Whole-document load/replace of the persisted state.
///
/// Injected into the submission service so file-backed, in-memory, or
/// future transactional implementations are interchangeable.
pub trait DocumentStore: Send + Sync {
    /// Loads the entire document.
    fn load(&self) -> StoreResult<Document>;

    /// Replaces the entire document.
    fn save(&self, document: &Document) -> StoreResult<()>;
}
