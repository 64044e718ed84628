//! File-backed document store.
//!
//! The document lives in a single pretty-printed JSON file. Every load reads
//! the whole file, every save rewrites it. There is no locking and no
//! write-ahead anything: last writer wins, which is the documented contract
//! of this service.

use std::fs;
use std::path::{Path, PathBuf};

use super::document::Document;
use super::errors::{StoreError, StoreResult};
use super::DocumentStore;

/// Document store persisting to one JSON file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store at the given path, creating the file (and parent
    /// directories) with an empty document if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(|e| {
                        StoreError::init_failed(
                            format!("failed to create '{}'", parent.display()),
                            e,
                        )
                    })?;
                }
            }
            write_document(&path, &Document::empty())?;
        }

        Ok(Self { path })
    }

    /// Creates a store handle without touching the filesystem. Used when the
    /// caller wants load-degrade behavior instead of eager creation.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> StoreResult<Document> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            StoreError::read_failed_io(format!("failed to read '{}'", self.path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(|e| {
            StoreError::read_failed(format!("malformed document '{}': {}", self.path.display(), e))
        })
    }

    fn save(&self, document: &Document) -> StoreResult<()> {
        write_document(&self.path, document)
    }
}

fn write_document(path: &Path, document: &Document) -> StoreResult<()> {
    let content = serde_json::to_string_pretty(document).map_err(|e| {
        StoreError::write_failed(format!("failed to encode document: {}", e))
    })?;

    fs::write(path, content).map_err(|e| {
        StoreError::write_failed_io(format!("failed to write '{}'", path.display()), e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_open_creates_empty_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("data").join("database.json");

        let store = JsonFileStore::open(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), Document::empty());

        let raw = fs::read_to_string(&path).unwrap();
        // pretty-printed on disk
        assert!(raw.contains('\n'));
    }

    #[test]
    fn test_open_preserves_existing_document() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("database.json");
        fs::write(
            &path,
            r#"{"submissions": [{"id": "s1", "fullName": "Ada"}]}"#,
        )
        .unwrap();

        let store = JsonFileStore::open(&path).unwrap();
        let doc = store.load().unwrap();
        assert_eq!(doc.submissions.len(), 1);
        assert_eq!(doc.submissions[0]["fullName"], json!("Ada"));
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::open(tmp.path().join("database.json")).unwrap();

        let mut doc = Document::empty();
        doc.submissions
            .push(json!({"id": "s1", "age": 30}).as_object().cloned().unwrap());
        store.save(&doc).unwrap();

        assert_eq!(store.load().unwrap(), doc);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::at(tmp.path().join("absent.json"));
        let err = store.load().unwrap_err();
        assert_eq!(err.code().code(), "FORM_STORAGE_READ_FAILED");
    }

    #[test]
    fn test_load_malformed_file_is_read_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("database.json");
        fs::write(&path, "{broken").unwrap();

        let err = JsonFileStore::at(&path).load().unwrap_err();
        assert_eq!(err.code().code(), "FORM_STORAGE_READ_FAILED");
    }

    #[test]
    fn test_save_into_missing_directory_is_write_error() {
        let tmp = TempDir::new().unwrap();
        let store = JsonFileStore::at(tmp.path().join("gone").join("database.json"));
        let err = store.save(&Document::empty()).unwrap_err();
        assert_eq!(err.code().code(), "FORM_STORAGE_WRITE_FAILED");
    }
}
