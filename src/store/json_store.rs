//! JSON-file live store
//!
//! Stores each collection as one JSON array file under the live data
//! directory. This is the only production backend; it keeps whatever
//! atomicity a single file write provides and nothing more, so a restore
//! interleaved with a concurrent writer has undefined final contents.

use std::path::PathBuf;

use crate::collections::CollectionSpec;
use crate::error::{SnapResult, SnapshotError};
use crate::store::file_io::{read_documents, write_json_atomic};
use crate::store::{Document, LiveStore};

/// Live store backed by one JSON array file per collection
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Open a store over the given data directory, creating it if needed
    pub fn open(data_dir: PathBuf) -> SnapResult<Self> {
        std::fs::create_dir_all(&data_dir).map_err(|e| {
            SnapshotError::Store(format!(
                "Failed to open store at {}: {}",
                data_dir.display(),
                e
            ))
        })?;
        Ok(Self { data_dir })
    }

    /// Path of the backing file for one collection
    pub fn collection_path(&self, spec: &CollectionSpec) -> PathBuf {
        self.data_dir.join(spec.file_name())
    }
}

impl LiveStore for JsonStore {
    fn read_all(&self, spec: &CollectionSpec) -> SnapResult<Vec<Document>> {
        read_documents(self.collection_path(spec))
            .map_err(|e| SnapshotError::Store(format!("Failed to read {}: {}", spec.name, e)))
    }

    fn delete_all(&mut self, spec: &CollectionSpec) -> SnapResult<u64> {
        let existing = self.read_all(spec)?;
        let removed = existing.len() as u64;

        // Truncation writes an empty array rather than unlinking, so the
        // collection file always reflects the last completed operation.
        write_json_atomic(self.collection_path(spec), &Vec::<Document>::new())
            .map_err(|e| SnapshotError::Store(format!("Failed to truncate {}: {}", spec.name, e)))?;

        Ok(removed)
    }

    fn insert_many(&mut self, spec: &CollectionSpec, docs: &[Document]) -> SnapResult<u64> {
        let mut existing = self.read_all(spec)?;
        existing.extend_from_slice(docs);

        write_json_atomic(self.collection_path(spec), &existing).map_err(|e| {
            SnapshotError::Store(format!("Failed to write {}: {}", spec.name, e))
        })?;

        Ok(docs.len() as u64)
    }
}
