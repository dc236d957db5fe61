//! Snapshot manifest
//!
//! `metadata.json` summarizes a snapshot: creation date, total document
//! count, and the collections included. The manifest is written last during
//! export, so its presence marks a complete snapshot. At import time it is
//! surfaced for operator confirmation only; its counts are not re-verified
//! against the collection files.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{SnapResult, SnapshotError};
use crate::store::file_io::write_json_atomic;

/// File name of the manifest inside a snapshot directory
pub const MANIFEST_FILE: &str = "metadata.json";

/// Snapshot metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// When the snapshot was created
    pub date: DateTime<Utc>,
    /// Sum of per-collection document counts at export time
    #[serde(rename = "totalDocuments")]
    pub total_documents: u64,
    /// Names of the collections included
    pub collections: Vec<String>,
}

impl Manifest {
    /// Load a manifest from a snapshot directory
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or unparsable. Callers on the
    /// import path treat both cases as non-fatal.
    pub fn load(snapshot_dir: &Path) -> SnapResult<Self> {
        let path = snapshot_dir.join(MANIFEST_FILE);

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| SnapshotError::Snapshot(format!("Failed to read manifest: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| SnapshotError::Snapshot(format!("Failed to parse manifest: {}", e)))
    }

    /// Write this manifest into a snapshot directory
    pub fn save(&self, snapshot_dir: &Path) -> SnapResult<()> {
        write_json_atomic(snapshot_dir.join(MANIFEST_FILE), self)
    }

    /// One-line summary for operator confirmation
    pub fn summary(&self) -> String {
        format!(
            "created {}, {} document(s) across {} collection(s)",
            self.date.format("%Y-%m-%d %H:%M:%S UTC"),
            self.total_documents,
            self.collections.len()
        )
    }
}
