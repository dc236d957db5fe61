//! Snapshot export
//!
//! Serializes every known collection from the live store into a new
//! timestamped snapshot directory. The manifest goes in last; a directory
//! without one is a half-written export and is never a valid restore source.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use crate::collections::COLLECTIONS;
use crate::error::{SnapResult, SnapshotError};
use crate::snapshot::manifest::Manifest;
use crate::store::file_io::write_json_atomic;
use crate::store::LiveStore;

/// Creates snapshots from the live store
pub struct ExportManager<S: LiveStore> {
    store: S,
    backups_root: PathBuf,
}

/// Result of an export run
#[derive(Debug)]
pub struct ExportReport {
    /// Name of the created snapshot directory
    pub snapshot_name: String,
    /// Full path to the snapshot
    pub path: PathBuf,
    /// Documents written per collection, in registry order
    pub collection_counts: Vec<(&'static str, u64)>,
    /// Sum of all per-collection counts
    pub total_documents: u64,
}

impl<S: LiveStore> ExportManager<S> {
    /// Create a new ExportManager
    pub fn new(store: S, backups_root: PathBuf) -> Self {
        Self {
            store,
            backups_root,
        }
    }

    /// Export all collections into a new snapshot directory
    ///
    /// Every registry collection gets a file, empty collections included, so
    /// a later import truncates them back to empty rather than skipping them.
    pub fn export(&self) -> SnapResult<ExportReport> {
        let now = Utc::now();
        let snapshot_name = format!(
            "snapshot-{}-{:03}",
            now.format("%Y%m%d-%H%M%S"),
            now.timestamp_subsec_millis()
        );
        let snapshot_dir = self.backups_root.join(&snapshot_name);

        fs::create_dir_all(&snapshot_dir).map_err(|e| {
            SnapshotError::Io(format!("Failed to create snapshot directory: {}", e))
        })?;

        let mut collection_counts = Vec::with_capacity(COLLECTIONS.len());
        let mut total_documents = 0u64;

        for spec in &COLLECTIONS {
            let docs = self.store.read_all(spec)?;
            let count = docs.len() as u64;

            write_json_atomic(snapshot_dir.join(spec.file_name()), &docs)?;

            collection_counts.push((spec.name, count));
            total_documents += count;
        }

        let manifest = Manifest {
            date: now,
            total_documents,
            collections: COLLECTIONS.iter().map(|c| c.name.to_string()).collect(),
        };
        manifest.save(&snapshot_dir)?;

        Ok(ExportReport {
            snapshot_name,
            path: snapshot_dir,
            collection_counts,
            total_documents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections;
    use crate::store::JsonStore;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_export() -> (ExportManager<JsonStore>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let mut store = JsonStore::open(temp_dir.path().join("data")).unwrap();

        store
            .insert_many(
                collections::find("users").unwrap(),
                &[json!({"_id": "u1", "name": "asha"})],
            )
            .unwrap();
        store
            .insert_many(
                collections::find("transactions").unwrap(),
                &[json!({"_id": "t1"}), json!({"_id": "t2"})],
            )
            .unwrap();

        let manager = ExportManager::new(store, temp_dir.path().join("backups"));
        (manager, temp_dir)
    }

    #[test]
    fn test_export_creates_snapshot_dir() {
        let (manager, _temp) = create_test_export();

        let report = manager.export().unwrap();
        assert!(report.path.exists());
        assert!(report.snapshot_name.starts_with("snapshot-"));
    }

    #[test]
    fn test_export_writes_all_collection_files() {
        let (manager, _temp) = create_test_export();

        let report = manager.export().unwrap();

        // Empty collections get a file too
        for spec in &COLLECTIONS {
            assert!(
                report.path.join(spec.file_name()).exists(),
                "missing {}",
                spec.file_name()
            );
        }
    }

    #[test]
    fn test_manifest_total_matches_sum_of_counts() {
        let (manager, _temp) = create_test_export();

        let report = manager.export().unwrap();
        let manifest = Manifest::load(&report.path).unwrap();

        let sum: u64 = report.collection_counts.iter().map(|(_, n)| n).sum();
        assert_eq!(manifest.total_documents, sum);
        assert_eq!(manifest.total_documents, 3);
        assert_eq!(report.total_documents, 3);
    }

    #[test]
    fn test_manifest_lists_all_collections() {
        let (manager, _temp) = create_test_export();

        let report = manager.export().unwrap();
        let manifest = Manifest::load(&report.path).unwrap();

        assert_eq!(manifest.collections.len(), COLLECTIONS.len());
        assert!(manifest.collections.contains(&"daybooks".to_string()));
    }

    #[test]
    fn test_exported_documents_match_store() {
        let (manager, _temp) = create_test_export();

        let report = manager.export().unwrap();
        let docs = crate::store::file_io::read_documents(report.path.join("users.json")).unwrap();

        assert_eq!(docs, vec![json!({"_id": "u1", "name": "asha"})]);
    }
}
