//! Snapshot import
//!
//! Destructively replaces live collections from a snapshot directory. For
//! each collection whose file is present the live contents are truncated and
//! repopulated verbatim; collections without a file are left untouched.
//!
//! Per-collection failures are recorded and the loop continues, so a
//! partially-restored store is a reachable outcome. There is no
//! cross-collection transaction and no rollback; the confirmation gate is the
//! only brake before the first destructive write.

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use crate::collections::COLLECTIONS;
use crate::error::{SnapResult, SnapshotError};
use crate::snapshot::manifest::Manifest;
use crate::store::file_io::read_documents_required;
use crate::store::LiveStore;

/// Decides whether a destructive restore may proceed.
///
/// Injected by the caller so tests and `--yes` runs skip the delay entirely.
pub trait RestoreGate {
    /// Return true to proceed with the restore
    fn confirm(&self, snapshot_name: &str, manifest: Option<&Manifest>) -> bool;
}

/// Production gate: prints a warning, then counts down a fixed delay so the
/// operator can Ctrl-C before anything is deleted.
pub struct CountdownGate {
    delay: Duration,
}

impl CountdownGate {
    /// Gate with the default 5 second delay
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(5))
    }

    /// Gate with a custom delay
    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for CountdownGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RestoreGate for CountdownGate {
    fn confirm(&self, snapshot_name: &str, manifest: Option<&Manifest>) -> bool {
        println!("WARNING: restoring '{}' will REPLACE live data!", snapshot_name);
        match manifest {
            Some(m) => println!("Snapshot: {}", m.summary()),
            None => println!("Snapshot has no manifest; proceeding without summary."),
        }

        let mut remaining = self.delay.as_secs();
        while remaining > 0 {
            print!("\rStarting in {}s... press Ctrl-C to abort ", remaining);
            let _ = std::io::stdout().flush();
            std::thread::sleep(Duration::from_secs(1));
            remaining -= 1;
        }
        println!();

        true
    }
}

/// Gate that always proceeds; backs `--yes` and tests
pub struct AutoConfirm;

impl RestoreGate for AutoConfirm {
    fn confirm(&self, _snapshot_name: &str, _manifest: Option<&Manifest>) -> bool {
        true
    }
}

/// What happened to one collection during a restore
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionOutcome {
    /// Collection was truncated and repopulated with this many documents
    Restored(u64),
    /// No file in the snapshot; live data left untouched
    Skipped,
    /// Something failed while restoring; live data may be partially replaced
    Failed(String),
}

/// Per-collection entry in an import report
#[derive(Debug, Clone)]
pub struct CollectionReport {
    /// Collection name
    pub name: &'static str,
    /// Outcome for this collection
    pub outcome: CollectionOutcome,
}

/// Result of an import run
#[derive(Debug)]
pub struct ImportReport {
    /// Name of the restored snapshot
    pub snapshot_name: String,
    /// Manifest, when one was present and parsable
    pub manifest: Option<Manifest>,
    /// Per-collection outcomes, in registry order
    pub collections: Vec<CollectionReport>,
    /// Documents restored across all collections
    pub total_restored: u64,
}

impl ImportReport {
    /// Number of collections that were restored
    pub fn restored_count(&self) -> usize {
        self.collections
            .iter()
            .filter(|c| matches!(c.outcome, CollectionOutcome::Restored(_)))
            .count()
    }

    /// Number of collections skipped for lack of a snapshot file
    pub fn skipped_count(&self) -> usize {
        self.collections
            .iter()
            .filter(|c| c.outcome == CollectionOutcome::Skipped)
            .count()
    }

    /// Number of collections that failed
    pub fn failed_count(&self) -> usize {
        self.collections
            .iter()
            .filter(|c| matches!(c.outcome, CollectionOutcome::Failed(_)))
            .count()
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Restored {} document(s) across {} collection(s) ({} skipped, {} failed)",
            self.total_restored,
            self.restored_count(),
            self.skipped_count(),
            self.failed_count()
        )
    }
}

/// Restores the live store from snapshots
pub struct ImportManager<S: LiveStore> {
    store: S,
    backups_root: PathBuf,
}

impl<S: LiveStore> ImportManager<S> {
    /// Create a new ImportManager
    pub fn new(store: S, backups_root: PathBuf) -> Self {
        Self {
            store,
            backups_root,
        }
    }

    /// Restore the live store from a named snapshot
    ///
    /// Fatal errors (snapshot directory missing) abort before any mutation.
    /// Returns `Ok(None)` when the gate declines, with the store untouched.
    /// Per-collection errors never propagate; they land in the report and the
    /// run still counts as a success.
    pub fn restore(
        &mut self,
        snapshot_name: &str,
        gate: &dyn RestoreGate,
    ) -> SnapResult<Option<ImportReport>> {
        let snapshot_dir = self.backups_root.join(snapshot_name);
        if !snapshot_dir.is_dir() {
            return Err(SnapshotError::snapshot_not_found(snapshot_name));
        }

        // Manifest is advisory only; a snapshot without one still restores
        let manifest = Manifest::load(&snapshot_dir).ok();

        if !gate.confirm(snapshot_name, manifest.as_ref()) {
            return Ok(None);
        }

        let mut collections = Vec::with_capacity(COLLECTIONS.len());
        let mut total_restored = 0u64;

        for spec in &COLLECTIONS {
            let file = snapshot_dir.join(spec.file_name());

            let outcome = if !file.exists() {
                CollectionOutcome::Skipped
            } else {
                match self.restore_collection(spec, &file) {
                    Ok(count) => {
                        total_restored += count;
                        CollectionOutcome::Restored(count)
                    }
                    Err(e) => {
                        eprintln!("Error restoring {}: {}", spec.name, e);
                        CollectionOutcome::Failed(e.to_string())
                    }
                }
            };

            collections.push(CollectionReport {
                name: spec.name,
                outcome,
            });
        }

        Ok(Some(ImportReport {
            snapshot_name: snapshot_name.to_string(),
            manifest,
            collections,
            total_restored,
        }))
    }

    /// Truncate one live collection and repopulate it from a snapshot file
    fn restore_collection(
        &mut self,
        spec: &crate::collections::CollectionSpec,
        file: &std::path::Path,
    ) -> SnapResult<u64> {
        // Whole collection is buffered; snapshots are sized for that
        let docs = read_documents_required(file)?;

        self.store.delete_all(spec)?;

        if docs.is_empty() {
            return Ok(0);
        }

        self.store.insert_many(spec, &docs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collections;
    use crate::store::file_io::write_json_atomic;
    use crate::store::{Document, JsonStore};
    use chrono::Utc;
    use serde_json::json;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    /// Gate that always declines
    struct DenyGate;

    impl RestoreGate for DenyGate {
        fn confirm(&self, _snapshot_name: &str, _manifest: Option<&Manifest>) -> bool {
            false
        }
    }

    fn write_snapshot_file(dir: &Path, collection: &str, docs: &[Document]) {
        write_json_atomic(dir.join(format!("{}.json", collection)), &docs.to_vec()).unwrap();
    }

    fn create_test_import(snapshot_name: &str) -> (ImportManager<JsonStore>, PathBuf, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStore::open(temp_dir.path().join("data")).unwrap();
        let backups_root = temp_dir.path().join("backups");

        let snapshot_dir = backups_root.join(snapshot_name);
        fs::create_dir_all(&snapshot_dir).unwrap();

        let manager = ImportManager::new(store, backups_root);
        (manager, snapshot_dir, temp_dir)
    }

    fn store_contents(temp: &TempDir, collection: &str) -> Vec<Document> {
        let store = JsonStore::open(temp.path().join("data")).unwrap();
        store.read_all(collections::find(collection).unwrap()).unwrap()
    }

    fn seed_store(temp: &TempDir, collection: &str, docs: &[Document]) {
        let mut store = JsonStore::open(temp.path().join("data")).unwrap();
        store
            .insert_many(collections::find(collection).unwrap(), docs)
            .unwrap();
    }

    #[test]
    fn test_missing_snapshot_dir_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonStore::open(temp_dir.path().join("data")).unwrap();
        let mut manager = ImportManager::new(store, temp_dir.path().join("backups"));

        let err = manager.restore("no-such-snapshot", &AutoConfirm).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_restore_replaces_existing_contents() {
        let (mut manager, snapshot_dir, temp) = create_test_import("snap");
        seed_store(&temp, "loans", &[json!({"_id": "old1"}), json!({"_id": "old2"})]);

        let new_docs = vec![json!({"_id": "l9", "principal": 500000})];
        write_snapshot_file(&snapshot_dir, "loans", &new_docs);

        let report = manager.restore("snap", &AutoConfirm).unwrap().unwrap();

        assert_eq!(report.total_restored, 1);
        assert_eq!(store_contents(&temp, "loans"), new_docs);
    }

    #[test]
    fn test_absent_collections_left_untouched() {
        let (mut manager, snapshot_dir, temp) = create_test_import("snap");
        let kept = vec![json!({"_id": "s1", "symbol": "INFY"})];
        seed_store(&temp, "stocks", &kept);

        write_snapshot_file(&snapshot_dir, "users", &[json!({"_id": "u1"})]);

        let report = manager.restore("snap", &AutoConfirm).unwrap().unwrap();

        assert_eq!(store_contents(&temp, "stocks"), kept);
        let stocks = report
            .collections
            .iter()
            .find(|c| c.name == "stocks")
            .unwrap();
        assert_eq!(stocks.outcome, CollectionOutcome::Skipped);
    }

    #[test]
    fn test_empty_snapshot_file_truncates() {
        let (mut manager, snapshot_dir, temp) = create_test_import("snap");
        seed_store(&temp, "budgets", &[json!({"_id": "b1"})]);

        write_snapshot_file(&snapshot_dir, "budgets", &[]);

        let report = manager.restore("snap", &AutoConfirm).unwrap().unwrap();

        assert!(store_contents(&temp, "budgets").is_empty());
        let budgets = report
            .collections
            .iter()
            .find(|c| c.name == "budgets")
            .unwrap();
        assert_eq!(budgets.outcome, CollectionOutcome::Restored(0));
    }

    #[test]
    fn test_import_is_idempotent() {
        let (mut manager, snapshot_dir, temp) = create_test_import("snap");

        let docs = vec![json!({"_id": "j1"}), json!({"_id": "j2"})];
        write_snapshot_file(&snapshot_dir, "journals", &docs);

        manager.restore("snap", &AutoConfirm).unwrap().unwrap();
        let report = manager.restore("snap", &AutoConfirm).unwrap().unwrap();

        assert_eq!(report.total_restored, 2);
        assert_eq!(store_contents(&temp, "journals"), docs);
    }

    #[test]
    fn test_corrupt_file_does_not_stop_the_run() {
        let (mut manager, snapshot_dir, temp) = create_test_import("snap");

        fs::write(snapshot_dir.join("credit_cards.json"), "{not json").unwrap();
        write_snapshot_file(&snapshot_dir, "sips", &[json!({"_id": "sip1"})]);

        let report = manager.restore("snap", &AutoConfirm).unwrap().unwrap();

        assert_eq!(report.failed_count(), 1);
        assert_eq!(report.total_restored, 1);
        assert_eq!(store_contents(&temp, "sips"), vec![json!({"_id": "sip1"})]);

        let cards = report
            .collections
            .iter()
            .find(|c| c.name == "credit_cards")
            .unwrap();
        assert!(matches!(cards.outcome, CollectionOutcome::Failed(_)));
    }

    #[test]
    fn test_corrupt_file_leaves_that_collection_unmodified() {
        let (mut manager, snapshot_dir, temp) = create_test_import("snap");
        let kept = vec![json!({"_id": "c1"})];
        seed_store(&temp, "credit_cards", &kept);

        // Parse fails before the truncate step, so live data survives
        fs::write(snapshot_dir.join("credit_cards.json"), "{not json").unwrap();

        manager.restore("snap", &AutoConfirm).unwrap().unwrap();

        assert_eq!(store_contents(&temp, "credit_cards"), kept);
    }

    #[test]
    fn test_empty_snapshot_restores_zero() {
        let (mut manager, _snapshot_dir, _temp) = create_test_import("snap");

        let report = manager.restore("snap", &AutoConfirm).unwrap().unwrap();

        assert_eq!(report.total_restored, 0);
        assert_eq!(report.skipped_count(), COLLECTIONS.len());
    }

    #[test]
    fn test_declined_gate_touches_nothing() {
        let (mut manager, snapshot_dir, temp) = create_test_import("snap");
        let kept = vec![json!({"_id": "u1"})];
        seed_store(&temp, "users", &kept);

        write_snapshot_file(&snapshot_dir, "users", &[json!({"_id": "u2"})]);

        let result = manager.restore("snap", &DenyGate).unwrap();

        assert!(result.is_none());
        assert_eq!(store_contents(&temp, "users"), kept);
    }

    #[test]
    fn test_manifest_surfaced_in_report() {
        let (mut manager, snapshot_dir, _temp) = create_test_import("snap");

        let manifest = Manifest {
            date: Utc::now(),
            total_documents: 7,
            collections: vec!["users".into()],
        };
        manifest.save(&snapshot_dir).unwrap();

        let report = manager.restore("snap", &AutoConfirm).unwrap().unwrap();
        assert_eq!(report.manifest.unwrap().total_documents, 7);
    }

    #[test]
    fn test_missing_manifest_is_non_fatal() {
        let (mut manager, snapshot_dir, _temp) = create_test_import("snap");
        write_snapshot_file(&snapshot_dir, "users", &[json!({"_id": "u1"})]);

        let report = manager.restore("snap", &AutoConfirm).unwrap().unwrap();

        assert!(report.manifest.is_none());
        assert_eq!(report.total_restored, 1);
    }

    #[test]
    fn test_report_summary() {
        let report = ImportReport {
            snapshot_name: "snap".into(),
            manifest: None,
            collections: vec![
                CollectionReport {
                    name: "users",
                    outcome: CollectionOutcome::Restored(3),
                },
                CollectionReport {
                    name: "loans",
                    outcome: CollectionOutcome::Skipped,
                },
                CollectionReport {
                    name: "sips",
                    outcome: CollectionOutcome::Failed("boom".into()),
                },
            ],
            total_restored: 3,
        };

        let summary = report.summary();
        assert!(summary.contains("3 document(s)"));
        assert!(summary.contains("1 skipped"));
        assert!(summary.contains("1 failed"));
    }
}
