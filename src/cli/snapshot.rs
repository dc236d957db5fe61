//! Snapshot CLI commands
//!
//! Implements the export, import, list, and info commands.

use crate::config::LedgerPaths;
use crate::display::{format_import_report, format_size, format_snapshot_list};
use crate::error::SnapResult;
use crate::snapshot::{
    list_snapshots, AutoConfirm, CountdownGate, ExportManager, ImportManager, Manifest,
    RestoreGate,
};
use crate::store::JsonStore;

/// Create a new snapshot of the live store
pub fn handle_export_command(paths: &LedgerPaths) -> SnapResult<()> {
    let store = JsonStore::open(paths.data_dir())?;
    let manager = ExportManager::new(store, paths.backups_dir());

    println!("Creating snapshot...");
    let report = manager.export()?;

    println!("Snapshot created: {}", report.snapshot_name);
    println!("Location: {}", report.path.display());
    println!();
    for (name, count) in &report.collection_counts {
        println!("  {:<14} {} document(s)", name, count);
    }
    println!();
    println!("Total: {} document(s)", report.total_documents);

    Ok(())
}

/// Restore the live store from a named snapshot
///
/// Returns after printing the report; per-collection failures are part of a
/// normal completion, not an error.
pub fn handle_import_command(paths: &LedgerPaths, snapshot: &str, yes: bool) -> SnapResult<()> {
    let store = JsonStore::open(paths.data_dir())?;
    let mut manager = ImportManager::new(store, paths.backups_dir());

    let gate: Box<dyn RestoreGate> = if yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(CountdownGate::new())
    };

    let report = match manager.restore(snapshot, gate.as_ref())? {
        Some(report) => report,
        None => {
            println!("Restore cancelled.");
            return Ok(());
        }
    };

    println!("Restore complete: {}", report.snapshot_name);
    println!();
    print!("{}", format_import_report(&report));
    println!();
    println!("{}", report.summary());

    Ok(())
}

/// List all snapshots under the backups root, newest first
pub fn handle_list_command(paths: &LedgerPaths, verbose: bool) -> SnapResult<()> {
    let snapshots = list_snapshots(&paths.backups_dir())?;

    if snapshots.is_empty() {
        println!("No snapshots found.");
        println!("Create one with: ledgersnap export");
        return Ok(());
    }

    println!("Available Snapshots");
    println!("===================");
    println!();
    print!("{}", format_snapshot_list(&snapshots));

    if verbose {
        println!();
        for snapshot in &snapshots {
            match Manifest::load(&snapshot.path) {
                Ok(manifest) => println!("  {}: {}", snapshot.name, manifest.summary()),
                Err(_) => println!("  {}: no manifest", snapshot.name),
            }
        }
    }

    println!();
    println!("Total: {} snapshot(s)", snapshots.len());

    Ok(())
}

/// Show the manifest summary for one snapshot
pub fn handle_info_command(paths: &LedgerPaths, snapshot: &str) -> SnapResult<()> {
    let snapshot_dir = paths.snapshot_dir(snapshot);
    if !snapshot_dir.is_dir() {
        return Err(crate::error::SnapshotError::snapshot_not_found(snapshot));
    }

    println!("Snapshot Details");
    println!("================");
    println!("Name: {}", snapshot);
    println!("Path: {}", snapshot_dir.display());

    match Manifest::load(&snapshot_dir) {
        Ok(manifest) => {
            println!(
                "Created: {}",
                manifest.date.format("%Y-%m-%d %H:%M:%S UTC")
            );
            println!("Documents: {}", manifest.total_documents);
            println!("Collections: {}", manifest.collections.join(", "));
        }
        Err(_) => {
            println!("No manifest found (incomplete or pre-manifest snapshot).");
        }
    }

    let mut total_size = 0u64;
    if let Ok(entries) = std::fs::read_dir(&snapshot_dir) {
        for entry in entries.flatten() {
            if let Ok(metadata) = entry.metadata() {
                if metadata.is_file() {
                    total_size += metadata.len();
                }
            }
        }
    }
    println!("Size: {}", format_size(total_size));

    Ok(())
}
