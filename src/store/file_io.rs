//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::SnapshotError;
use crate::store::Document;

/// Read a JSON array of documents, returning an empty vec if the file doesn't exist
pub fn read_documents<P: AsRef<Path>>(path: P) -> Result<Vec<Document>, SnapshotError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    read_documents_required(path)
}

/// Read a JSON array of documents, returning an error if the file doesn't exist
pub fn read_documents_required<P: AsRef<Path>>(path: P) -> Result<Vec<Document>, SnapshotError> {
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| SnapshotError::Io(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| SnapshotError::Json(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Write JSON to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, preventing corruption on crashes or power failures. Used for both
/// collection arrays and the snapshot manifest.
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), SnapshotError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SnapshotError::Io(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file lives in the same directory so the rename stays atomic
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| SnapshotError::Io(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| SnapshotError::Json(format!("Failed to serialize data: {}", e)))?;

    writer
        .flush()
        .map_err(|e| SnapshotError::Io(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| SnapshotError::Io(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SnapshotError::Io(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
