//! Snapshot catalog
//!
//! Enumerates snapshot directories under the backups root for the `list`
//! command and for the usage help printed when `import` is called without a
//! snapshot name.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{SnapResult, SnapshotError};
use crate::snapshot::manifest::Manifest;

/// Metadata about one snapshot directory
#[derive(Debug, Clone)]
pub struct SnapshotInfo {
    /// Directory name under the backups root
    pub name: String,
    /// Full path to the snapshot directory
    pub path: PathBuf,
    /// When the snapshot was created
    pub created_at: DateTime<Utc>,
    /// Total size of all files in the snapshot
    pub size_bytes: u64,
}

/// List all snapshots under the backups root, newest first
///
/// A missing backups root lists as empty. Directories that don't follow the
/// `snapshot-YYYYMMDD-HHMMSS` naming convention fall back to the manifest
/// date and are skipped if neither source yields a timestamp.
pub fn list_snapshots(backups_root: &Path) -> SnapResult<Vec<SnapshotInfo>> {
    if !backups_root.exists() {
        return Ok(Vec::new());
    }

    let mut snapshots = Vec::new();

    for entry in fs::read_dir(backups_root)
        .map_err(|e| SnapshotError::Io(format!("Failed to read backups root: {}", e)))?
    {
        let entry = entry
            .map_err(|e| SnapshotError::Io(format!("Failed to read directory entry: {}", e)))?;

        let path = entry.path();
        if path.is_dir() {
            if let Some(info) = parse_snapshot_info(&path) {
                snapshots.push(info);
            }
        }
    }

    // Newest first
    snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    Ok(snapshots)
}

/// Build a SnapshotInfo from a snapshot directory, if it looks like one
fn parse_snapshot_info(path: &Path) -> Option<SnapshotInfo> {
    let name = path.file_name()?.to_string_lossy().to_string();

    let created_at = name
        .strip_prefix("snapshot-")
        .and_then(parse_snapshot_timestamp)
        .or_else(|| Manifest::load(path).ok().map(|m| m.date))?;

    Some(SnapshotInfo {
        name,
        path: path.to_path_buf(),
        created_at,
        size_bytes: dir_size(path),
    })
}

/// Sum the sizes of the regular files directly inside a snapshot directory
fn dir_size(path: &Path) -> u64 {
    fs::read_dir(path)
        .map(|entries| {
            entries
                .flatten()
                .filter_map(|e| e.metadata().ok())
                .filter(|m| m.is_file())
                .map(|m| m.len())
                .sum()
        })
        .unwrap_or(0)
}

/// Parse a snapshot timestamp from the directory name date part
fn parse_snapshot_timestamp(date_str: &str) -> Option<DateTime<Utc>> {
    // Expected format: YYYYMMDD-HHMMSS or YYYYMMDD-HHMMSS-mmm (with milliseconds)
    let parts: Vec<&str> = date_str.split('-').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let date_part = parts[0];
    let time_part = parts[1];
    let millis: u32 = if parts.len() == 3 {
        parts[2].parse().unwrap_or(0)
    } else {
        0
    };

    if date_part.len() != 8 || time_part.len() != 6 {
        return None;
    }

    let year: i32 = date_part[0..4].parse().ok()?;
    let month: u32 = date_part[4..6].parse().ok()?;
    let day: u32 = date_part[6..8].parse().ok()?;
    let hour: u32 = time_part[0..2].parse().ok()?;
    let minute: u32 = time_part[2..4].parse().ok()?;
    let second: u32 = time_part[4..6].parse().ok()?;

    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = chrono::NaiveTime::from_hms_milli_opt(hour, minute, second, millis)?;
    let datetime = chrono::NaiveDateTime::new(date, time);

    Some(DateTime::from_naive_utc_and_offset(datetime, Utc))
}
