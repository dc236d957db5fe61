//! Display formatting for terminal output
//!
//! Provides utilities for formatting snapshots and reports for terminal
//! display.

use crate::snapshot::{CollectionOutcome, ImportReport, SnapshotInfo};

/// Format a list of snapshots, newest first, one per line
pub fn format_snapshot_list(snapshots: &[SnapshotInfo]) -> String {
    if snapshots.is_empty() {
        return "No snapshots found.".to_string();
    }

    let mut output = String::new();
    for (i, snapshot) in snapshots.iter().enumerate() {
        let age = chrono::Utc::now().signed_duration_since(snapshot.created_at);
        output.push_str(&format!(
            "  {}. {} ({} ago, {})\n",
            i + 1,
            snapshot.name,
            format_duration(age),
            format_size(snapshot.size_bytes),
        ));
    }
    output
}

/// Format per-collection import outcomes as aligned rows
pub fn format_import_report(report: &ImportReport) -> String {
    let name_width = report
        .collections
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(10);

    let mut output = String::new();
    for collection in &report.collections {
        let status = match &collection.outcome {
            CollectionOutcome::Restored(n) => format!("{} document(s)", n),
            CollectionOutcome::Skipped => "skipped (no file)".to_string(),
            CollectionOutcome::Failed(msg) => format!("FAILED: {}", msg),
        };
        output.push_str(&format!(
            "  {:<name_width$}  {}\n",
            collection.name,
            status,
            name_width = name_width,
        ));
    }
    output
}

/// Format a duration in human-readable form
pub fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d", days);
    }

    let months = days / 30;
    format!("{}mo", months)
}

/// Format a file size in human-readable form
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
