//! Custom error types for ledgersnap
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Errors fall into two tiers: fatal errors propagate out of `main` and abort
//! the run before any collection is mutated, while per-collection errors
//! during a restore are caught by the import loop and recorded in the report
//! instead of being propagated.

use thiserror::Error;

/// The main error type for ledgersnap operations
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Live-store errors (reading, truncating, or repopulating a collection)
    #[error("Store error: {0}")]
    Store(String),

    /// Snapshot directory or manifest errors
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl SnapshotError {
    /// Create a "not found" error for snapshot directories
    pub fn snapshot_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Snapshot",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for collections
    pub fn collection_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Collection",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for SnapshotError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledgersnap operations
pub type SnapResult<T> = Result<T, SnapshotError>;
