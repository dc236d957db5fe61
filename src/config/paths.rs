//! Path management for ledgersnap
//!
//! Provides XDG-compliant path resolution for the live store and the backups
//! root.
//!
//! ## Path Resolution Order
//!
//! 1. `LEDGERSNAP_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/ledgersnap` or `~/.config/ledgersnap`
//! 3. Windows: `%APPDATA%\ledgersnap`

use std::path::PathBuf;

use crate::collections::CollectionSpec;
use crate::error::SnapshotError;

/// Manages all paths used by ledgersnap
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all ledgersnap data
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// Path resolution:
    /// 1. `LEDGERSNAP_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/ledgersnap` or `~/.config/ledgersnap`
    /// 3. Windows: `%APPDATA%\ledgersnap`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, SnapshotError> {
        let base_dir = if let Ok(custom) = std::env::var("LEDGERSNAP_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/ledgersnap/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the live store directory (~/.config/ledgersnap/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backups root (~/.config/ledgersnap/backups/)
    pub fn backups_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the live store file for one collection
    pub fn collection_file(&self, spec: &CollectionSpec) -> PathBuf {
        self.data_dir().join(spec.file_name())
    }

    /// Get the directory for a named snapshot under the backups root
    pub fn snapshot_dir(&self, snapshot_name: &str) -> PathBuf {
        self.backups_dir().join(snapshot_name)
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/ledgersnap/)
    /// - Live store directory (~/.config/ledgersnap/data/)
    /// - Backups root (~/.config/ledgersnap/backups/)
    pub fn ensure_directories(&self) -> Result<(), SnapshotError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SnapshotError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| SnapshotError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backups_dir())
            .map_err(|e| SnapshotError::Io(format!("Failed to create backups directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SnapshotError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| SnapshotError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("ledgersnap"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SnapshotError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| SnapshotError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("ledgersnap"))
}
