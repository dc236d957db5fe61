//! ledgersnap - Snapshot backup and restore for a personal finance record store
//!
//! The live store holds a fixed set of collections (users, bank accounts,
//! credit cards, loans, transactions, budgets, day-books, journals, stocks,
//! SIPs), each a sequence of schema-less JSON documents. ledgersnap exports
//! them into timestamped snapshot directories and restores them back,
//! collection by collection.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and configuration
//! - `error`: Custom error types
//! - `collections`: Central registry of collection descriptors
//! - `store`: Live store trait and JSON-file backend
//! - `snapshot`: Export, import, manifest, and snapshot catalog
//! - `cli`: Command handlers
//! - `display`: Terminal formatting helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use ledgersnap::config::LedgerPaths;
//! use ledgersnap::snapshot::{AutoConfirm, ExportManager, ImportManager};
//! use ledgersnap::store::JsonStore;
//!
//! let paths = LedgerPaths::new()?;
//! let store = JsonStore::open(paths.data_dir())?;
//! let report = ExportManager::new(store, paths.backups_dir()).export()?;
//!
//! let store = JsonStore::open(paths.data_dir())?;
//! let mut import = ImportManager::new(store, paths.backups_dir());
//! import.restore(&report.snapshot_name, &AutoConfirm)?;
//! ```

pub mod cli;
pub mod collections;
pub mod config;
pub mod display;
pub mod error;
pub mod snapshot;
pub mod store;

pub use error::SnapshotError;
