//! Snapshot exchanger for ledgersnap
//!
//! A snapshot is a timestamped directory under the backups root holding one
//! JSON array file per collection plus a `metadata.json` manifest. Snapshots
//! are written once and never mutated.
//!
//! # Architecture
//!
//! - `ExportManager`: serializes every live collection into a new snapshot
//!   directory and writes the manifest last
//! - `ImportManager`: destructively replaces live collections from a snapshot,
//!   collection by collection, behind a confirmation gate
//! - `catalog`: enumerates existing snapshots for listing and usage help
//!
//! # Failure model
//!
//! Export is all-or-nothing in effect: an error aborts the run and the
//! half-written directory is recognizable by its missing manifest. Import is
//! deliberately not transactional; each collection's error is recorded and
//! the loop continues, so a partially-restored store is an accepted outcome.

pub mod catalog;
pub mod export;
pub mod import;
pub mod manifest;

pub use catalog::{list_snapshots, SnapshotInfo};
pub use export::{ExportManager, ExportReport};
pub use import::{
    AutoConfirm, CollectionOutcome, CollectionReport, CountdownGate, ImportManager, ImportReport,
    RestoreGate,
};
pub use manifest::Manifest;
