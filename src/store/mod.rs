//! Live store access for ledgersnap
//!
//! The live store is the record database being backed up or restored into.
//! Collections hold opaque documents; nothing in this layer knows or checks
//! the domain schema of a bank account versus a SIP. Documents are plain
//! `serde_json::Value`s so embedded ids and unknown fields round-trip
//! verbatim.

pub mod file_io;
pub mod json_store;

pub use json_store::JsonStore;

use crate::collections::CollectionSpec;
use crate::error::SnapResult;

/// One opaque record in a collection
pub type Document = serde_json::Value;

/// Access to the live record store, one collection at a time.
///
/// The snapshot exchanger only needs three operations; keeping them behind a
/// trait lets tests substitute a failing store and keeps the exchanger
/// independent of the storage backend.
pub trait LiveStore {
    /// Read every document in a collection, in stored order
    fn read_all(&self, spec: &CollectionSpec) -> SnapResult<Vec<Document>>;

    /// Remove every document in a collection, returning the removed count
    fn delete_all(&mut self, spec: &CollectionSpec) -> SnapResult<u64>;

    /// Append documents to a collection verbatim, returning the inserted count
    fn insert_many(&mut self, spec: &CollectionSpec, docs: &[Document]) -> SnapResult<u64>;
}
