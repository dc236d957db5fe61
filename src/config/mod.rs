//! Configuration for ledgersnap
//!
//! All configuration is resolved once at process start into a [`LedgerPaths`]
//! value and passed down explicitly; nothing below the entry point reads the
//! process environment.

pub mod paths;

pub use paths::LedgerPaths;
