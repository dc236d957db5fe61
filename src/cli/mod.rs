//! CLI command handlers
//!
//! Thin layer between clap and the snapshot managers: builds the store and
//! managers from the resolved paths, runs the operation, and prints the
//! report.

mod snapshot;

pub use snapshot::{
    handle_export_command, handle_import_command, handle_info_command, handle_list_command,
};
