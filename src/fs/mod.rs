//! Filesystem module.
//!
//! Provides path layout for the export tree and directory management.

pub mod paths;

pub use paths::{account_dir, csv_export_path, ensure_dir, videos_dir};
