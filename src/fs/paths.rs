//! Path and directory management.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;

/// Per-account output directory under the output root.
pub fn account_dir(output_root: &Path, username: &str) -> PathBuf {
    output_root.join(username)
}

/// Directory all downloaded videos land under.
pub fn videos_dir(account_dir: &Path) -> PathBuf {
    account_dir.join("videos")
}

/// CSV export path: `vimeo_export_<account>_<timestamp>.csv`. The ISO 8601
/// timestamp is rendered without colons so it is filename-safe.
pub fn csv_export_path(account_dir: &Path, username: &str, now: DateTime<Local>) -> PathBuf {
    let stamp = now.format("%Y-%m-%dT%H%M%S%z");
    account_dir.join(format!("vimeo_export_{}_{}.csv", username, stamp))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
