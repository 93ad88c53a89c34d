//! Durable completion markers.

use std::fs::File;
use std::path::PathBuf;

use crate::error::Result;

/// Name of the marker file inside a video's download directory.
const COMPLETION_FILE: &str = ".complete";

/// Filesystem-backed idempotency check keyed by `(upload_date, id)`.
///
/// A marker is set only after the external tool exits successfully, so
/// re-runs skip finished items and retry everything else.
#[derive(Debug, Clone)]
pub struct CompletionMarker {
    videos_dir: PathBuf,
}

impl CompletionMarker {
    pub fn new(videos_dir: PathBuf) -> Self {
        Self { videos_dir }
    }

    /// Directory the external tool downloads this item into.
    pub fn item_dir(&self, upload_date: &str, id: &str) -> PathBuf {
        self.videos_dir.join(format!("{}-{}", upload_date, id))
    }

    fn marker_path(&self, upload_date: &str, id: &str) -> PathBuf {
        self.item_dir(upload_date, id).join(COMPLETION_FILE)
    }

    /// Has this item already been downloaded by a previous run?
    pub fn is_complete(&self, upload_date: &str, id: &str) -> bool {
        self.marker_path(upload_date, id).exists()
    }

    /// Record a successful download.
    pub fn mark_complete(&self, upload_date: &str, id: &str) -> Result<()> {
        let path = self.marker_path(upload_date, id);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        File::create(&path)?;
        Ok(())
    }
}
