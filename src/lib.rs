//! Vimeo Exporter - export an account's video metadata and drive downloads
//!
//! This library exports every video's metadata from a Vimeo account into a
//! durable CSV file, then optionally invokes an external download tool
//! (yt-dlp/youtube-dl) once per video.
//!
//! # Features
//!
//! - Walks the cursor-linked video listing page by page
//! - Validates each entry at the normalization boundary
//! - Streams rows to CSV, flushed per row, so interrupted exports stay valid
//! - Skips videos a previous run already fetched (durable completion markers)
//! - Cooperative Ctrl-C handling: finishes the in-flight download, then stops
//!
//! # Example
//!
//! ```no_run
//! use vimeo_exporter::{api::VimeoApi, export::{harvest, CsvSink}};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = VimeoApi::new("token".to_string())?;
//!     let user = api.get_user("alice").await?;
//!     let mut sink = CsvSink::create(std::path::Path::new("export.csv"))?;
//!     let first = user.metadata.connections.videos.uri.clone();
//!     let total = user.metadata.connections.videos.total;
//!     let records = harvest(&api, first, None, total, &mut sink).await?;
//!     println!("{} records exported", records.len());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod download;
pub mod error;
pub mod export;
pub mod fs;
pub mod output;

// Re-exports for convenience
pub use api::{PagingSource, VimeoApi};
pub use download::{
    run_downloads, CancellationGate, CompletionMarker, DownloadOutcome, DownloadStatus,
    DownloadSummary, DownloaderAuth, ProcessRunner, YtDlpRunner,
};
pub use error::{Error, Result};
pub use export::{harvest, CsvSink, MetadataRecord, PageWalker};
