//! Download module for driving the external video download tool.
//!
//! This module provides:
//! - The per-record download orchestrator
//! - Durable completion markers for idempotent re-runs
//! - The external process runner seam
//! - Cooperative cancellation
//! - Outcome aggregation

pub mod cancel;
pub mod invocation;
pub mod marker;
pub mod orchestrator;
pub mod outcome;
pub mod runner;

pub use cancel::{install_ctrl_c_handler, CancellationGate};
pub use invocation::{build_download_args, DownloaderAuth};
pub use marker::CompletionMarker;
pub use orchestrator::run_downloads;
pub use outcome::{DownloadOutcome, DownloadStatus, DownloadSummary};
pub use runner::{ProcessRunner, YtDlpRunner};
