//! External download tool invocation.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Downloader binaries we accept, in preference order.
const DOWNLOADER_CANDIDATES: [&str; 2] = ["yt-dlp", "youtube-dl"];

/// Runs the external download tool, one URL per invocation.
///
/// The tool is always invoked with an explicit argument list, never through
/// a shell; only its exit status is observed.
#[async_trait]
pub trait ProcessRunner {
    /// Verify the tool resolves on this system. Called once, before any
    /// record is processed.
    fn ensure_available(&self) -> Result<()>;

    /// Run the tool to completion. `Ok(true)` means a success exit status.
    async fn run(&self, args: &[String]) -> Result<bool>;
}

/// The real runner: resolves yt-dlp (or youtube-dl) from PATH.
#[derive(Debug, Default)]
pub struct YtDlpRunner;

impl YtDlpRunner {
    pub fn new() -> Self {
        Self
    }

    fn resolve_program() -> Result<PathBuf> {
        DOWNLOADER_CANDIDATES
            .iter()
            .find_map(|candidate| which::which(candidate).ok())
            .ok_or(Error::DownloaderNotFound)
    }
}

#[async_trait]
impl ProcessRunner for YtDlpRunner {
    fn ensure_available(&self) -> Result<()> {
        Self::resolve_program().map(|_| ())
    }

    async fn run(&self, args: &[String]) -> Result<bool> {
        let program = Self::resolve_program()?;
        tracing::debug!("Executing: {} {}", program.display(), args.join(" "));

        let status = Command::new(program).args(args).status().await?;
        Ok(status.success())
    }
}
