//! Command-line argument definitions using clap.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::download::DownloaderAuth;
use crate::error::{Error, Result};

/// Fallback token file read when --auth-token is not supplied.
const AUTH_TOKEN_FILE: &str = ".auth_token";

/// Vimeo account metadata exporter CLI.
#[derive(Parser, Debug)]
#[command(
    name = "vimeo-exporter",
    version,
    about = "Export Vimeo account video metadata to CSV, optionally downloading the videos",
    long_about = "Exports every video's metadata from a Vimeo account into a CSV file.\n\n\
                  With --download, also drives yt-dlp/youtube-dl once per video, skipping \
                  videos already fetched by a previous run."
)]
pub struct Args {
    /// Vimeo account auth token (falls back to a local .auth_token file).
    #[arg(short = 'a', long, env = "VIMEO_TOKEN")]
    pub auth_token: Option<String>,

    /// Vimeo account username.
    #[arg(short, long)]
    pub user: String,

    /// Vimeo account email (or supply in ~/.netrc).
    #[arg(short, long)]
    pub email: Option<String>,

    /// Vimeo account password (or supply in ~/.netrc).
    #[arg(short, long)]
    pub password: Option<String>,

    /// Fetch count limit (for testing).
    #[arg(short, long)]
    pub limit: Option<u64>,

    /// Download video files after exporting metadata.
    #[arg(short, long)]
    pub download: bool,

    /// Path for output files.
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Resolve the API token: the flag/env wins, then the local token file.
    pub fn resolve_auth_token(&self) -> Result<String> {
        self.auth_token_from(Path::new(AUTH_TOKEN_FILE))
    }

    fn auth_token_from(&self, token_file: &Path) -> Result<String> {
        if let Some(token) = &self.auth_token {
            return Ok(token.clone());
        }
        if token_file.exists() {
            let token = std::fs::read_to_string(token_file)?;
            let token = token.trim();
            if !token.is_empty() {
                return Ok(token.to_string());
            }
        }
        Err(Error::MissingCredentials(format!(
            "pass --auth-token or put the token in {}",
            AUTH_TOKEN_FILE
        )))
    }

    /// How the external download tool should authenticate.
    pub fn downloader_auth(&self) -> DownloaderAuth {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => DownloaderAuth::Credentials {
                email: email.clone(),
                password: password.clone(),
            },
            _ => DownloaderAuth::Netrc,
        }
    }
}
