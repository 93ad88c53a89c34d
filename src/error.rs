//! Error types for the vimeo-exporter application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Account not found: {0}")]
    AccountNotFound(String),

    /// A catalog page fetch failed. Fatal: the harvest has no per-page
    /// recovery, so this aborts the whole export.
    #[error("Paging source error: {0}")]
    PagingSource(String),

    /// A raw catalog entry carried a non-scalar value in a field that must
    /// be scalar. Fatal for the whole run.
    #[error("Video has non-scalar attribute value ({field}): {message}")]
    Validation { field: String, message: String },

    // Download errors
    #[error("Couldn't find downloader. Please install yt-dlp or youtube-dl first.")]
    DownloaderNotFound,

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes surfaced to the operator.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const CONFIG_ERROR: i32 = 2;
    pub const API_ERROR: i32 = 3;
    pub const VALIDATION_ERROR: i32 = 4;
    pub const DOWNLOAD_ERROR: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
