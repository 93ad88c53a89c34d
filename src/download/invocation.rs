//! Argument list construction for the external download tool.

use std::path::Path;

/// How the external tool should authenticate against the catalog site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloaderAuth {
    /// Explicit email + password supplied on the command line.
    Credentials { email: String, password: String },
    /// Fall back to the local ~/.netrc file.
    Netrc,
}

/// Build the fixed, non-interactive argument list for one target URL.
///
/// Artifacts land under `<account_dir>/videos/<upload_date>-<id>/`, next to
/// the completion marker the orchestrator writes.
pub fn build_download_args(account_dir: &Path, auth: &DownloaderAuth, url: &str) -> Vec<String> {
    let mut args: Vec<String> = [
        "--ignore-config",    // ignore any local config and use only this one
        "--no-overwrites",    // don't overwrite already-downloaded files
        "--write-description",// sidecar text file with the video description
        "--write-info-json",  // sidecar JSON metadata (redundant with the CSV but cheap)
        "--write-thumbnail",  // sidecar thumbnail image
        "--format",
        "Original/best",      // original source file when available
    ]
    .map(String::from)
    .to_vec();

    match auth {
        DownloaderAuth::Credentials { email, password } => {
            args.push("--username".into());
            args.push(email.clone());
            args.push("--password".into());
            args.push(password.clone());
        }
        DownloaderAuth::Netrc => args.push("--netrc".into()),
    }

    args.push("--output".into());
    args.push(format!(
        "{}/videos/%(upload_date)s-%(id)s/%(id)s.%(ext)s",
        account_dir.display()
    ));
    args.push(url.to_string());
    args
}
