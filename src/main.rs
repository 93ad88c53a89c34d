//! Vimeo Exporter - CLI entry point.

use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use vimeo_exporter::{
    api::VimeoApi,
    cli::Args,
    download::{
        install_ctrl_c_handler, run_downloads, CancellationGate, CompletionMarker,
        DownloadSummary, YtDlpRunner,
    },
    error::{exit_codes, Error, Result},
    export::{harvest, CsvSink},
    fs::{account_dir, csv_export_path, ensure_dir, videos_dir},
    output::{
        print_download_header, print_download_summary, print_error, print_export_header,
        print_info,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::MissingCredentials(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Api(_)
                | Error::Authentication(_)
                | Error::AccountNotFound(_)
                | Error::PagingSource(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Validation { .. } => ExitCode::from(exit_codes::VALIDATION_ERROR as u8),
                Error::DownloaderNotFound => ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt().with_env_filter(filter).with_target(false).init();

    // Resolve credentials and connect
    let token = args.resolve_auth_token()?;
    let api = VimeoApi::new(token)?;

    let user = api.get_user(&args.user).await?;
    let videos = &user.metadata.connections.videos;
    print_export_header(&user.name, &args.user, videos.total, args.limit);

    // Lay out the output tree
    let account_dir = account_dir(&args.output, &args.user);
    ensure_dir(&account_dir)?;

    let csv_path = csv_export_path(&account_dir, &args.user, Local::now());
    print_info(&format!("Writing CSV at {}...", csv_path.display()));

    // Phase 1: harvest metadata. The sink holds the file exclusively and is
    // dropped before any download starts.
    let records = {
        let mut sink = CsvSink::create(&csv_path)?;
        harvest(
            &api,
            videos.uri.clone(),
            args.limit,
            videos.total,
            &mut sink,
        )
        .await?
    };

    print_info(&format!(
        "Finished downloading metadata for {} videos",
        records.len()
    ));

    if !args.download {
        return Ok(());
    }

    // Phase 2: drive the external download tool, one record at a time.
    print_download_header();

    let gate = CancellationGate::new();
    install_ctrl_c_handler(&gate);

    let runner = YtDlpRunner::new();
    let marker = CompletionMarker::new(videos_dir(&account_dir));

    let outcomes = run_downloads(
        &records,
        &account_dir,
        &args.downloader_auth(),
        &runner,
        &marker,
        &gate,
    )
    .await?;

    let summary = DownloadSummary::from_outcomes(&outcomes, records.len() as u64);
    print_download_summary(&summary);

    Ok(())
}
