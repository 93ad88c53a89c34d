//! Per-record download orchestration.

use std::path::Path;

use crate::download::cancel::CancellationGate;
use crate::download::invocation::{build_download_args, DownloaderAuth};
use crate::download::marker::CompletionMarker;
use crate::download::outcome::{DownloadOutcome, DownloadStatus};
use crate::download::runner::ProcessRunner;
use crate::error::Result;
use crate::export::MetadataRecord;
use crate::output::{print_info, print_success, print_warning};

/// Drive the external tool once per record, strictly in harvest order.
///
/// Per record: consult the completion marker (hit -> skipped, tool never
/// invoked), otherwise run the tool to completion; a success exit sets the
/// marker, a failure exit leaves it unset so a future run retries. The
/// cancellation gate is polled only between records, so the outcomes
/// gathered before an interrupt are always preserved.
pub async fn run_downloads<R: ProcessRunner>(
    records: &[MetadataRecord],
    account_dir: &Path,
    auth: &DownloaderAuth,
    runner: &R,
    marker: &CompletionMarker,
    gate: &CancellationGate,
) -> Result<Vec<DownloadOutcome>> {
    // Fatal precondition: no tool, no download phase.
    runner.ensure_available()?;

    let mut outcomes = Vec::with_capacity(records.len());

    for record in records {
        if gate.is_cancelled() {
            break;
        }

        if marker.is_complete(&record.upload_date, record.id()) {
            print_info(&format!("Already downloaded, skipping: {}", record.link));
            outcomes.push(DownloadOutcome::new(&record.link, DownloadStatus::Skipped));
            continue;
        }

        print_info(&format!("Downloading {}", record.link));
        let args = build_download_args(account_dir, auth, &record.link);

        let succeeded = match runner.run(&args).await {
            Ok(success) => success,
            Err(e) => {
                tracing::warn!("Downloader invocation failed for {}: {}", record.link, e);
                false
            }
        };

        if succeeded {
            marker.mark_complete(&record.upload_date, record.id())?;
            print_success(&format!("Downloaded {}", record.link));
            outcomes.push(DownloadOutcome::new(&record.link, DownloadStatus::Success));
        } else {
            print_warning(&format!("Download failed: {}", record.link));
            outcomes.push(DownloadOutcome::new(&record.link, DownloadStatus::Failure));
        }
    }

    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use tempfile::tempdir;

    /// Scripted runner: records every argument list it is handed, fails for
    /// URLs in `fail_urls`, and can trip the gate after N invocations.
    struct FakeRunner {
        available: bool,
        fail_urls: HashSet<String>,
        invocations: Mutex<Vec<Vec<String>>>,
        cancel_after: Option<(usize, CancellationGate)>,
    }

    impl FakeRunner {
        fn new() -> Self {
            Self {
                available: true,
                fail_urls: HashSet::new(),
                invocations: Mutex::new(Vec::new()),
                cancel_after: None,
            }
        }

        fn urls_run(&self) -> Vec<String> {
            self.invocations
                .lock()
                .unwrap()
                .iter()
                .map(|args| args.last().unwrap().clone())
                .collect()
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeRunner {
        fn ensure_available(&self) -> Result<()> {
            if self.available {
                Ok(())
            } else {
                Err(Error::DownloaderNotFound)
            }
        }

        async fn run(&self, args: &[String]) -> Result<bool> {
            let mut invocations = self.invocations.lock().unwrap();
            invocations.push(args.to_vec());
            if let Some((after, gate)) = &self.cancel_after {
                if invocations.len() >= *after {
                    gate.cancel();
                }
            }
            let url = args.last().unwrap();
            Ok(!self.fail_urls.contains(url))
        }
    }

    fn record(id: &str) -> MetadataRecord {
        MetadataRecord {
            uri: format!("/videos/{}", id),
            name: format!("Video {}", id),
            description: None,
            link: format!("https://vimeo.com/{}", id),
            duration: 10,
            created_time: "2020-05-01T10:00:00Z".into(),
            release_time: "2020-05-01T10:00:00Z".into(),
            view_privacy: "anybody".into(),
            download_privacy: "disable".into(),
            tags: String::new(),
            play_stats: 0,
            status: "available".into(),
            upload_date: "20200501".into(),
        }
    }

    fn statuses(outcomes: &[DownloadOutcome]) -> Vec<DownloadStatus> {
        outcomes.iter().map(|o| o.status).collect()
    }

    #[tokio::test]
    async fn missing_downloader_is_fatal_before_any_record() {
        let dir = tempdir().unwrap();
        let marker = CompletionMarker::new(dir.path().join("videos"));
        let runner = FakeRunner {
            available: false,
            ..FakeRunner::new()
        };

        let err = run_downloads(
            &[record("1")],
            dir.path(),
            &DownloaderAuth::Netrc,
            &runner,
            &marker,
            &CancellationGate::new(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, Error::DownloaderNotFound));
        assert!(runner.urls_run().is_empty());
    }

    #[tokio::test]
    async fn success_sets_marker_and_failure_does_not() {
        let dir = tempdir().unwrap();
        let marker = CompletionMarker::new(dir.path().join("videos"));
        let mut runner = FakeRunner::new();
        runner.fail_urls.insert("https://vimeo.com/2".into());

        let outcomes = run_downloads(
            &[record("1"), record("2")],
            dir.path(),
            &DownloaderAuth::Netrc,
            &runner,
            &marker,
            &CancellationGate::new(),
        )
        .await
        .unwrap();

        assert_eq!(
            statuses(&outcomes),
            [DownloadStatus::Success, DownloadStatus::Failure]
        );
        assert!(marker.is_complete("20200501", "1"));
        assert!(!marker.is_complete("20200501", "2"));
    }

    #[tokio::test]
    async fn pre_existing_marker_skips_without_invoking_the_tool() {
        let dir = tempdir().unwrap();
        let marker = CompletionMarker::new(dir.path().join("videos"));
        marker.mark_complete("20200501", "1").unwrap();
        let runner = FakeRunner::new();

        let outcomes = run_downloads(
            &[record("1"), record("2")],
            dir.path(),
            &DownloaderAuth::Netrc,
            &runner,
            &marker,
            &CancellationGate::new(),
        )
        .await
        .unwrap();

        assert_eq!(
            statuses(&outcomes),
            [DownloadStatus::Skipped, DownloadStatus::Success]
        );
        assert_eq!(runner.urls_run(), ["https://vimeo.com/2"]);
    }

    #[tokio::test]
    async fn rerun_after_mixed_outcomes_only_retries_unmarked_records() {
        let dir = tempdir().unwrap();
        let marker = CompletionMarker::new(dir.path().join("videos"));
        let records = [record("1"), record("2")];

        // First run: record 2 fails.
        let mut first = FakeRunner::new();
        first.fail_urls.insert("https://vimeo.com/2".into());
        run_downloads(
            &records,
            dir.path(),
            &DownloaderAuth::Netrc,
            &first,
            &marker,
            &CancellationGate::new(),
        )
        .await
        .unwrap();

        // Second run: only record 2 is attempted again.
        let second = FakeRunner::new();
        let outcomes = run_downloads(
            &records,
            dir.path(),
            &DownloaderAuth::Netrc,
            &second,
            &marker,
            &CancellationGate::new(),
        )
        .await
        .unwrap();

        assert_eq!(second.urls_run(), ["https://vimeo.com/2"]);
        assert_eq!(
            statuses(&outcomes),
            [DownloadStatus::Skipped, DownloadStatus::Success]
        );
    }

    #[tokio::test]
    async fn cancellation_between_records_preserves_gathered_outcomes() {
        let dir = tempdir().unwrap();
        let marker = CompletionMarker::new(dir.path().join("videos"));
        let gate = CancellationGate::new();
        let mut runner = FakeRunner::new();
        // The gate trips while the second download is in flight; it still
        // finishes, but no third record is started.
        runner.cancel_after = Some((2, gate.clone()));

        let records: Vec<_> = ["1", "2", "3", "4", "5"].map(record).into();
        let outcomes = run_downloads(
            &records,
            dir.path(),
            &DownloaderAuth::Netrc,
            &runner,
            &marker,
            &gate,
        )
        .await
        .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(runner.urls_run().len(), 2);

        let summary = crate::download::DownloadSummary::from_outcomes(&outcomes, 5);
        assert_eq!(summary.unfinished, 3);
        assert_eq!(summary.success, 2);
    }

    #[tokio::test]
    async fn records_are_processed_in_harvest_order() {
        let dir = tempdir().unwrap();
        let marker = CompletionMarker::new(dir.path().join("videos"));
        let runner = FakeRunner::new();

        run_downloads(
            &[record("3"), record("1"), record("2")],
            dir.path(),
            &DownloaderAuth::Netrc,
            &runner,
            &marker,
            &CancellationGate::new(),
        )
        .await
        .unwrap();

        assert_eq!(
            runner.urls_run(),
            [
                "https://vimeo.com/3",
                "https://vimeo.com/1",
                "https://vimeo.com/2"
            ]
        );
    }
}
