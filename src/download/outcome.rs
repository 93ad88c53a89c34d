//! Per-record download outcomes and their aggregation.

/// How one record's download attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Success,
    Skipped,
    Failure,
}

/// One record's outcome, keyed by its playable URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadOutcome {
    pub url: String,
    pub status: DownloadStatus,
}

impl DownloadOutcome {
    pub fn new(url: impl Into<String>, status: DownloadStatus) -> Self {
        Self {
            url: url.into(),
            status,
        }
    }
}

/// Aggregated results for a whole download phase.
///
/// `skipped` is a subset of `success`; records never reached (cancellation)
/// show up as `unfinished`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadSummary {
    pub unfinished: u64,
    pub success: u64,
    pub skipped: u64,
    pub failed_urls: Vec<String>,
}

impl DownloadSummary {
    /// Partition the gathered outcomes against the total record count.
    pub fn from_outcomes(outcomes: &[DownloadOutcome], total_records: u64) -> Self {
        let gathered = outcomes.len() as u64;
        let skipped = outcomes
            .iter()
            .filter(|o| o.status == DownloadStatus::Skipped)
            .count() as u64;
        let failed_urls: Vec<String> = outcomes
            .iter()
            .filter(|o| o.status == DownloadStatus::Failure)
            .map(|o| o.url.clone())
            .collect();

        Self {
            unfinished: total_records - gathered,
            success: gathered - failed_urls.len() as u64,
            skipped,
            failed_urls,
        }
    }

    pub fn failure_count(&self) -> u64 {
        self.failed_urls.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(url: &str, status: DownloadStatus) -> DownloadOutcome {
        DownloadOutcome::new(url, status)
    }

    #[test]
    fn partitions_mixed_outcomes() {
        let outcomes = vec![
            outcome("u1", DownloadStatus::Success),
            outcome("u2", DownloadStatus::Skipped),
            outcome("u3", DownloadStatus::Failure),
            outcome("u4", DownloadStatus::Success),
        ];

        let summary = DownloadSummary::from_outcomes(&outcomes, 4);

        assert_eq!(summary.unfinished, 0);
        assert_eq!(summary.success, 3);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.failed_urls, vec!["u3"]);
    }

    #[test]
    fn cancellation_leaves_unreached_records_as_unfinished() {
        let outcomes = vec![
            outcome("u1", DownloadStatus::Success),
            outcome("u2", DownloadStatus::Failure),
        ];

        let summary = DownloadSummary::from_outcomes(&outcomes, 5);

        assert_eq!(summary.unfinished, 3);
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failure_count(), 1);
    }

    #[test]
    fn count_identities_hold() {
        let outcomes = vec![
            outcome("u1", DownloadStatus::Skipped),
            outcome("u2", DownloadStatus::Failure),
            outcome("u3", DownloadStatus::Success),
        ];
        let total = 7u64;

        let summary = DownloadSummary::from_outcomes(&outcomes, total);
        let gathered = outcomes.len() as u64;

        // success + failure == gathered (skipped counts inside success)
        assert_eq!(summary.success + summary.failure_count(), gathered);
        assert_eq!(gathered + summary.unfinished, total);
    }

    #[test]
    fn empty_outcome_list_is_all_unfinished() {
        let summary = DownloadSummary::from_outcomes(&[], 3);

        assert_eq!(summary.unfinished, 3);
        assert_eq!(summary.success, 0);
        assert_eq!(summary.skipped, 0);
        assert!(summary.failed_urls.is_empty());
    }
}
