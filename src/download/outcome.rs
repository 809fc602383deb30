//! Download outcome tracking.

use std::path::PathBuf;

use crate::media::AssetReference;

/// Result of downloading one asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    Success { asset: AssetReference, path: PathBuf },
    Failure { asset: AssetReference, reason: String },
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DownloadOutcome::Success { .. })
    }

    pub fn asset(&self) -> &AssetReference {
        match self {
            DownloadOutcome::Success { asset, .. } | DownloadOutcome::Failure { asset, .. } => {
                asset
            }
        }
    }
}

/// Per-batch tally and outcomes.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Number of items the batch was expected to contain.
    pub total: u64,
    pub attempted: u64,
    pub succeeded: u64,
    pub outcomes: Vec<DownloadOutcome>,
}

impl BatchReport {
    pub fn new(total: u64) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    /// Record a successful download.
    pub fn record_success(&mut self, asset: AssetReference, path: PathBuf) {
        self.attempted += 1;
        self.succeeded += 1;
        self.outcomes.push(DownloadOutcome::Success { asset, path });
    }

    /// Record a failed download.
    pub fn record_failure(&mut self, asset: AssetReference, reason: String) {
        self.attempted += 1;
        self.outcomes.push(DownloadOutcome::Failure { asset, reason });
    }

    pub fn failed(&self) -> u64 {
        self.attempted - self.succeeded
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// Statistics across every URL of a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub urls_processed: u64,
    pub urls_failed: u64,
    pub downloaded: u64,
    pub failed_items: u64,
}

impl RunSummary {
    /// Add statistics from a finished batch.
    pub fn add_report(&mut self, report: &BatchReport) {
        self.urls_processed += 1;
        self.downloaded += report.succeeded;
        self.failed_items += report.failed();
    }

    /// Add the downloads of a batch that stopped early, counting its URL as
    /// failed.
    pub fn add_interrupted(&mut self, report: &BatchReport) {
        self.urls_failed += 1;
        self.downloaded += report.succeeded;
        self.failed_items += report.failed();
    }

    /// Mark a URL that could not be processed at all.
    pub fn mark_url_failed(&mut self) {
        self.urls_failed += 1;
    }
}
