use std::collections::HashSet;
use std::fmt;

/// Terminal state of one URL in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// Fetched and renamed into place.
    Downloaded { bytes: u64 },
    /// Target file existed before this URL was processed; no network access.
    AlreadyPresent,
    /// URL yields no usable file name; counted neither as success nor failure.
    Skipped,
    /// Fetch or filesystem error, with a human-readable reason.
    Failed(String),
}

/// Aggregate of a download run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadReport {
    /// Number of input URLs.
    pub total: usize,
    /// Downloaded plus already present.
    pub success_count: usize,
    /// Of `success_count`, how many were fetched in this run.
    pub fetched_count: usize,
    pub skipped_count: usize,
    /// Failed URLs in the order failures happened, each listed once.
    pub failed_urls: Vec<String>,
    seen_failures: HashSet<String>,
}

impl DownloadReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, url: &str, outcome: &DownloadOutcome) {
        match outcome {
            DownloadOutcome::Downloaded { .. } => {
                self.success_count += 1;
                self.fetched_count += 1;
            }
            DownloadOutcome::AlreadyPresent => self.success_count += 1,
            DownloadOutcome::Skipped => self.skipped_count += 1,
            DownloadOutcome::Failed(_) => {
                if self.seen_failures.insert(url.to_string()) {
                    self.failed_urls.push(url.to_string());
                }
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        self.failed_urls.is_empty()
    }
}

impl fmt::Display for DownloadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} URLs: {} succeeded ({} fetched, {} already present), {} failed, {} skipped",
            self.total,
            self.success_count,
            self.fetched_count,
            self.success_count - self.fetched_count,
            self.failed_urls.len(),
            self.skipped_count
        )
    }
}
