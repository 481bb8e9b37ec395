//! Resumable batch downloader.
//!
//! URLs are processed one at a time in input order. A URL whose target file
//! already exists is a success without network access, so re-running a batch
//! only fetches what is missing. A failure is recorded and the batch moves on.

mod report;

pub use report::{DownloadOutcome, DownloadReport};

use crate::fetch::Fetcher;
use crate::storage::{temp_path, TempFileWriter, DEFAULT_TEMP_SUFFIX};
use crate::url_model::file_name_for_url;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Downloads URLs into one destination directory using `F` for network access.
pub struct Downloader<F> {
    destination_dir: PathBuf,
    temp_suffix: String,
    fetcher: F,
}

impl<F: Fetcher> Downloader<F> {
    pub fn new(destination_dir: impl Into<PathBuf>, fetcher: F) -> Self {
        Self {
            destination_dir: destination_dir.into(),
            temp_suffix: DEFAULT_TEMP_SUFFIX.to_string(),
            fetcher,
        }
    }

    pub fn with_temp_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.temp_suffix = suffix.into();
        self
    }

    /// Final path for `url`, or `None` when the URL yields no usable file name.
    pub fn final_path_for(&self, url: &str) -> Option<PathBuf> {
        file_name_for_url(url).map(|name| self.destination_dir.join(name))
    }

    /// Runs the per-URL procedure for one URL. Never returns an error: every
    /// failure becomes `DownloadOutcome::Failed`.
    pub fn download_one(&self, url: &str) -> DownloadOutcome {
        let final_path = match self.final_path_for(url) {
            Some(p) => p,
            None => {
                tracing::debug!(url, "no usable file name, skipping");
                return DownloadOutcome::Skipped;
            }
        };

        if final_path.is_file() {
            tracing::debug!(url, path = %final_path.display(), "already present");
            return DownloadOutcome::AlreadyPresent;
        }
        if final_path.exists() {
            let reason = format!("{} exists and is not a file", final_path.display());
            tracing::warn!(url, "download failed: {}", reason);
            return DownloadOutcome::Failed(reason);
        }

        tracing::info!(url, "downloading");
        match self.fetch_to(url, &final_path) {
            Ok(bytes) => {
                tracing::info!(url, bytes, path = %final_path.display(), "downloaded");
                DownloadOutcome::Downloaded { bytes }
            }
            Err(e) => {
                tracing::warn!(url, "download failed: {:#}", e);
                DownloadOutcome::Failed(format!("{:#}", e))
            }
        }
    }

    /// Downloads every URL in order and aggregates the outcomes.
    pub fn download_all<S: AsRef<str>>(&self, urls: &[S]) -> DownloadReport {
        self.download_all_with(urls, |_, _| {})
    }

    /// Like `download_all`, calling `on_outcome` after each URL (for progress output).
    pub fn download_all_with<S, C>(&self, urls: &[S], mut on_outcome: C) -> DownloadReport
    where
        S: AsRef<str>,
        C: FnMut(&str, &DownloadOutcome),
    {
        if let Err(e) = std::fs::create_dir_all(&self.destination_dir) {
            tracing::warn!(
                "cannot create destination {}: {}",
                self.destination_dir.display(),
                e
            );
        }

        let mut report = DownloadReport::new(urls.len());
        for url in urls {
            let url = url.as_ref();
            let outcome = self.download_one(url);
            on_outcome(url, &outcome);
            report.record(url, &outcome);
        }
        tracing::info!(
            total = report.total,
            succeeded = report.success_count,
            failed = report.failed_urls.len(),
            skipped = report.skipped_count,
            "download run finished"
        );
        report
    }

    /// Streams `url` into the temp path and renames it into place.
    fn fetch_to(&self, url: &str, final_path: &Path) -> Result<u64> {
        let tmp = temp_path(final_path, &self.temp_suffix);
        let mut writer = TempFileWriter::create(&tmp)?;
        let bytes = match self.fetcher.fetch(url, &mut writer) {
            Ok(n) => n,
            Err(e) => {
                writer.discard();
                return Err(anyhow::Error::new(e).context(format!("GET {}", url)));
            }
        };
        if let Err(e) = writer.finalize(final_path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e);
        }
        Ok(bytes)
    }
}

/// Downloads `urls` into `destination_dir` with the given temp suffix.
pub fn download_all<S, F>(
    urls: &[S],
    destination_dir: &Path,
    temp_suffix: &str,
    fetcher: F,
) -> DownloadReport
where
    S: AsRef<str>,
    F: Fetcher,
{
    Downloader::new(destination_dir, fetcher)
        .with_temp_suffix(temp_suffix)
        .download_all(urls)
}
