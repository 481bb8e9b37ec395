//! `imglink download <url-list>` – download (or retry) a list of URLs.

use anyhow::Result;
use imglink_core::config::ImglinkConfig;
use imglink_core::{url_list, CurlFetcher, DownloadOutcome, DownloadReport, Downloader};
use std::path::Path;

/// Downloads `urls` with the configured destination and suffix, prints progress
/// and the summary, and persists the failure log. Individual failures are not
/// errors, including an unusable destination: every URL then fails on its own.
pub(super) fn download_and_report(cfg: &ImglinkConfig, urls: &[String]) -> Result<DownloadReport> {
    let downloader = Downloader::new(&cfg.destination_dir, CurlFetcher::new(cfg.fetch.clone()))
        .with_temp_suffix(cfg.temp_suffix.as_str());

    let report = downloader.download_all_with(urls, |url, outcome| match outcome {
        DownloadOutcome::Downloaded { .. } => println!("Downloaded {url}"),
        DownloadOutcome::AlreadyPresent => println!("Already present {url}"),
        DownloadOutcome::Skipped => println!("Skipped {url} (no file name)"),
        DownloadOutcome::Failed(reason) => println!("\tFailed to download {url}: {reason}"),
    });

    println!("{report}");

    if let Some(log) = &cfg.failure_log_file {
        url_list::write_failure_log(log, &report.failed_urls)?;
        if !report.is_complete() {
            println!(
                "Failed URLs written to {} (retry with `imglink download {}`)",
                log.display(),
                log.display()
            );
        }
    }
    Ok(report)
}

pub fn run_download(cfg: &ImglinkConfig, list: &Path) -> Result<()> {
    let urls = url_list::read_url_list(list)?;
    tracing::info!(list = %list.display(), count = urls.len(), "downloading url list");
    download_and_report(cfg, &urls)?;
    Ok(())
}
