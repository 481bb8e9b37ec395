//! Plain-text URL lists: the extracted URL snapshot and the failure log.
//!
//! One URL per line, UTF-8. Reading ignores blank lines and surrounding
//! whitespace, so a failure log can be fed straight back as input.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes `urls` one per line, replacing any existing file.
pub fn write_url_list<S: AsRef<str>>(path: &Path, urls: &[S]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let file = fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut out = BufWriter::new(file);
    for url in urls {
        writeln!(out, "{}", url.as_ref())?;
    }
    out.flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// Reads a URL list written by `write_url_list` (or by hand).
pub fn read_url_list(path: &Path) -> Result<Vec<String>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read URL list {}", path.display()))?;
    Ok(data
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Persists the failed URLs of a run. With no failures, a stale log is removed
/// so a retry pass never re-reads URLs that have since succeeded.
pub fn write_failure_log<S: AsRef<str>>(path: &Path, failed: &[S]) -> Result<()> {
    if failed.is_empty() {
        match fs::remove_file(path) {
            Ok(()) => tracing::debug!("removed empty failure log {}", path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                return Err(e).with_context(|| format!("failed to remove {}", path.display()))
            }
        }
        return Ok(());
    }
    write_url_list(path, failed)
}
