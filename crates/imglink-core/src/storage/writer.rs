//! Sequential writer for temp download files.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writer for a temp download file. Bytes are appended in arrival order;
/// `finalize` publishes the file under its final name.
pub struct TempFileWriter {
    file: BufWriter<File>,
    temp_path: PathBuf,
    written: u64,
}

impl TempFileWriter {
    /// Create a new temp file at `temp_path` (e.g. `destination.downloading`).
    /// Truncates a leftover file from an interrupted run.
    pub fn create(temp_path: &Path) -> Result<Self> {
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(TempFileWriter {
            file: BufWriter::new(file),
            temp_path: temp_path.to_path_buf(),
            written: 0,
        })
    }

    pub fn bytes_written(&self) -> u64 {
        self.written
    }

    /// Flush, sync to disk, then atomically rename the temp file to `final_path`.
    /// Fails if `final_path` is on a different filesystem.
    pub fn finalize(mut self, final_path: &Path) -> Result<()> {
        self.file.flush().context("storage flush failed")?;
        self.file
            .get_ref()
            .sync_all()
            .context("storage sync failed")?;
        let temp_path = self.temp_path.clone();
        drop(self.file);

        std::fs::rename(&temp_path, final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                final_path.display()
            )
        })?;
        Ok(())
    }

    /// Close and remove the temp file. Removal errors are logged, not returned.
    pub fn discard(self) {
        let temp_path = self.temp_path.clone();
        drop(self.file);
        if let Err(e) = std::fs::remove_file(&temp_path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::debug!("could not remove {}: {}", temp_path.display(), e);
            }
        }
    }
}

impl Write for TempFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.file.write(buf)?;
        self.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}
