//! Disk I/O and file lifecycle.
//!
//! Downloads stream into `<final><suffix>` and are published with an atomic
//! rename, so a final path only ever holds a complete file.

mod writer;

pub use writer::TempFileWriter;

use std::path::{Path, PathBuf};

/// Default temporary suffix used before atomic rename.
pub const DEFAULT_TEMP_SUFFIX: &str = ".downloading";

/// Path for the temp file: appends `suffix` to the final path
/// (e.g. `96010.jpg` → `96010.jpg.downloading`).
pub fn temp_path(final_path: &Path, suffix: &str) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(suffix);
    PathBuf::from(o)
}
