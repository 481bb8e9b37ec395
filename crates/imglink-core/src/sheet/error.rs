use std::path::PathBuf;
use thiserror::Error;

/// The workbook could not be turned into rows. Always fatal for a run.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {} as a spreadsheet: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },
}
