//! CLI command handlers, one file per command.

mod cells;
mod download;
mod extract;
mod run;

pub use cells::run_cells;
pub use download::run_download;
pub use extract::run_extract;
pub use run::run_pipeline;
