//! CLI for imglink.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use imglink_core::config::{self, CellErrorPolicy, ImglinkConfig};
use std::path::PathBuf;

use commands::{run_cells, run_download, run_extract, run_pipeline};

/// Top-level CLI for imglink.
#[derive(Debug, Parser)]
#[command(name = "imglink")]
#[command(
    about = "Extract HYPERLINK image URLs from a spreadsheet and download them",
    long_about = None,
    version
)]
pub struct Cli {
    /// Config file to use instead of ~/.config/imglink/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Extract image URLs from a workbook and download them.
    Run {
        /// Spreadsheet to read (xlsx, xlsm, xlsb, xls, ods).
        source: PathBuf,
        #[command(flatten)]
        extract: ExtractArgs,
        /// Directory to download images into.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
        /// Also save the extracted URLs to this file.
        #[arg(long, value_name = "FILE")]
        urls_out: Option<PathBuf>,
        /// Write failed URLs to this file (input for a later `download`).
        #[arg(long, value_name = "FILE")]
        failure_log: Option<PathBuf>,
    },

    /// Extract image URLs only; print them or save them to a file.
    Extract {
        /// Spreadsheet to read.
        source: PathBuf,
        #[command(flatten)]
        extract: ExtractArgs,
        /// Write URLs here (one per line) instead of stdout.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Download URLs listed one per line in a file (e.g. a previous failure log).
    Download {
        /// File with one URL per line.
        url_list: PathBuf,
        /// Directory to download images into.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,
        /// Write failed URLs to this file.
        #[arg(long, value_name = "FILE")]
        failure_log: Option<PathBuf>,
    },

    /// Print every cell of the workbook with its reference and formula.
    Cells {
        /// Spreadsheet to read.
        source: PathBuf,
    },
}

/// Options shared by the commands that extract URLs.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ExtractArgs {
    /// Display value marking image link cells (default from config: "ImageLink").
    #[arg(short, long, value_name = "TEXT")]
    pub label: Option<String>,
    /// Abort on a label cell without a usable HYPERLINK formula instead of skipping it.
    #[arg(long)]
    pub strict: bool,
}

impl ExtractArgs {
    fn apply(&self, cfg: &mut ImglinkConfig) {
        if let Some(label) = &self.label {
            cfg.target_label = label.clone();
        }
        if self.strict {
            cfg.missing_formula = CellErrorPolicy::Abort;
            cfg.unparsable_formula = CellErrorPolicy::Abort;
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                source,
                extract,
                dest,
                urls_out,
                failure_log,
            } => {
                extract.apply(&mut cfg);
                override_paths(&mut cfg, dest, failure_log);
                if urls_out.is_some() {
                    cfg.url_list_file = urls_out;
                }
                cfg.validate()?;
                run_pipeline(&cfg, &source)?;
            }
            CliCommand::Extract {
                source,
                extract,
                output,
            } => {
                extract.apply(&mut cfg);
                cfg.validate()?;
                run_extract(&cfg, &source, output.as_deref())?;
            }
            CliCommand::Download {
                url_list,
                dest,
                failure_log,
            } => {
                override_paths(&mut cfg, dest, failure_log);
                cfg.validate()?;
                run_download(&cfg, &url_list)?;
            }
            CliCommand::Cells { source } => run_cells(&source)?,
        }

        Ok(())
    }
}

fn override_paths(cfg: &mut ImglinkConfig, dest: Option<PathBuf>, failure_log: Option<PathBuf>) {
    if let Some(dest) = dest {
        cfg.destination_dir = dest;
    }
    if failure_log.is_some() {
        cfg.failure_log_file = failure_log;
    }
}

#[cfg(test)]
mod tests;
