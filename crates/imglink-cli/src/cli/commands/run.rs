//! `imglink run <source>` – extract, then download.

use super::download::download_and_report;
use super::extract::extract_source;
use anyhow::Result;
use imglink_core::config::ImglinkConfig;
use imglink_core::url_list;
use std::path::Path;

pub fn run_pipeline(cfg: &ImglinkConfig, source: &Path) -> Result<()> {
    let urls = extract_source(cfg, source)?;
    println!("Found {} image URLs in {}", urls.len(), source.display());

    if let Some(path) = &cfg.url_list_file {
        url_list::write_url_list(path, &urls)?;
        println!("URL list saved to {}", path.display());
    }

    download_and_report(cfg, &urls)?;
    Ok(())
}
