//! `imglink extract <source>` – list the image URLs of a workbook.

use anyhow::{Context, Result};
use imglink_core::config::ImglinkConfig;
use imglink_core::{extract_from_workbook, read_workbook, url_list, ExtractPolicy};
use std::path::Path;

/// Reads `source` and returns its image URLs. Fails if the workbook is unreadable
/// or a bad label cell is hit under the abort policy.
pub(super) fn extract_source(cfg: &ImglinkConfig, source: &Path) -> Result<Vec<String>> {
    let sheets = read_workbook(source)?;
    let urls = extract_from_workbook(&sheets, &cfg.target_label, ExtractPolicy::from(cfg))
        .with_context(|| format!("extraction from {} stopped", source.display()))?;
    tracing::info!(
        source = %source.display(),
        label = %cfg.target_label,
        count = urls.len(),
        "extracted image urls"
    );
    Ok(urls)
}

pub fn run_extract(cfg: &ImglinkConfig, source: &Path, output: Option<&Path>) -> Result<()> {
    let urls = extract_source(cfg, source)?;
    match output {
        Some(path) => {
            url_list::write_url_list(path, &urls)?;
            println!("Extracted {} URLs to {}", urls.len(), path.display());
        }
        None => {
            for url in &urls {
                println!("{url}");
            }
        }
    }
    Ok(())
}
