//! Image URL extraction from label cells.
//!
//! A label cell is one whose display value equals the target label exactly;
//! its formula is expected to be `HYPERLINK("<url>", ...)`. Row 0 of every
//! sheet is the header and never contributes.

mod formula;

pub use formula::{parse_hyperlink_formula, FormulaParseError};

use crate::config::{CellErrorPolicy, ImglinkConfig};
use crate::sheet::{CellRecord, RowRecord, SheetRecord};
use thiserror::Error;

/// How extraction reacts to label cells it cannot turn into a URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractPolicy {
    pub missing_formula: CellErrorPolicy,
    pub unparsable_formula: CellErrorPolicy,
}

impl ExtractPolicy {
    /// Abort on any bad label cell.
    pub fn strict() -> Self {
        Self {
            missing_formula: CellErrorPolicy::Abort,
            unparsable_formula: CellErrorPolicy::Abort,
        }
    }
}

impl From<&ImglinkConfig> for ExtractPolicy {
    fn from(cfg: &ImglinkConfig) -> Self {
        ExtractPolicy {
            missing_formula: cfg.missing_formula,
            unparsable_formula: cfg.unparsable_formula,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("{sheet}!{cell}: label cell has no formula")]
    MalformedFormula { sheet: String, cell: String },

    #[error("{sheet}!{cell}: cannot recover URL from {formula:?}: {reason}")]
    UnparsableFormula {
        sheet: String,
        cell: String,
        formula: String,
        #[source]
        reason: FormulaParseError,
    },
}

/// Extracts URLs from one sheet's rows (row order, then column order).
///
/// `sheet` only labels diagnostics. Duplicates are kept.
pub fn extract_urls(
    sheet: &str,
    rows: &[RowRecord],
    target_label: &str,
    policy: ExtractPolicy,
) -> Result<Vec<String>, ExtractError> {
    let mut urls = Vec::new();
    for row in rows.iter().skip(1) {
        for cell in row.iter().filter(|c| c.display_value == target_label) {
            match url_from_cell(sheet, cell) {
                Ok(url) => urls.push(url),
                Err(err) => handle_cell_error(err, policy)?,
            }
        }
    }
    Ok(urls)
}

/// Runs `extract_urls` over every sheet in order and concatenates the results.
pub fn extract_from_workbook(
    sheets: &[SheetRecord],
    target_label: &str,
    policy: ExtractPolicy,
) -> Result<Vec<String>, ExtractError> {
    let mut urls = Vec::new();
    for sheet in sheets {
        let found = extract_urls(&sheet.name, &sheet.rows, target_label, policy)?;
        tracing::debug!(sheet = %sheet.name, count = found.len(), "extracted urls");
        urls.extend(found);
    }
    Ok(urls)
}

fn url_from_cell(sheet: &str, cell: &CellRecord) -> Result<String, ExtractError> {
    let formula = cell
        .formula
        .as_deref()
        .ok_or_else(|| ExtractError::MalformedFormula {
            sheet: sheet.to_string(),
            cell: cell.reference(),
        })?;
    parse_hyperlink_formula(formula).map_err(|reason| ExtractError::UnparsableFormula {
        sheet: sheet.to_string(),
        cell: cell.reference(),
        formula: formula.to_string(),
        reason,
    })
}

fn handle_cell_error(err: ExtractError, policy: ExtractPolicy) -> Result<(), ExtractError> {
    let action = match &err {
        ExtractError::MalformedFormula { .. } => policy.missing_formula,
        ExtractError::UnparsableFormula { .. } => policy.unparsable_formula,
    };
    match action {
        CellErrorPolicy::Abort => Err(err),
        CellErrorPolicy::Skip => {
            tracing::warn!("skipping label cell: {}", err);
            Ok(())
        }
    }
}
