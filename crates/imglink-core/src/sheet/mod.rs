//! Tabular view of a workbook: sheets of rows of cells.
//!
//! The extractor only sees these records; how they are produced from a
//! container format lives in `reader`.

mod error;
mod reader;

pub use error::SourceError;
pub use reader::read_workbook;

/// One spreadsheet cell as the extractor sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRecord {
    /// Zero-based row within the sheet grid.
    pub row: u32,
    /// Zero-based column within the sheet grid.
    pub col: u32,
    /// Cached value as displayed (for a HYPERLINK cell, the label).
    pub display_value: String,
    /// Formula text, if the cell holds one.
    pub formula: Option<String>,
}

impl CellRecord {
    pub fn new(row: u32, col: u32, display_value: impl Into<String>, formula: Option<String>) -> Self {
        Self {
            row,
            col,
            display_value: display_value.into(),
            formula,
        }
    }

    /// A1-style reference, e.g. `C12`.
    pub fn reference(&self) -> String {
        cell_reference(self.row, self.col)
    }
}

/// Cells of one row, in column order. Only non-empty cells are present.
pub type RowRecord = Vec<CellRecord>;

/// A named sheet and its rows; `rows[0]` is the header row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetRecord {
    pub name: String,
    pub rows: Vec<RowRecord>,
}

/// Converts zero-based grid coordinates to an A1-style reference.
pub fn cell_reference(row: u32, col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col as u64 + 1;
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.push((b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    let column: String = letters.into_iter().rev().collect();
    format!("{}{}", column, row as u64 + 1)
}
