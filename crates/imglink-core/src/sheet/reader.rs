//! Workbook reading via calamine (xlsx, xlsm, xlsb, xls, ods).

use super::{CellRecord, RowRecord, SheetRecord, SourceError};
use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;

/// Reads every sheet of the workbook at `path`, in workbook order, pairing each
/// cell's cached value with its formula text.
pub fn read_workbook(path: &Path) -> Result<Vec<SheetRecord>, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let format_err = |source| SourceError::Format {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(format_err)?;
    let names = workbook.sheet_names();
    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let values = workbook.worksheet_range(&name).map_err(format_err)?;
        let formulas = workbook.worksheet_formula(&name).map_err(format_err)?;
        let sheet = sheet_from_ranges(&name, &values, &formulas);
        tracing::debug!(sheet = %name, rows = sheet.rows.len(), "read sheet");
        sheets.push(sheet);
    }
    Ok(sheets)
}

/// Merges a value range and a formula range into rows of non-empty cells.
///
/// Both ranges use absolute sheet coordinates but may start at different
/// positions; the union of their extents is walked. The first row of that
/// union becomes `rows[0]`.
pub(crate) fn sheet_from_ranges(name: &str, values: &Range<Data>, formulas: &Range<String>) -> SheetRecord {
    let extent = match union_extent(values, formulas) {
        Some(e) => e,
        None => {
            return SheetRecord {
                name: name.to_string(),
                rows: Vec::new(),
            }
        }
    };
    let ((first_row, first_col), (last_row, last_col)) = extent;

    let mut rows = Vec::with_capacity((last_row - first_row + 1) as usize);
    for r in first_row..=last_row {
        let mut row: RowRecord = Vec::new();
        for c in first_col..=last_col {
            let display_value = match values.get_value((r, c)) {
                Some(Data::Empty) | None => String::new(),
                Some(v) => v.to_string(),
            };
            let formula = formulas
                .get_value((r, c))
                .filter(|f| !f.is_empty())
                .cloned();
            if display_value.is_empty() && formula.is_none() {
                continue;
            }
            row.push(CellRecord::new(r, c, display_value, formula));
        }
        rows.push(row);
    }

    SheetRecord {
        name: name.to_string(),
        rows,
    }
}

type Extent = ((u32, u32), (u32, u32));

fn union_extent(values: &Range<Data>, formulas: &Range<String>) -> Option<Extent> {
    let a = values.start().zip(values.end());
    let b = formulas.start().zip(formulas.end());
    match (a, b) {
        (None, None) => None,
        (Some(e), None) | (None, Some(e)) => Some(e),
        (Some((s1, e1)), Some((s2, e2))) => Some((
            (s1.0.min(s2.0), s1.1.min(s2.1)),
            (e1.0.max(e2.0), e1.1.max(e2.1)),
        )),
    }
}
