//! `imglink cells <source>` – dump every cell of a workbook.

use anyhow::Result;
use imglink_core::read_workbook;
use std::path::Path;

pub fn run_cells(source: &Path) -> Result<()> {
    let sheets = read_workbook(source)?;
    for sheet in &sheets {
        println!("[{}]", sheet.name);
        for (i, row) in sheet.rows.iter().enumerate() {
            let kind = if i == 0 { " (header)" } else { "" };
            for cell in row {
                match &cell.formula {
                    Some(f) => println!("{}{} = {}  [={}]", cell.reference(), kind, cell.display_value, f),
                    None => println!("{}{} = {}", cell.reference(), kind, cell.display_value),
                }
            }
        }
    }
    Ok(())
}
