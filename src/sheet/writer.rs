//! Workbook writer (rust_xlsxwriter)

use std::path::Path;

use rust_xlsxwriter::Workbook;
use tracing::debug;

use crate::experiment::RunTable;
use crate::paths::ensure_parent_dir;
use crate::{Error, Result};

/// Worksheet title used by the extractor.
pub const DEFAULT_SHEET_NAME: &str = "Extracted Data";

/// Write `table` as a single-sheet workbook at `path`.
///
/// Row 1 holds the headers; each following row holds the epoch label as a
/// string cell and the metric values as numeric cells. Non-finite values
/// are left blank. The parent directory is created if needed and an
/// existing file at `path` is replaced.
///
/// # Errors
///
/// Returns error if the directory cannot be created, the sheet name is
/// rejected, the table exceeds worksheet limits, or the file cannot be
/// saved.
pub fn write_run_table(table: &RunTable, path: &Path, sheet_name: &str) -> Result<()> {
    ensure_parent_dir(path)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (col, header) in table.headers().into_iter().enumerate() {
        worksheet.write_string(0, column_number(col)?, header)?;
    }

    for (i, record) in table.rows().iter().enumerate() {
        let row = u32::try_from(i + 1)
            .map_err(|_| Error::Other(format!("Too many rows for a worksheet: {}", i + 1)))?;
        worksheet.write_string(row, 0, record.epoch_name())?;
        for (j, value) in record.values().iter().enumerate() {
            if value.is_finite() {
                worksheet.write_number(row, column_number(j + 1)?, *value)?;
            }
        }
    }

    workbook.save(path)?;
    debug!(path = %path.display(), rows = table.len(), "Workbook saved");
    Ok(())
}

fn column_number(index: usize) -> Result<u16> {
    u16::try_from(index)
        .map_err(|_| Error::Other(format!("Too many columns for a worksheet: {index}")))
}
