//! Workbook reader (calamine)

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};

use crate::experiment::{EpochRecord, RunTable, EPOCH_COLUMN};
use crate::{Error, Result};

/// Read the first worksheet of an `.xlsx` workbook into a [`RunTable`].
///
/// The first row is the header row and must contain `epoch_name`; it may
/// sit in any column. Every other header becomes a metric column. Rows
/// with an empty epoch cell are skipped. Numeric cells are taken as is,
/// numeric-looking strings are parsed, anything else becomes `NaN`.
///
/// The table is named after the file stem.
///
/// # Errors
///
/// Returns error if the workbook cannot be opened, has no worksheet, or
/// its header row lacks `epoch_name`.
pub fn read_run_table(path: &Path) -> Result<RunTable> {
    let sheet_error = |message: String| Error::SheetRead {
        path: path.to_path_buf(),
        message,
    };

    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: XlsxError| sheet_error(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| sheet_error("workbook has no worksheets".to_string()))?
        .map_err(|e| sheet_error(e.to_string()))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(header_text).collect())
        .unwrap_or_default();

    let epoch_index = headers
        .iter()
        .position(|h| h == EPOCH_COLUMN)
        .ok_or_else(|| Error::MissingColumn {
            column: EPOCH_COLUMN.to_string(),
            table: name.clone(),
            available: headers.join(", "),
        })?;

    let metric_columns: Vec<usize> = (0..headers.len()).filter(|&i| i != epoch_index).collect();
    let metric_headers: Vec<String> = metric_columns.iter().map(|&i| headers[i].clone()).collect();
    let mut table = RunTable::new(name, metric_headers);

    for row in rows {
        let Some(label) = row.get(epoch_index).and_then(label_text) else {
            continue;
        };
        let values = metric_columns
            .iter()
            .map(|&i| row.get(i).map_or(f64::NAN, numeric_value))
            .collect();
        table.push(EpochRecord::new(label, values))?;
    }

    Ok(table)
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn label_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty => None,
        Data::String(s) if s.trim().is_empty() => None,
        Data::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}

#[allow(clippy::cast_precision_loss)]
fn numeric_value(cell: &Data) -> f64 {
    match cell {
        Data::Float(f) => *f,
        Data::Int(i) => *i as f64,
        Data::String(s) => s.trim().parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
