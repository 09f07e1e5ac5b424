//! Run Table - the epoch rows of one run, as stored in one spreadsheet
//!
//! A run is either a subfolder of validation logs (extraction side) or a
//! workbook of extracted metrics (plotting side). Both sides meet here.

use tracing::warn;

use super::EpochRecord;
use crate::{Error, Result};

/// Header of the epoch label column. Always the first column written.
pub const EPOCH_COLUMN: &str = "epoch_name";

/// In-memory table of per-epoch metrics for a single run.
///
/// ## Layout
///
/// `headers()` is `epoch_name` followed by the metric headers. Each
/// [`EpochRecord`] carries values for the metric headers only, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct RunTable {
    name: String,
    metric_headers: Vec<String>,
    rows: Vec<EpochRecord>,
}

impl RunTable {
    /// Create an empty table.
    ///
    /// # Arguments
    ///
    /// * `name` - Run name (subfolder name or workbook stem)
    /// * `metric_headers` - Metric column names, excluding `epoch_name`
    #[must_use]
    pub fn new<S: Into<String>>(name: impl Into<String>, metric_headers: Vec<S>) -> Self {
        Self {
            name: name.into(),
            metric_headers: metric_headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Get the run name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get every header, `epoch_name` first.
    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        std::iter::once(EPOCH_COLUMN)
            .chain(self.metric_headers.iter().map(String::as_str))
            .collect()
    }

    /// Get the metric headers (without `epoch_name`).
    #[must_use]
    pub fn metric_headers(&self) -> &[String] {
        &self.metric_headers
    }

    /// Get the rows in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[EpochRecord] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row.
    ///
    /// # Errors
    ///
    /// Returns error if the row width differs from the metric header count.
    pub fn push(&mut self, record: EpochRecord) -> Result<()> {
        if record.values().len() != self.metric_headers.len() {
            return Err(Error::Other(format!(
                "Row '{}' has {} values, table '{}' expects {}",
                record.epoch_name(),
                record.values().len(),
                self.name,
                self.metric_headers.len()
            )));
        }
        self.rows.push(record);
        Ok(())
    }

    /// Position of a metric column among the metric headers.
    #[must_use]
    pub fn metric_index(&self, column: &str) -> Option<usize> {
        self.metric_headers.iter().position(|h| h == column)
    }

    /// Get the `(epoch, value)` series of a metric column, in row order.
    ///
    /// Rows whose label has no epoch number, or whose value is not a
    /// finite number, are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingColumn`] if `column` is not a metric header.
    pub fn series(&self, column: &str) -> Result<Vec<(u64, f64)>> {
        let index = self
            .metric_index(column)
            .ok_or_else(|| Error::MissingColumn {
                column: column.to_string(),
                table: self.name.clone(),
                available: self.headers().join(", "),
            })?;

        let mut points = Vec::with_capacity(self.rows.len());
        for row in &self.rows {
            let Some(epoch) = row.epoch_number() else {
                warn!(
                    table = %self.name,
                    epoch_name = row.epoch_name(),
                    "Skipping row without an epoch number"
                );
                continue;
            };
            match row.value(index) {
                Some(value) if value.is_finite() => points.push((epoch, value)),
                _ => warn!(
                    table = %self.name,
                    epoch_name = row.epoch_name(),
                    column,
                    "Skipping row with a non-numeric value"
                ),
            }
        }

        Ok(points)
    }
}
