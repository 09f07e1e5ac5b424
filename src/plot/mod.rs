//! Spreadsheets → training curve chart
//!
//! Every `.xlsx` workbook in the data folder contributes one line: the
//! chosen metric column against the epoch number parsed from
//! `epoch_name`. The chart is written next to the configured save path
//! with the column name as a prefix, never overwriting an existing image.
//!
//! ```rust,no_run
//! use epoch_curves::config::PlotConfig;
//! use epoch_curves::plot::plot_training_curves;
//!
//! let config = PlotConfig::builder("mei_mAP50")
//!     .data_dir("excel")
//!     .save_path("IMG/curves.png")
//!     .resolution(2)
//!     .build()?;
//! if let Some(path) = plot_training_curves(&config)? {
//!     println!("chart written to {}", path.display());
//! }
//! # Ok::<(), epoch_curves::Error>(())
//! ```

mod chart;

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

pub use chart::{draw_curves, render_to_file, ChartStyle, Curve, ImageFormat};

use crate::config::PlotConfig;
use crate::paths::{ensure_parent_dir, list_files_with_extension, prefixed_path, unique_path};
use crate::sheet::read_run_table;
use crate::Result;

/// Load one curve per workbook in `data_dir`.
///
/// # Errors
///
/// Returns error if `data_dir` cannot be listed.
pub fn load_curves(data_dir: &Path, column: &str) -> Result<Vec<Curve>> {
    let workbooks = list_files_with_extension(data_dir, "xlsx")?;
    Ok(curves_from_workbooks(&workbooks, column))
}

/// Load one curve per workbook path, in the given order.
///
/// Workbooks that cannot be read, lack the column, or have no usable
/// rows are logged and skipped.
#[must_use]
pub fn curves_from_workbooks(workbooks: &[PathBuf], column: &str) -> Vec<Curve> {
    let mut curves = Vec::new();

    for path in workbooks {
        info!("Reading file: {}", path.display());

        let table = match read_run_table(path) {
            Ok(table) => table,
            Err(e) => {
                error!("Error reading {}: {e}", path.display());
                continue;
            }
        };

        let points = match table.series(column) {
            Ok(points) => points,
            Err(e) => {
                warn!("Skipping {}: {e}", path.display());
                continue;
            }
        };

        if points.is_empty() {
            warn!("Skipping {}: no plottable rows for '{column}'", path.display());
            continue;
        }

        curves.push(Curve::new(table.name(), points));
    }

    curves
}

/// Output path for a chart of `column`: the save path with the column name
/// prefixed to its file name, made unique against existing files. A save
/// path without an extension is written as PNG.
#[must_use]
pub fn chart_output_path(save_path: &Path, column: &str) -> PathBuf {
    let mut base = save_path.to_path_buf();
    if base.extension().is_none() {
        base.set_extension("png");
    }
    unique_path(&prefixed_path(&base, column))
}

/// Plot `config.column()` from every workbook in `config.data_dir()`.
///
/// Returns the written image path, or `None` when there was nothing to
/// plot (no workbooks, or none with usable data for the column).
///
/// # Errors
///
/// Returns error if the data folder cannot be listed, the output folder
/// cannot be created, or rendering fails.
pub fn plot_training_curves(config: &PlotConfig) -> Result<Option<PathBuf>> {
    let data_dir = config.data_dir();
    let workbooks = list_files_with_extension(data_dir, "xlsx")?;
    if workbooks.is_empty() {
        info!("No Excel files found in directory: {}", data_dir.display());
        return Ok(None);
    }

    let curves = curves_from_workbooks(&workbooks, config.column());
    if curves.is_empty() {
        warn!(
            "No workbook in {} has plottable data for '{}'",
            data_dir.display(),
            config.column()
        );
        return Ok(None);
    }

    let output = chart_output_path(config.save_path(), config.column());
    ensure_parent_dir(&output)?;

    let style = ChartStyle {
        size: config.pixel_size(),
        dpi: config.dpi(),
        column: config.column().to_string(),
    };
    render_to_file(&output, &style, &curves)?;

    info!(curves = curves.len(), "Chart saved to: {}", output.display());
    Ok(Some(output))
}
