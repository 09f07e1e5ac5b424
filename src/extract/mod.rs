//! Validation logs → spreadsheets
//!
//! Each direct subfolder of the input folder is one run. Its YAML log file
//! (a sequence of strings) is matched line by line against per-class
//! patterns and the resulting epochs are written to
//! `{save_folder}/{subfolder}.xlsx`.
//!
//! ```rust,no_run
//! use epoch_curves::config::ExtractConfig;
//! use epoch_curves::extract::extract_tree;
//!
//! let config = ExtractConfig::builder()
//!     .folder("runs")
//!     .save_folder("excel")
//!     .build()?;
//! let summary = extract_tree(&config)?;
//! println!("{} workbooks written", summary.written().len());
//! # Ok::<(), epoch_curves::Error>(())
//! ```

mod extractor;
mod layout;
mod log_line;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

pub use extractor::LogExtractor;
pub use layout::{ColumnLayout, Metric};
pub use log_line::{ClassLinePattern, ClassScores};

use crate::config::ExtractConfig;
use crate::paths::{list_subdirectories, unique_path};
use crate::sheet::{write_run_table, DEFAULT_SHEET_NAME};
use crate::{Error, Result};

/// Why a run subfolder produced no workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The configured log file is not present.
    MissingLog,
    /// The log file exists but could not be read or parsed.
    Unreadable(String),
}

/// Outcome of one [`extract_tree`] call.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    written: Vec<PathBuf>,
    skipped: Vec<(String, SkipReason)>,
}

impl ExtractSummary {
    /// Workbooks written, in processing order.
    #[must_use]
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Subfolders that produced no workbook.
    #[must_use]
    pub fn skipped(&self) -> &[(String, SkipReason)] {
        &self.skipped
    }
}

/// Read a YAML log document as a list of lines.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not a YAML sequence of
/// strings.
pub fn read_log_lines(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(&text).map_err(|source| Error::Yaml {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract every run under `config.folder()` into workbooks.
///
/// Subfolders are visited in name order. A missing or unreadable log file
/// skips that run with a log line; it does not abort the others. A run
/// whose log yields no epochs still gets a header-only workbook.
///
/// # Errors
///
/// Returns error if the input folder cannot be listed or a workbook
/// cannot be written.
pub fn extract_tree(config: &ExtractConfig) -> Result<ExtractSummary> {
    let extractor = LogExtractor::new(config.classes())?;
    let mut summary = ExtractSummary::default();

    for (run_name, run_dir) in list_subdirectories(config.folder())? {
        let log_path = run_dir.join(config.yaml_name());
        if !log_path.is_file() {
            warn!(
                "YAML file {} does not exist in {}",
                config.yaml_name(),
                run_dir.display()
            );
            summary.skipped.push((run_name, SkipReason::MissingLog));
            continue;
        }

        let lines = match read_log_lines(&log_path) {
            Ok(lines) => lines,
            Err(e) => {
                error!(path = %log_path.display(), "Failed to read log: {e}");
                summary
                    .skipped
                    .push((run_name, SkipReason::Unreadable(e.to_string())));
                continue;
            }
        };

        let table = extractor.extract(&run_name, &lines)?;
        let target = config.save_folder().join(format!("{run_name}.xlsx"));
        let target = if config.overwrite() {
            target
        } else {
            unique_path(&target)
        };

        write_run_table(&table, &target, DEFAULT_SHEET_NAME)?;
        info!(epochs = table.len(), "Data saved to: {}", target.display());
        summary.written.push(target);
    }

    Ok(summary)
}
