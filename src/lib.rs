//! # epoch-curves: Training Metric Extraction and Curve Plotting
//!
//! **Version**: 0.1.0
//!
//! Two offline utilities for an ML experiment workflow, sharing one
//! tabular data model:
//!
//! - **extract** (`extract-metrics`): walk a folder of run subfolders,
//!   pull per-class validation scores out of each run's YAML log with
//!   regex matching, and write one `.xlsx` workbook per run.
//! - **plot** (`plot-curves`): read a folder of those workbooks and draw
//!   one chosen metric across epochs, one line per workbook.
//!
//! ## Design Principles
//!
//! - **Best effort**: a bad run or workbook is logged and skipped, the
//!   rest of the batch still completes
//! - **No clobbering**: outputs take a numeric suffix instead of
//!   replacing existing files, unless overwrite is requested
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use epoch_curves::config::{ExtractConfig, PlotConfig};
//! use epoch_curves::{extract, plot};
//!
//! let extract_config = ExtractConfig::builder()
//!     .folder("T_MIX_")
//!     .save_folder("excel")
//!     .build()?;
//! extract::extract_tree(&extract_config)?;
//!
//! let plot_config = PlotConfig::builder("mei_mAP50").data_dir("excel").build()?;
//! plot::plot_training_curves(&plot_config)?;
//! # Ok::<(), epoch_curves::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod experiment;
pub mod extract;
pub mod logging;
pub mod paths;
pub mod plot;
pub mod sheet;

pub use error::{Error, Result};
