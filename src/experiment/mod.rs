//! Experiment metrics data model
//!
//! Both tools speak the same tabular shape: one table per run, one row
//! per epoch.
//!
//! ## Schema Overview
//!
//! ```text
//! RunTable (one per subfolder / workbook)
//!    │
//!    └──< EpochRecord (N) [epoch_name + metric values]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use epoch_curves::experiment::{EpochRecord, RunTable};
//!
//! let mut table = RunTable::new("yolo-mix", vec!["mei_Recall", "shi_Recall"]);
//! table.push(EpochRecord::new("epoch_1", vec![0.61, 0.58]))?;
//! table.push(EpochRecord::new("epoch_2", vec![0.66, 0.63]))?;
//!
//! let curve = table.series("mei_Recall")?;
//! assert_eq!(curve, vec![(1, 0.61), (2, 0.66)]);
//! # Ok::<(), epoch_curves::Error>(())
//! ```

mod epoch_record;
mod run_table;

pub use epoch_record::{parse_epoch_number, EpochRecord};
pub use run_table::{RunTable, EPOCH_COLUMN};
