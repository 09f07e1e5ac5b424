//! Spreadsheet storage for run tables
//!
//! Workbooks are the hand-off format between the two tools: the extractor
//! writes one `.xlsx` per run, the plotter reads a folder of them back.
//! Writing uses `rust_xlsxwriter`, reading uses `calamine`.

mod reader;
mod writer;

pub use reader::read_run_table;
pub use writer::{write_run_table, DEFAULT_SHEET_NAME};
