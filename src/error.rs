//! Error types for epoch-curves
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// epoch-curves error types
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration rejected at build time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Log document could not be parsed as a list of lines
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying parser error
        source: serde_yaml::Error,
    },

    /// Spreadsheet could not be opened or decoded
    #[error("Spreadsheet read error in {path}: {message}")]
    SheetRead {
        /// Workbook path
        path: PathBuf,
        /// Reader diagnostic
        message: String,
    },

    /// Spreadsheet could not be written
    #[error("Spreadsheet write error: {0}")]
    SheetWrite(#[from] rust_xlsxwriter::XlsxError),

    /// Requested column is absent from a table
    #[error("Column '{column}' not found in {table}\nAvailable columns: {available}")]
    MissingColumn {
        /// Requested header
        column: String,
        /// Table (run) name
        table: String,
        /// Comma-separated headers that do exist
        available: String,
    },

    /// Chart drawing failed
    #[error("Render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
