//! Tests for error types

use std::path::PathBuf;

use epoch_curves::Error;

#[test]
fn test_invalid_config_error() {
    let error = Error::InvalidConfig("resolution must be between 1 and 10".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Invalid configuration"));
    assert!(error_str.contains("between 1 and 10"));
}

#[test]
fn test_missing_column_error() {
    let error = Error::MissingColumn {
        column: "mei_F1".to_string(),
        table: "run-a".to_string(),
        available: "epoch_name, mei_Recall".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Column 'mei_F1' not found in run-a"));
    assert!(error_str.contains("Available columns: epoch_name, mei_Recall"));
}

#[test]
fn test_sheet_read_error() {
    let error = Error::SheetRead {
        path: PathBuf::from("excel/run.xlsx"),
        message: "invalid zip header".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("Spreadsheet read error"));
    assert!(error_str.contains("excel/run.xlsx"));
    assert!(error_str.contains("invalid zip header"));
}

#[test]
fn test_yaml_error() {
    let source = serde_yaml::from_str::<Vec<String>>("key: value").unwrap_err();
    let error = Error::Yaml {
        path: PathBuf::from("run/val_get_inf.yaml"),
        source,
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("YAML parse error"));
    assert!(error_str.contains("val_get_inf.yaml"));
}

#[test]
fn test_render_error() {
    let error = Error::Render("no points to plot".to_string());
    assert_eq!(format!("{error}"), "Render error: no points to plot");
}

#[test]
fn test_io_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error: Error = io_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("IO error"));
}

#[test]
fn test_other_error() {
    let error = Error::Other("custom error message".to_string());
    let error_str = format!("{error}");
    assert_eq!(error_str, "custom error message");
}

#[test]
fn test_error_debug() {
    let error = Error::Render("x".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("Render"));
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> epoch_curves::Result<i32> {
        Err(Error::Other("test error".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
