//! End-to-end tests for the YAML → workbook extraction pipeline
//!
//! Each test builds a scratch run tree, runs `extract_tree`, and reads the
//! workbooks back through the same reader the plotter uses.

use std::fs;
use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};
use epoch_curves::config::ExtractConfig;
use epoch_curves::extract::{extract_tree, SkipReason};
use epoch_curves::sheet::read_run_table;

const LOG_NAME: &str = "val_get_inf.yaml";

const TWO_EPOCHS: &str = r#"- "                 mei        120        348      0.912      0.874      0.903      0.611"
- "                 shi        120        290      0.801      0.755      0.790      0.498"
- "                 mei        120        348      0.920      0.880      0.910      0.620"
- "                 shi        120        290      0.810      0.760      0.800      0.505"
"#;

fn write_run(root: &Path, name: &str, log: Option<&str>) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    if let Some(text) = log {
        fs::write(dir.join(LOG_NAME), text).unwrap();
    }
}

fn config(input: &Path, output: &Path, overwrite: bool) -> ExtractConfig {
    ExtractConfig::builder()
        .folder(input)
        .save_folder(output)
        .overwrite(overwrite)
        .build()
        .unwrap()
}

#[test]
fn test_extract_tree_writes_one_workbook_per_run() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let save = output.path().join("excel");

    write_run(input.path(), "run_a", Some(TWO_EPOCHS));
    write_run(input.path(), "run_b", None);
    write_run(input.path(), "run_c", Some("key: value\n"));
    fs::write(input.path().join("notes.txt"), "not a run").unwrap();

    let summary = extract_tree(&config(input.path(), &save, false)).unwrap();

    assert_eq!(summary.written(), &[save.join("run_a.xlsx")]);
    assert_eq!(summary.skipped().len(), 2);
    assert_eq!(summary.skipped()[0], ("run_b".to_string(), SkipReason::MissingLog));
    assert_eq!(summary.skipped()[1].0, "run_c");
    assert!(matches!(summary.skipped()[1].1, SkipReason::Unreadable(_)));
}

#[test]
fn test_workbook_layout() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(input.path(), "run_a", Some(TWO_EPOCHS));

    let summary = extract_tree(&config(input.path(), output.path(), false)).unwrap();
    let path = &summary.written()[0];

    let workbook: Xlsx<_> = open_workbook(path).unwrap();
    assert_eq!(workbook.sheet_names(), vec!["Extracted Data".to_string()]);

    let table = read_run_table(path).unwrap();
    assert_eq!(table.name(), "run_a");
    assert_eq!(
        table.headers(),
        vec![
            "epoch_name",
            "mei_Recall",
            "shi_Recall",
            "mei_Precision",
            "shi_Precision",
            "mei_mAP50",
            "shi_mAP50",
            "mei_mAP50-95",
            "shi_mAP50-95",
        ]
    );
    assert_eq!(table.len(), 2);
    assert_eq!(table.rows()[0].epoch_name(), "epoch_1");
    assert_eq!(
        table.rows()[0].values(),
        &[0.874, 0.755, 0.912, 0.801, 0.903, 0.790, 0.611, 0.498]
    );
    assert_eq!(table.rows()[1].epoch_name(), "epoch_2");
    assert_eq!(
        table.series("shi_mAP50-95").unwrap(),
        vec![(1, 0.498), (2, 0.505)]
    );
}

#[test]
fn test_existing_workbook_gets_suffix() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(input.path(), "run_a", Some(TWO_EPOCHS));

    let cfg = config(input.path(), output.path(), false);
    extract_tree(&cfg).unwrap();
    let second = extract_tree(&cfg).unwrap();
    let third = extract_tree(&cfg).unwrap();

    assert_eq!(second.written(), &[output.path().join("run_a_1.xlsx")]);
    assert_eq!(third.written(), &[output.path().join("run_a_2.xlsx")]);
}

#[test]
fn test_overwrite_replaces_workbook() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(input.path(), "run_a", Some(TWO_EPOCHS));

    let cfg = config(input.path(), output.path(), true);
    extract_tree(&cfg).unwrap();
    let again = extract_tree(&cfg).unwrap();

    assert_eq!(again.written(), &[output.path().join("run_a.xlsx")]);
    assert_eq!(fs::read_dir(output.path()).unwrap().count(), 1);
}

#[test]
fn test_unmatched_log_still_writes_headers() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_run(input.path(), "run_x", Some("- \"nothing useful\"\n- \"here either\"\n"));

    let summary = extract_tree(&config(input.path(), output.path(), false)).unwrap();
    let table = read_run_table(&summary.written()[0]).unwrap();

    assert!(table.is_empty());
    assert_eq!(table.headers().len(), 9);
}

#[test]
fn test_custom_classes_and_log_name() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let dir = input.path().join("single");
    fs::create_dir_all(&dir).unwrap();
    fs::write(
        dir.join("val.yaml"),
        "- car 10 40 0.5 0.6 0.7 0.4\n- car 10 40 0.55 0.65 0.75 0.45\n",
    )
    .unwrap();

    let cfg = ExtractConfig::builder()
        .folder(input.path())
        .save_folder(output.path())
        .yaml_name("val.yaml")
        .classes(["car"])
        .build()
        .unwrap();
    let summary = extract_tree(&cfg).unwrap();
    let table = read_run_table(&summary.written()[0]).unwrap();

    assert_eq!(
        table.headers(),
        vec!["epoch_name", "car_Recall", "car_Precision", "car_mAP50", "car_mAP50-95"]
    );
    assert_eq!(table.series("car_Recall").unwrap(), vec![(1, 0.6), (2, 0.65)]);
}

#[test]
fn test_missing_input_folder_is_error() {
    let output = tempfile::tempdir().unwrap();
    let cfg = config(&output.path().join("absent"), output.path(), false);
    assert!(extract_tree(&cfg).is_err());
}
