//! Extract per-class validation metrics from YAML logs into Excel workbooks.
//!
//! Run with: cargo run --bin extract-metrics -- --folder T_MIX_ --save-folder excel

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use epoch_curves::config::ExtractConfig;
use epoch_curves::{extract, logging};

#[derive(Parser)]
#[command(name = "extract-metrics")]
#[command(about = "Extract data from YAML and save to Excel")]
#[command(version)]
struct Cli {
    /// Parent folder; each subfolder is one run
    #[arg(long, default_value = "T_MIX_")]
    folder: PathBuf,

    /// YAML file name to look for in each subfolder
    #[arg(long, alias = "yaml_name", default_value = "val_get_inf.yaml")]
    yaml_name: String,

    /// Folder to save the Excel files
    #[arg(long, alias = "save_folder", default_value = "excel")]
    save_folder: PathBuf,

    /// Overwrite existing workbooks instead of adding a numeric suffix
    #[arg(long)]
    overwrite: bool,

    /// Class labels in log line order
    #[arg(long, value_delimiter = ',', default_values = ["mei", "shi"])]
    classes: Vec<String>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = ExtractConfig::builder()
        .folder(cli.folder)
        .yaml_name(cli.yaml_name)
        .save_folder(cli.save_folder)
        .overwrite(cli.overwrite)
        .classes(cli.classes)
        .build()
        .context("invalid extraction options")?;

    let summary = extract::extract_tree(&config)
        .with_context(|| format!("failed to extract runs under {}", config.folder().display()))?;

    info!(
        written = summary.written().len(),
        skipped = summary.skipped().len(),
        "Extraction finished"
    );
    Ok(())
}
