//! Plot training curves from a folder of per-epoch metric workbooks.
//!
//! Run with: cargo run --bin plot-curves -- --column mei_mAP50

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use epoch_curves::config::PlotConfig;
use epoch_curves::{logging, plot};

#[derive(Parser)]
#[command(name = "plot-curves")]
#[command(about = "Plot training curves from multiple Excel files")]
#[command(version)]
struct Cli {
    /// Folder containing the Excel files
    #[arg(long, default_value = "excel")]
    data: PathBuf,

    /// Column name to plot on the Y axis
    #[arg(long, alias = "Column")]
    column: String,

    /// Path to save the plot image (the column name is prefixed to the file name)
    #[arg(long, default_value = "IMG/curves.png")]
    save: PathBuf,

    /// Resolution factor for the output image (dpi = 100 x factor)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(1..=10))]
    resolution: u32,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = PlotConfig::builder(cli.column)
        .data_dir(cli.data)
        .save_path(cli.save)
        .resolution(cli.resolution)
        .build()
        .context("invalid plot options")?;

    plot::plot_training_curves(&config).with_context(|| {
        format!(
            "failed to plot '{}' from {}",
            config.column(),
            config.data_dir().display()
        )
    })?;

    Ok(())
}
