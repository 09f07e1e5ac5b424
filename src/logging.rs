//! Logging setup shared by the command line tools

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Crate and binary targets covered by the default filter.
const TARGETS: [&str; 3] = ["epoch_curves", "extract_metrics", "plot_curves"];

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set. Otherwise the library and both binaries log
/// at `info`, or at `debug` when `verbose` is true. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(default_directives(level))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn default_directives(level: &str) -> String {
    TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
