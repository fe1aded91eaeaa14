//! navslice - navigation icon slicer
//!
//! Cuts the navigation sprite sheet into five 96x96 PNG icons.

mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use navslice_config::SliceConfig;
use navslice_slicer::{IconSlicer, SliceError};

use cli::Cli;

/// Initialize tracing on stderr; stdout is reserved for the report.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let slicer = IconSlicer::new(SliceConfig::with_source(cli.source));

    match slicer.slice() {
        Ok(written) => {
            print_report(&written);
            ExitCode::SUCCESS
        }
        Err(e) => {
            debug!("Slicing failed: {:?}", e);
            for line in failure_message(&e) {
                println!("{}", line);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_report(written: &[PathBuf]) {
    println!("Generated nav icons:");
    for path in written {
        println!("- {}", path.display());
    }
}

/// User-facing lines for a failed run.
fn failure_message(err: &SliceError) -> Vec<String> {
    let mut lines = vec![err.to_string()];
    if matches!(err, SliceError::SourceNotFound { .. }) {
        lines.push("Usage: navslice [source-image-path]".to_string());
    }
    lines
}
