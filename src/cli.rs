//! CLI definitions for navslice.

use std::path::PathBuf;

use clap::Parser;

use navslice_config::DEFAULT_SOURCE;

/// navslice CLI.
#[derive(Parser)]
#[command(name = "navslice")]
#[command(about = "Slice a navigation sprite sheet into fixed-size icons")]
#[command(version)]
pub(crate) struct Cli {
    /// Source image path
    #[arg(default_value = DEFAULT_SOURCE)]
    pub source: PathBuf,
}
