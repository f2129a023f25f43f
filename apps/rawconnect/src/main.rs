//! # RawConnect Console Entry Point
//!
//! ```text
//! $ rawconnect --pretty
//! start vendor
//! search chandni
//! cart 2 0
//! quit
//! ```
//!
//! The actual setup lives in lib.rs so it can be tested.

use std::path::PathBuf;

use clap::Parser;

/// Marketplace console connecting street-food vendors with raw-material suppliers.
#[derive(Parser, Debug)]
#[command(name = "rawconnect", version, about)]
struct Cli {
    /// Path to a rawconnect.toml config file
    #[arg(long, env = "RAWCONNECT_CONFIG")]
    config: Option<PathBuf>,

    /// Read commands from a file instead of stdin
    #[arg(long)]
    script: Option<PathBuf>,

    /// Pretty-print JSON responses
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    rawconnect_app::run(rawconnect_app::RunOptions {
        config: cli.config,
        script: cli.script,
        pretty: cli.pretty,
    })
}
