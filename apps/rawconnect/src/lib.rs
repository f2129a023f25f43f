//! # RawConnect Console Library
//!
//! App layer of the RawConnect marketplace: view state, commands and the
//! line-based console that drives them.
//!
//! ## Module Organization
//! ```text
//! rawconnect_app/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── rawconnect.toml + env overrides
//! ├── console.rs      ◄─── Line in, JSON out
//! ├── notify.rs       ◄─── Toast queue
//! ├── state/
//! │   ├── mod.rs      ◄─── Tabs, AppState, mounted view
//! │   ├── vendor.rs   ◄─── Search, cart, favorites
//! │   └── supplier.rs ◄─── Catalog, orders, add-product form
//! ├── commands/
//! │   ├── mod.rs      ◄─── Line grammar & dispatch
//! │   ├── navigation.rs
//! │   ├── vendor.rs
//! │   └── supplier.rs
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod notify;
pub mod state;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use state::AppState;

/// Startup options collected from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Config file path; the platform default is used when absent.
    pub config: Option<PathBuf>,
    /// Read commands from this file instead of stdin.
    pub script: Option<PathBuf>,
    /// Pretty-print responses, regardless of config.
    pub pretty: bool,
}

/// Runs the console until end of input or `quit`.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • defaults < rawconnect.toml < RAWCONNECT_* env                     │
/// │     • a broken file falls back to defaults                              │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • RUST_LOG wins, else [logging] filter                              │
/// │     • written to stderr                                                 │
/// │                                                                         │
/// │  3. Mount the Home Tab ───────────────────────────────────────────────► │
/// │                                                                         │
/// │  4. Read Commands ────────────────────────────────────────────────────► │
/// │     • --script file, or stdin                                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(options: RunOptions) -> Result<(), Box<dyn std::error::Error>> {
    let (config, load_error) = match AppConfig::load(options.config) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    init_tracing(&config.logging.filter);

    if let Some(err) = load_error {
        warn!("Failed to load config: {}. Using defaults.", err);
    }

    info!(market = %config.market.name, "Starting RawConnect console");

    let pretty = options.pretty || config.console.pretty;
    let mut app = AppState::new(config);
    let stdout = io::stdout();

    match options.script {
        Some(path) => {
            info!(?path, "Reading commands from script");
            let reader = BufReader::new(File::open(&path)?);
            console::run_console(&mut app, reader, stdout.lock(), pretty)?;
        }
        None => {
            console::run_console(&mut app, io::stdin().lock(), stdout.lock(), pretty)?;
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every command as it runs
/// - `RUST_LOG=rawconnect_core=debug` - Catalog and order mutations only
/// - Default: the `[logging] filter` from config
fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
