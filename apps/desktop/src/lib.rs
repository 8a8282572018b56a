//! # Counter Desktop Library
//!
//! Core library for the Counter POS billing counter.
//! Holds the state, the commands and the terminal shell; `main.rs` only
//! calls [`run`].
//!
//! ## Module Organization
//! ```text
//! counter_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── catalog.rs  ◄─── Read-only catalog
//! │   ├── cart.rs     ◄─── Cart state management
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── InvoiceResponse, clock
//! │   ├── catalog.rs  ◄─── Catalog listing
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   └── receipt.rs  ◄─── Receipt export command
//! ├── shell.rs        ◄─── stdin/stdout front end
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Output Streams
//! stdout is the counter display; logs go to stderr so the two never mix.

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use counter_receipt::SystemOpener;
use state::{CartState, CatalogState, ConfigState};

/// Every piece of state a command may ask for.
#[derive(Debug, Clone)]
pub struct AppState {
    pub catalog: CatalogState,
    pub cart: CartState,
    pub config: ConfigState,
}

impl AppState {
    /// Departmental store catalog, empty cart, given configuration.
    pub fn new(config: ConfigState) -> Self {
        AppState {
            catalog: CatalogState::default(),
            cart: CartState::new(),
            config,
        }
    }
}

/// Runs the billing counter until the operator quits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, stderr                        │
/// │     • Default: info,counter=debug; RUST_LOG overrides                   │
/// │                                                                         │
/// │  2. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CatalogState: departmental store catalog                          │
/// │     • CartState: Empty cart with Mutex for thread-safe updates          │
/// │     • ConfigState: Default configuration                                │
/// │                                                                         │
/// │  3. Run Shell ────────────────────────────────────────────────────────► │
/// │     • Read stdin line by line                                           │
/// │     • Print invoices and export results to stdout                       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() {
    init_tracing();

    info!("Starting Counter POS");

    let app = AppState::new(ConfigState::default());
    info!(
        export_dir = %app.config.export_dir.display(),
        items = app.catalog.catalog().len(),
        "State initialized"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = shell::run(&app, &SystemOpener::platform(), stdin.lock(), stdout.lock()) {
        error!(error = %err, "Terminal I/O failed");
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages everywhere
/// - `RUST_LOG=counter_core=trace` - Trace for one crate only
/// - Default: `info,counter=debug`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,counter=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
