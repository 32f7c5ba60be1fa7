//! # shellfruty-print
//!
//! The side-effecting half of receipt printing: settings from the
//! environment, sale and branch JSON from disk, and the hand-off of the
//! `rawbt:base64,...` deep link to whatever prints it.
//!
//! ## Module Organization
//! ```text
//! shellfruty_print/
//! ├── config.rs    PrinterSettings (env) → LayoutConfig
//! ├── catalog.rs   VentaDetalle / sucursal JSON loading
//! ├── dispatch.rs  PrintDispatcher, UriLauncher, WriterDispatcher
//! ├── service.rs   PrinterService (best-effort printing)
//! ├── error.rs     PrintError, DispatchError
//! └── bin/ticket.rs
//! ```
//!
//! ## Example
//! ```rust
//! use shellfruty_core::{ReceiptFormatter, SaleRecord};
//! use shellfruty_print::{PrinterService, WriterDispatcher};
//!
//! let service = PrinterService::new(ReceiptFormatter::default(), WriterDispatcher::new(Vec::new()));
//! let sale = SaleRecord { sale_id: 3, ..SaleRecord::default() };
//! assert!(service.print_receipt(&sale, "Centro").is_dispatched());
//! ```

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod service;

pub use config::{ConfigError, PrinterSettings};
pub use dispatch::{PrintDispatcher, UriLauncher, WriterDispatcher};
pub use error::{DispatchError, PrintError, PrintResult};
pub use service::{PrintOutcome, PrinterService};

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,shellfruty=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so stdout carries only the ticket output.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shellfruty_core=trace` - Formatter internals only
/// - Default: INFO, DEBUG for shellfruty crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
