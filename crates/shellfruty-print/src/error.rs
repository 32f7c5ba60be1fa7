//! # Print Error Types
//!
//! ```text
//! ConfigError   ─┐
//! CoreError     ─┤
//! DispatchError ─┼──► PrintError ──► `ticket` exit status
//! io / json     ─┘
//! ```
//!
//! `DispatchError` never escapes [`PrinterService::print_receipt`]; it is
//! logged there. It only reaches `PrintError` through direct dispatcher use.
//!
//! [`PrinterService::print_receipt`]: crate::service::PrinterService::print_receipt

use shellfruty_core::CoreError;
use thiserror::Error;

use crate::config::ConfigError;

/// Failure handing a ticket to the print handler.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The OS has no handler for the scheme, or refused to launch it.
    #[error("print handler could not be launched: {0}")]
    Launch(#[source] std::io::Error),

    /// Writing the deep link to the output stream failed.
    #[error("could not write print link: {0}")]
    Write(#[source] std::io::Error),

    /// The dispatcher cannot be used right now.
    #[error("print handler unavailable: {0}")]
    Unavailable(String),
}

/// Top-level error for the print layer.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The sales API answered with `success: false`.
    #[error("Sales API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Layout error: {0}")]
    Layout(#[from] CoreError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Convenience type alias for Results with PrintError.
pub type PrintResult<T> = Result<T, PrintError>;
