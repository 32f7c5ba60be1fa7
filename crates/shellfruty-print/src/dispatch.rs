//! # Print Dispatch
//!
//! The last hop of a ticket: a `rawbt:base64,...` deep link handed to
//! whatever can print it. Dispatch is fire-and-forget, so there is no
//! acknowledgement, retry or timeout.
//!
//! ```text
//! PrinterService ──► PrintDispatcher::dispatch(uri)
//!                        ├── UriLauncher      → OS default handler (RawBT)
//!                        └── WriterDispatcher → stdout / file / buffer
//! ```

use std::io::Write;
use std::sync::Mutex;

use tracing::debug;

use crate::error::DispatchError;

/// Something that accepts a print deep link.
pub trait PrintDispatcher: Send + Sync {
    fn dispatch(&self, uri: &str) -> Result<(), DispatchError>;
}

/// Opens the deep link with the operating system's default handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriLauncher;

impl PrintDispatcher for UriLauncher {
    fn dispatch(&self, uri: &str) -> Result<(), DispatchError> {
        debug!(bytes = uri.len(), "launching print handler");
        webbrowser::open(uri).map_err(DispatchError::Launch)
    }
}

/// Writes each deep link on its own line, for piping into another tool.
#[derive(Debug)]
pub struct WriterDispatcher<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterDispatcher<W> {
    pub fn new(writer: W) -> Self {
        WriterDispatcher {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> Result<W, DispatchError> {
        self.writer
            .into_inner()
            .map_err(|_| DispatchError::Unavailable("output stream lock poisoned".to_string()))
    }
}

impl<W: Write + Send> PrintDispatcher for WriterDispatcher<W> {
    fn dispatch(&self, uri: &str) -> Result<(), DispatchError> {
        let mut writer = self
            .writer
            .lock()
            .map_err(|_| DispatchError::Unavailable("output stream lock poisoned".to_string()))?;
        writeln!(writer, "{}", uri).map_err(DispatchError::Write)?;
        writer.flush().map_err(DispatchError::Write)
    }
}

impl<D: PrintDispatcher + ?Sized> PrintDispatcher for Box<D> {
    fn dispatch(&self, uri: &str) -> Result<(), DispatchError> {
        (**self).dispatch(uri)
    }
}
