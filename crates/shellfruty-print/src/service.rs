//! # Printer Service
//!
//! Best-effort receipt printing. A sale is already committed when its
//! ticket is printed, so nothing here may fail the caller.
//!
//! ## Print Flow
//! ```text
//! SaleRecord ──► ReceiptFormatter::format_ticket ──► encode_for_transport
//!                                                          │
//!                                                          ▼
//!                                          "rawbt:base64,<payload>"
//!                                                          │
//!                                                          ▼
//!                                          PrintDispatcher::dispatch
//!                                               │              │
//!                                              Ok             Err
//!                                               │              │
//!                                   PrintOutcome::Dispatched   warn! + Unavailable
//! ```

use shellfruty_core::receipt::{encode_for_transport, print_uri, ReceiptFormatter};
use shellfruty_core::{BranchDirectory, SaleRecord, DEFAULT_PRINT_SCHEME};
use tracing::{info, warn};

use crate::dispatch::PrintDispatcher;
use crate::error::DispatchError;

/// What happened to a print request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintOutcome {
    /// The deep link was handed over.
    Dispatched { bytes: usize },
    /// The print handler could not be reached; the failure was logged.
    Unavailable,
}

impl PrintOutcome {
    pub fn is_dispatched(&self) -> bool {
        matches!(self, PrintOutcome::Dispatched { .. })
    }

    /// Bytes handed over, or an error for callers that must not treat an
    /// undelivered ticket as success (piped CLI output).
    pub fn into_result(self) -> Result<usize, DispatchError> {
        match self {
            PrintOutcome::Dispatched { bytes } => Ok(bytes),
            PrintOutcome::Unavailable => Err(DispatchError::Unavailable(
                "print link was not delivered".to_string(),
            )),
        }
    }
}

/// Formats sales and forwards them to a [`PrintDispatcher`].
#[derive(Debug)]
pub struct PrinterService<D> {
    formatter: ReceiptFormatter,
    dispatcher: D,
    scheme: String,
}

impl<D: PrintDispatcher> PrinterService<D> {
    pub fn new(formatter: ReceiptFormatter, dispatcher: D) -> Self {
        PrinterService {
            formatter,
            dispatcher,
            scheme: DEFAULT_PRINT_SCHEME.to_string(),
        }
    }

    /// Uses `scheme` instead of `rawbt` for the deep link.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn formatter(&self) -> &ReceiptFormatter {
        &self.formatter
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Ticket text for `sale`.
    pub fn render(&self, sale: &SaleRecord, branch_name: &str) -> String {
        self.formatter.format_ticket(sale, branch_name)
    }

    /// Deep link for `sale`: `{scheme}:base64,{payload}`.
    pub fn payload(&self, sale: &SaleRecord, branch_name: &str) -> String {
        let ticket = self.render(sale, branch_name);
        print_uri(&self.scheme, &encode_for_transport(&ticket))
    }

    /// Formats, encodes and dispatches the ticket for `sale`.
    ///
    /// Dispatch errors are logged at WARN and reported as
    /// [`PrintOutcome::Unavailable`]; they never propagate.
    pub fn print_receipt(&self, sale: &SaleRecord, branch_name: &str) -> PrintOutcome {
        let uri = self.payload(sale, branch_name);

        match self.dispatcher.dispatch(&uri) {
            Ok(()) => {
                info!(
                    sale_id = sale.sale_id,
                    bytes = uri.len(),
                    scheme = %self.scheme,
                    "receipt sent to print handler"
                );
                PrintOutcome::Dispatched { bytes: uri.len() }
            }
            Err(error) => {
                warn!(
                    sale_id = sale.sale_id,
                    scheme = %self.scheme,
                    %error,
                    "print handler unavailable, receipt not printed"
                );
                PrintOutcome::Unavailable
            }
        }
    }

    /// Like [`print_receipt`](Self::print_receipt), resolving the branch
    /// name from the sale's `branch_id`.
    pub fn print_with_directory(
        &self,
        sale: &SaleRecord,
        branches: &BranchDirectory,
    ) -> PrintOutcome {
        let branch_name = branches.ticket_name(sale.branch_id);
        self.print_receipt(sale, &branch_name)
    }
}
