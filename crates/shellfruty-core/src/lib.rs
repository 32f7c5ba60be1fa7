//! # shellfruty-core: Pure Receipt Logic for Shellfruty
//!
//! This crate turns a completed sale into the plain-text ticket printed on
//! the 80 mm thermal printer at the counter, and into the base64 payload the
//! print handler consumes. Every function here is pure: no clock, no files,
//! no network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Shellfruty Receipt Printing                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Sales API  (VentaDetalle JSON)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ serde                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ shellfruty-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  receipt  │  │ validation│  │   │
//! │  │   │SaleRecord │  │   Money   │  │ Formatter │  │  tender   │  │   │
//! │  │   │ LineItem  │  │  cents    │  │  layout   │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ "rawbt:base64,..."                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            shellfruty-print (dispatch, settings, CLI)           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Sale records as delivered by the sales API
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`branch`] - Injected branch id → name lookup
//! - [`receipt`] - The ticket formatter and its helpers
//! - [`error`] - Domain error types
//! - [`validation`] - Layout and tender checks
//!
//! ## Example Usage
//!
//! ```rust
//! use shellfruty_core::receipt::{encode_for_transport, ReceiptFormatter};
//! use shellfruty_core::{LineItem, Money, SaleRecord};
//!
//! let sale = SaleRecord {
//!     sale_id: 42,
//!     timestamp: "2025-03-16T14:05:00".to_string(),
//!     line_items: vec![LineItem {
//!         product_name: "Jugo de Limón".to_string(),
//!         quantity: 2,
//!         unit_price: Money::from_cents(1250),
//!         line_total: Money::from_cents(2500),
//!     }],
//!     cash_amount: Money::from_cents(2500),
//!     total_amount: Money::from_cents(2500),
//!     ..SaleRecord::default()
//! };
//!
//! let ticket = ReceiptFormatter::default().format_ticket(&sale, "Centro");
//! assert!(ticket.contains("Jugo de Limon"));
//! assert!(!encode_for_transport(&ticket).is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod branch;
pub mod error;
pub mod money;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use branch::BranchDirectory;
pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use receipt::{LayoutConfig, ReceiptFormatter};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Characters per line on an 80 mm roll with the standard font.
pub const LINE_WIDTH: usize = 48;

/// Business name printed at the top of every ticket.
pub const BUSINESS_NAME: &str = "SHELLFRUTY";

/// URI scheme of the Android print handler (RawBT).
pub const DEFAULT_PRINT_SCHEME: &str = "rawbt";

/// Blank lines appended after the footer so the cut lands below the text.
pub const FEED_LINES: usize = 5;
