//! # Domain Types
//!
//! Sale records as the sales API delivers them (`VentaDetalle`). The Rust
//! field names are English; the serde names are the API's wire names.
//!
//! ## Data Flow
//! ```text
//! GET /ventas/{id}  ──►  SaleRecord ──► ReceiptFormatter ──► ticket text
//!                          │
//!                          └── line_items: Vec<LineItem>  (API order kept)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Sale Status
// =============================================================================

/// Lifecycle state of a sale as reported by the sales API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleStatus {
    /// Order taken, not yet handed over.
    Pendiente,
    /// Paid and closed.
    Completada,
    /// Handed to the customer.
    Entregado,
    /// Cancelled.
    Cancelada,
    /// Any state this build does not know about.
    #[serde(other)]
    Unknown,
}

// =============================================================================
// Line Item
// =============================================================================

/// One product line of a sale.
///
/// Unit price and line total are frozen at sale time; the formatter never
/// recomputes `unit_price × quantity`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LineItem {
    /// Menu item name. Free text, may carry accents.
    #[serde(rename = "nombre_menu", default)]
    pub product_name: String,

    /// Units sold.
    #[serde(rename = "cantidad", default)]
    pub quantity: u32,

    /// Price of one unit.
    #[serde(rename = "precio_unitario", default)]
    #[ts(type = "number")]
    pub unit_price: Money,

    /// Total for the line.
    #[serde(rename = "total", default)]
    #[ts(type = "number")]
    pub line_total: Money,
}

// =============================================================================
// Sale Record
// =============================================================================

/// A completed sale with its line items and tender split.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaleRecord {
    /// Sale number shown on the ticket.
    #[serde(rename = "id_venta")]
    #[ts(type = "number")]
    pub sale_id: i64,

    /// ISO-8601 timestamp of the sale.
    #[serde(rename = "fecha", default)]
    pub timestamp: String,

    /// Branch that made the sale, `0` when unknown.
    #[serde(rename = "id_sucursal", default)]
    #[ts(type = "number")]
    pub branch_id: i64,

    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<SaleStatus>,

    /// Cashier login, absent for sales created by external channels.
    #[serde(rename = "username", default)]
    pub cashier_username: Option<String>,

    /// Amount paid in cash.
    #[serde(rename = "monto_efectivo", default)]
    #[ts(type = "number")]
    pub cash_amount: Money,

    /// Amount paid by QR code or bank transfer.
    #[serde(rename = "monto_qr", default)]
    #[ts(type = "number")]
    pub digital_amount: Money,

    /// Grand total of the sale.
    #[serde(rename = "total", default)]
    #[ts(type = "number")]
    pub total_amount: Money,

    /// Products in the order the cashier rang them up.
    #[serde(rename = "detalles", default)]
    pub line_items: Vec<LineItem>,
}

impl SaleRecord {
    /// Cash plus digital tender, `None` if the sum overflows.
    pub fn tendered(&self) -> Option<Money> {
        self.cash_amount.checked_add(self.digital_amount)
    }

    /// Sum of the line totals, `None` if it overflows.
    pub fn items_total(&self) -> Option<Money> {
        self.line_items
            .iter()
            .try_fold(Money::zero(), |sum, item| sum.checked_add(item.line_total))
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.line_items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
