//! # Validation Module
//!
//! Checks that sit beside the formatter, never inside it.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Where Checks Happen                                │
//! │                                                                         │
//! │  Startup: validate_layout                                               │
//! │  └── A bad column budget is a configuration bug, reject it early        │
//! │                                                                         │
//! │  Print time: validate_sale (optional, callers log the result)           │
//! │  └── Tender split, negative amounts, zero quantities                    │
//! │                                                                         │
//! │  format_ticket never validates: a ticket is always printed              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::receipt::LayoutConfig;
use crate::types::SaleRecord;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Narrowest and widest rolls we lay out for.
pub const MIN_LINE_WIDTH: usize = 24;
pub const MAX_LINE_WIDTH: usize = 96;

/// Narrowest name column that still leaves room for continuation text.
pub const MIN_NAME_WIDTH: usize = 3;

/// Tender may differ from the total by at most one centavo of rounding.
pub const TENDER_TOLERANCE: Money = Money::from_cents(1);

// =============================================================================
// Layout
// =============================================================================

/// Validates a ticket layout.
///
/// ## Rules
/// - Business name is not blank
/// - Line width within [`MIN_LINE_WIDTH`]..=[`MAX_LINE_WIDTH`]
/// - Name column at least [`MIN_NAME_WIDTH`], numeric columns at least 1
/// - Columns plus gutters add up to the line width
///
/// ## Example
/// ```rust
/// use shellfruty_core::receipt::LayoutConfig;
/// use shellfruty_core::validation::validate_layout;
///
/// assert!(validate_layout(&LayoutConfig::default()).is_ok());
///
/// let mut layout = LayoutConfig::default();
/// layout.columns.name = 26;
/// assert!(validate_layout(&layout).is_err());
/// ```
pub fn validate_layout(layout: &LayoutConfig) -> CoreResult<()> {
    if layout.business_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "business_name".to_string(),
        }
        .into());
    }

    if !(MIN_LINE_WIDTH..=MAX_LINE_WIDTH).contains(&layout.line_width) {
        return Err(ValidationError::OutOfRange {
            field: "line_width".to_string(),
            min: MIN_LINE_WIDTH as i64,
            max: MAX_LINE_WIDTH as i64,
        }
        .into());
    }

    let columns = &layout.columns;
    if columns.name < MIN_NAME_WIDTH {
        return Err(CoreError::InvalidLayout(format!(
            "name column must be at least {} characters",
            MIN_NAME_WIDTH
        )));
    }
    if columns.quantity == 0 || columns.unit_price == 0 || columns.total == 0 {
        return Err(CoreError::InvalidLayout(
            "numeric columns must be at least 1 character".to_string(),
        ));
    }

    if columns.row_width() != layout.line_width {
        return Err(CoreError::ColumnBudget {
            expected: layout.line_width,
            actual: columns.row_width(),
        });
    }

    Ok(())
}

// =============================================================================
// Sale
// =============================================================================

/// Checks that cash plus digital tender matches the total.
///
/// ## Example
/// ```rust
/// use shellfruty_core::{Money, SaleRecord};
/// use shellfruty_core::validation::validate_tender;
///
/// let sale = SaleRecord {
///     cash_amount: Money::from_cents(2000),
///     digital_amount: Money::from_cents(3000),
///     total_amount: Money::from_cents(5000),
///     ..SaleRecord::default()
/// };
/// assert!(validate_tender(&sale).is_ok());
/// ```
pub fn validate_tender(sale: &SaleRecord) -> ValidationResult<()> {
    for (field, amount) in [
        ("monto_efectivo", sale.cash_amount),
        ("monto_qr", sale.digital_amount),
        ("total", sale.total_amount),
    ] {
        if amount.is_negative() {
            return Err(ValidationError::Negative {
                field: field.to_string(),
            });
        }
    }

    // Both sides are non-negative here, so the difference cannot overflow.
    let within_tolerance = sale
        .tendered()
        .and_then(|tendered| tendered.checked_sub(sale.total_amount))
        .is_some_and(|diff| diff.abs() <= TENDER_TOLERANCE);

    if !within_tolerance {
        return Err(ValidationError::TenderMismatch {
            cash: sale.cash_amount.to_string(),
            digital: sale.digital_amount.to_string(),
            total: sale.total_amount.to_string(),
        });
    }

    Ok(())
}

/// Tender check plus per-line checks (positive quantity, no negative
/// amounts). Returns the first problem found.
pub fn validate_sale(sale: &SaleRecord) -> ValidationResult<()> {
    validate_tender(sale)?;

    for item in &sale.line_items {
        if item.quantity == 0 {
            return Err(ValidationError::OutOfRange {
                field: format!("cantidad ({})", item.product_name),
                min: 1,
                max: i64::from(u32::MAX),
            });
        }
        if item.unit_price.is_negative() || item.line_total.is_negative() {
            return Err(ValidationError::Negative {
                field: format!("precio ({})", item.product_name),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
