//! # Error Types
//!
//! Domain-specific error types for shellfruty-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shellfruty-core errors (this file)                                     │
//! │  ├── CoreError        - Layout configuration failures                   │
//! │  └── ValidationError  - Field-level check failures                      │
//! │                                                                         │
//! │  shellfruty-print errors (separate crate)                               │
//! │  └── PrintError       - I/O, JSON, settings, dispatch                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → PrintError → CLI exit status       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Formatting a ticket never fails. These errors only come out of building
//! a [`LayoutConfig`](crate::receipt::LayoutConfig) or of the optional
//! tender checks in [`validation`](crate::validation).

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core errors raised while preparing a ticket layout.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Column widths plus gutters do not add up to the line width.
    ///
    /// ## When This Occurs
    /// ```text
    /// name(26) + 1 + qty(4) + 1 + unit(7) + 1 + total(7) = 47
    ///      │
    ///      ▼
    /// ColumnBudget { expected: 48, actual: 47 }
    /// ```
    #[error("Column budget adds up to {actual} characters, line width is {expected}")]
    ColumnBudget { expected: usize, actual: usize },

    /// Layout parameters are out of range.
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Tender split does not match the sale total.
    #[error("cash {cash} + digital {digital} does not match total {total}")]
    TenderMismatch {
        cash: String,
        digital: String,
        total: String,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
