//! Ticket layout parameters.
//!
//! ## Column Budget
//! ```text
//! PRODUCTO                    CANT  P/UNIT   TOTAL
//! └──────── name 27 ────────┘ └4─┘ └──7──┘ └──7──┘
//!                            ^    ^       ^           single-space gutters
//!
//! 27 + 1 + 4 + 1 + 7 + 1 + 7 = 48
//! ```
//! Cells hold bare amounts ("9999.99" is 7 characters); the "Bs." suffix
//! only appears on the totals rows.

use chrono::FixedOffset;

use crate::error::CoreResult;
use crate::receipt::format::bolivia_offset;
use crate::receipt::transliterate::UnknownCharPolicy;
use crate::validation;
use crate::{BUSINESS_NAME, LINE_WIDTH};

/// Default closing line, folded to ASCII when printed.
pub const DEFAULT_FOOTER: &str = "¡Gracias por su compra!";

/// Printed in place of a missing cashier login.
pub const CASHIER_PLACEHOLDER: &str = "N/A";

/// Widths of the four item-table columns. Gutters are one space each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnBudget {
    pub name: usize,
    pub quantity: usize,
    pub unit_price: usize,
    pub total: usize,
}

impl ColumnBudget {
    /// 27 / 4 / 7 / 7 on a 48-column roll.
    pub const COMPACT: ColumnBudget = ColumnBudget {
        name: 27,
        quantity: 4,
        unit_price: 7,
        total: 7,
    };

    /// Width of a full item row including the three gutters.
    pub const fn row_width(&self) -> usize {
        self.name + 1 + self.quantity + 1 + self.unit_price + 1 + self.total
    }

    /// Width of the numeric block right of the name column, leading gutter
    /// included.
    pub const fn numeric_width(&self) -> usize {
        1 + self.quantity + 1 + self.unit_price + 1 + self.total
    }

    /// Budget for `line_width` that keeps the numeric columns and gives the
    /// remainder to the name.
    pub const fn for_line_width(line_width: usize) -> ColumnBudget {
        let numeric = Self::COMPACT.numeric_width();
        ColumnBudget {
            name: line_width.saturating_sub(numeric),
            ..Self::COMPACT
        }
    }
}

impl Default for ColumnBudget {
    fn default() -> Self {
        ColumnBudget::COMPACT
    }
}

/// Everything the formatter needs besides the sale itself.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Header line, centered.
    pub business_name: String,

    /// Closing line, centered.
    pub footer_message: String,

    /// Characters per printed line.
    pub line_width: usize,

    pub columns: ColumnBudget,

    /// Local time used for the date line.
    pub utc_offset: FixedOffset,

    pub unknown_chars: UnknownCharPolicy,

    /// Adds a `Cajero:` line under the date.
    pub show_cashier: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            business_name: BUSINESS_NAME.to_string(),
            footer_message: DEFAULT_FOOTER.to_string(),
            line_width: LINE_WIDTH,
            columns: ColumnBudget::COMPACT,
            utc_offset: bolivia_offset(),
            unknown_chars: UnknownCharPolicy::PassThrough,
            show_cashier: false,
        }
    }
}

impl LayoutConfig {
    /// Checks the column budget against the line width.
    pub fn validate(&self) -> CoreResult<()> {
        validation::validate_layout(self)
    }

    pub fn with_business_name(mut self, name: impl Into<String>) -> Self {
        self.business_name = name.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer_message = footer.into();
        self
    }

    /// Changes the roll width and resizes the name column to match.
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self.columns = ColumnBudget::for_line_width(line_width);
        self
    }

    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = offset;
        self
    }

    pub fn with_unknown_chars(mut self, policy: UnknownCharPolicy) -> Self {
        self.unknown_chars = policy;
        self
    }

    pub fn with_cashier(mut self, show: bool) -> Self {
        self.show_cashier = show;
        self
    }
}
