//! # Receipt Module
//!
//! Renders a [`SaleRecord`] as the plain-text ticket printed on the 80 mm
//! thermal printer, 48 characters per line.
//!
//! ## Ticket Anatomy
//! ```text
//! ================================================
//!                    SHELLFRUTY
//!                      Centro
//! ================================================
//!                  # VENTA 1532
//!                16/03/2025 14:05
//! ------------------------------------------------
//! PRODUCTO                    CANT  P/UNIT   TOTAL
//! ------------------------------------------------
//! Licuado de Platano con Lech    2   12.50   25.00
//!   e
//! Jugo de Naranja                1   10.50   10.50
//! ------------------------------------------------
//!   Efectivo:                           20.00 Bs.
//!   QR/Transfer:                        15.50 Bs.
//! ------------------------------------------------
//! *** TOTAL:                            35.50 Bs.
//! ================================================
//!             !Gracias por su compra!
//! ================================================
//! (5 blank lines)
//! ```
//!
//! Every content line is padded to the full width; the five blank lines at
//! the end feed paper past the cutter.

mod encode;
mod format;
mod layout;
mod text;
mod transliterate;

pub use encode::{encode_for_transport, print_uri};
pub use format::{bolivia_offset, format_amount_plain, format_amount_with_suffix, format_date_time};
pub use layout::{ColumnBudget, LayoutConfig, CASHIER_PLACEHOLDER, DEFAULT_FOOTER};
pub use text::{center, char_len, row, wrap_name};
pub use transliterate::{ascii_equivalent, transliterate, transliterate_with, UnknownCharPolicy};

use tracing::debug;

use crate::error::CoreResult;
use crate::types::{LineItem, SaleRecord};
use crate::FEED_LINES;

// =============================================================================
// Ticket Builder
// =============================================================================

/// Accumulates fixed-width lines.
struct TicketBuilder {
    width: usize,
    lines: Vec<String>,
}

impl TicketBuilder {
    fn new(width: usize) -> Self {
        TicketBuilder {
            width,
            lines: Vec::new(),
        }
    }

    /// Pushes `text` padded or cut to exactly the line width.
    fn line(&mut self, text: &str) {
        self.lines.push(text::pad_end(text, self.width));
    }

    /// `====...` section delimiter.
    fn separator(&mut self) {
        self.lines.push("=".repeat(self.width));
    }

    /// `----...` sub-section delimiter.
    fn divider(&mut self) {
        self.lines.push("-".repeat(self.width));
    }

    fn centered(&mut self, text: &str) {
        let centered = center(text, self.width);
        self.line(&centered);
    }

    fn row(&mut self, label: &str, value: &str) {
        let row = row(label, value, self.width);
        self.line(&row);
    }

    fn finish(self) -> Vec<String> {
        self.lines
    }
}

// =============================================================================
// Receipt Formatter
// =============================================================================

/// Stateless ticket formatter.
///
/// ## Example
/// ```rust
/// use shellfruty_core::receipt::ReceiptFormatter;
/// use shellfruty_core::{Money, SaleRecord};
///
/// let sale = SaleRecord {
///     sale_id: 7,
///     timestamp: "2025-03-16T14:05:00".to_string(),
///     digital_amount: Money::from_cents(5000),
///     total_amount: Money::from_cents(5000),
///     ..SaleRecord::default()
/// };
///
/// let ticket = ReceiptFormatter::default().format_ticket(&sale, "");
/// assert!(ticket.contains("# VENTA 7"));
/// assert!(ticket.contains("QR/Transfer:"));
/// assert!(!ticket.contains("Efectivo:"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ReceiptFormatter {
    layout: LayoutConfig,
}

impl ReceiptFormatter {
    /// Creates a formatter after checking the layout's column budget.
    pub fn new(layout: LayoutConfig) -> CoreResult<Self> {
        layout.validate()?;
        Ok(ReceiptFormatter { layout })
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    /// Full ticket: content lines joined by `\n`, then the paper feed.
    ///
    /// Never fails. `branch_name` may be empty, in which case the branch
    /// line is omitted.
    pub fn format_ticket(&self, sale: &SaleRecord, branch_name: &str) -> String {
        let lines = self.format_lines(sale, branch_name);
        let mut ticket = lines.join("\n");
        ticket.push('\n');
        ticket.push_str(&"\n".repeat(FEED_LINES));
        ticket
    }

    /// Content lines of the ticket, without the trailing paper feed. Every
    /// line is exactly `line_width` characters.
    pub fn format_lines(&self, sale: &SaleRecord, branch_name: &str) -> Vec<String> {
        let mut ticket = TicketBuilder::new(self.layout.line_width);

        self.header(&mut ticket, sale, branch_name);
        self.item_table(&mut ticket, &sale.line_items);
        self.totals(&mut ticket, sale);
        self.footer(&mut ticket);

        let lines = ticket.finish();
        debug!(
            sale_id = sale.sale_id,
            items = sale.line_items.len(),
            lines = lines.len(),
            "ticket formatted"
        );
        lines
    }

    /// Base64 payload of [`format_ticket`](Self::format_ticket).
    pub fn encode_ticket(&self, sale: &SaleRecord, branch_name: &str) -> String {
        encode_for_transport(&self.format_ticket(sale, branch_name))
    }

    fn ascii(&self, text: &str) -> String {
        transliterate_with(text, self.layout.unknown_chars)
    }

    // -------------------------------------------------------------------------
    // Sections
    // -------------------------------------------------------------------------

    fn header(&self, ticket: &mut TicketBuilder, sale: &SaleRecord, branch_name: &str) {
        ticket.separator();
        ticket.centered(&self.ascii(&self.layout.business_name));
        if !branch_name.trim().is_empty() {
            ticket.centered(&self.ascii(branch_name.trim()));
        }
        ticket.separator();

        ticket.centered(&format!("# VENTA {}", sale.sale_id));
        ticket.centered(&format_date_time(&sale.timestamp, self.layout.utc_offset));
        if self.layout.show_cashier {
            let cashier = sale
                .cashier_username
                .as_deref()
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(CASHIER_PLACEHOLDER);
            ticket.row("Cajero:", &self.ascii(cashier));
        }
        ticket.divider();
    }

    fn item_table(&self, ticket: &mut TicketBuilder, items: &[LineItem]) {
        ticket.line(&self.table_header());
        ticket.divider();
        for item in items {
            for line in self.item_lines(item) {
                ticket.line(&line);
            }
        }
        ticket.divider();
    }

    /// `PRODUCTO                    CANT  P/UNIT   TOTAL`
    fn table_header(&self) -> String {
        let columns = &self.layout.columns;
        format!(
            "{} {} {} {}",
            text::pad_end("PRODUCTO", columns.name),
            text::pad_end(&text::pad_start("CANT", columns.quantity), columns.quantity),
            text::pad_end(&text::pad_start("P/UNIT", columns.unit_price), columns.unit_price),
            text::pad_end(&text::pad_start("TOTAL", columns.total), columns.total),
        )
    }

    /// One item: the first line carries the numeric block, continuation
    /// lines carry the rest of the name.
    ///
    /// Amounts are never cut. If one is wider than its column, the name
    /// cell gives up the difference and the name wraps at that narrower
    /// width, so every character still prints.
    fn item_lines(&self, item: &LineItem) -> Vec<String> {
        let columns = &self.layout.columns;
        let numeric = format!(
            " {} {} {}",
            text::pad_start(&item.quantity.to_string(), columns.quantity),
            text::pad_start(&format_amount_plain(item.unit_price), columns.unit_price),
            text::pad_start(&format_amount_plain(item.line_total), columns.total),
        );

        let name_cell = self
            .layout
            .line_width
            .saturating_sub(char_len(&numeric))
            .min(columns.name);

        let name = self.ascii(&item.product_name);
        let (first, continuation) = wrap_name(&name, name_cell);

        let mut lines = Vec::with_capacity(1 + continuation.len());
        lines.push(format!("{}{}", text::pad_end(&first, name_cell), numeric));
        lines.extend(continuation);
        lines
    }

    fn totals(&self, ticket: &mut TicketBuilder, sale: &SaleRecord) {
        let mut tendered = false;
        if sale.cash_amount.is_positive() {
            ticket.row("  Efectivo:", &format_amount_with_suffix(sale.cash_amount));
            tendered = true;
        }
        if sale.digital_amount.is_positive() {
            ticket.row("  QR/Transfer:", &format_amount_with_suffix(sale.digital_amount));
            tendered = true;
        }
        if tendered {
            ticket.divider();
        }

        ticket.row("*** TOTAL:", &format_amount_with_suffix(sale.total_amount));
    }

    fn footer(&self, ticket: &mut TicketBuilder) {
        ticket.separator();
        ticket.centered(&self.ascii(&self.layout.footer_message));
        ticket.separator();
    }
}

/// Formats `sale` with the default 48-column layout.
pub fn format_ticket(sale: &SaleRecord, branch_name: &str) -> String {
    ReceiptFormatter::default().format_ticket(sale, branch_name)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::LINE_WIDTH;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    /// separator, business, separator, venta, date, divider
    const HEADER_LINES: usize = 6;
    /// table header, divider ... divider
    const TABLE_FRAME_LINES: usize = 3;
    /// separator, footer, separator
    const FOOTER_LINES: usize = 3;

    fn item(name: &str, quantity: u32, unit_cents: i64) -> LineItem {
        LineItem {
            product_name: name.to_string(),
            quantity,
            unit_price: Money::from_cents(unit_cents),
            line_total: Money::from_cents(unit_cents * i64::from(quantity)),
        }
    }

    fn sample_sale() -> SaleRecord {
        SaleRecord {
            sale_id: 1532,
            timestamp: "2025-03-16T18:05:00.000Z".to_string(),
            branch_id: 1,
            cash_amount: Money::from_cents(2000),
            digital_amount: Money::from_cents(1550),
            total_amount: Money::from_cents(3550),
            line_items: vec![
                item("Licuado de Plátano con Leche", 2, 1250),
                item("Jugo de Naranja", 1, 1050),
            ],
            ..SaleRecord::default()
        }
    }

    #[test]
    fn test_sample_ticket_layout() {
        let lines = ReceiptFormatter::default().format_lines(&sample_sale(), "Centro");
        let trimmed: Vec<&str> = lines.iter().map(|line| line.trim_end()).collect();

        let expected = vec![
            "=".repeat(48),
            format!("{}SHELLFRUTY", " ".repeat(19)),
            format!("{}Centro", " ".repeat(21)),
            "=".repeat(48),
            format!("{}# VENTA 1532", " ".repeat(18)),
            format!("{}16/03/2025 14:05", " ".repeat(16)),
            "-".repeat(48),
            "PRODUCTO                    CANT  P/UNIT   TOTAL".to_string(),
            "-".repeat(48),
            "Licuado de Platano con Lech    2   12.50   25.00".to_string(),
            "  e".to_string(),
            "Jugo de Naranja                1   10.50   10.50".to_string(),
            "-".repeat(48),
            format!("  Efectivo:{}20.00 Bs.", " ".repeat(28)),
            format!("  QR/Transfer:{}15.50 Bs.", " ".repeat(25)),
            "-".repeat(48),
            format!("*** TOTAL:{}35.50 Bs.", " ".repeat(29)),
            "=".repeat(48),
            format!("{}!Gracias por su compra!", " ".repeat(12)),
            "=".repeat(48),
        ];
        assert_eq!(trimmed, expected);
    }

    #[test]
    fn test_every_content_line_is_full_width() {
        let lines = ReceiptFormatter::default().format_lines(&sample_sale(), "Centro");
        for line in &lines {
            assert_eq!(char_len(line), LINE_WIDTH, "line {:?}", line);
        }
    }

    #[test]
    fn test_ticket_ends_with_paper_feed() {
        let ticket = format_ticket(&sample_sale(), "");
        assert!(ticket.ends_with(&format!("{}\n\n\n\n\n\n", "=".repeat(48))));

        let physical: Vec<&str> = ticket.lines().collect();
        let content = ReceiptFormatter::default().format_lines(&sample_sale(), "");
        assert_eq!(physical.len(), content.len() + FEED_LINES);
        assert!(physical[content.len()..].iter().all(|line| line.is_empty()));
    }

    #[test]
    fn test_line_count_matches_sections() {
        let sale = sample_sale();
        let formatter = ReceiptFormatter::default();

        let expanded: usize = sale
            .line_items
            .iter()
            .map(|item| formatter.item_lines(item).len())
            .sum();
        assert_eq!(expanded, 3);

        // two tender rows, divider, total
        let totals = 4;
        let lines = formatter.format_lines(&sale, "");
        assert_eq!(
            lines.len(),
            HEADER_LINES + TABLE_FRAME_LINES + expanded + totals + FOOTER_LINES
        );

        // The branch line adds exactly one header line.
        let with_branch = formatter.format_lines(&sale, "Centro");
        assert_eq!(with_branch.len(), lines.len() + 1);
    }

    #[test]
    fn test_name_wrap_boundary() {
        let formatter = ReceiptFormatter::default();
        assert_eq!(formatter.item_lines(&item(&"a".repeat(27), 1, 100)).len(), 1);
        assert_eq!(formatter.item_lines(&item(&"a".repeat(28), 1, 100)).len(), 2);
        assert_eq!(formatter.item_lines(&item(&"a".repeat(52), 1, 100)).len(), 2);
        assert_eq!(formatter.item_lines(&item(&"a".repeat(53), 1, 100)).len(), 3);
    }

    #[test]
    fn test_wrap_counts_characters_after_transliteration() {
        // 27 characters, two of them accented.
        let name = "Licuado de Plátano y Piñaaa";
        assert_eq!(name.chars().count(), 27);
        let lines = ReceiptFormatter::default().item_lines(&item(name, 1, 100));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Licuado de Platano y Pinaaa"));
    }

    #[test]
    fn test_items_keep_input_order() {
        let mut sale = sample_sale();
        sale.line_items = vec![item("Zanahoria", 1, 500), item("Arándano", 1, 700)];
        let lines = ReceiptFormatter::default().format_lines(&sale, "");
        let zanahoria = lines.iter().position(|l| l.starts_with("Zanahoria")).unwrap();
        let arandano = lines.iter().position(|l| l.starts_with("Arandano")).unwrap();
        assert!(zanahoria < arandano);
    }

    #[test]
    fn test_digital_only_omits_cash_row() {
        let mut sale = sample_sale();
        sale.cash_amount = Money::zero();
        sale.digital_amount = Money::from_cents(5000);
        sale.total_amount = Money::from_cents(5000);

        let lines = ReceiptFormatter::default().format_lines(&sale, "");
        assert!(!lines.iter().any(|l| l.contains("Efectivo:")));

        let qr = lines.iter().position(|l| l.starts_with("  QR/Transfer:")).unwrap();
        assert!(lines[qr].trim_end().ends_with("50.00 Bs."));
        assert_eq!(lines[qr + 1], "-".repeat(48));
        assert!(lines[qr + 2].starts_with("*** TOTAL:"));
        assert!(lines[qr + 2].trim_end().ends_with("50.00 Bs."));
    }

    #[test]
    fn test_cash_only_renders_cash_row() {
        let mut sale = sample_sale();
        sale.digital_amount = Money::zero();
        sale.cash_amount = Money::from_cents(3550);

        let lines = ReceiptFormatter::default().format_lines(&sale, "");
        assert!(lines.iter().any(|l| l.starts_with("  Efectivo:")));
        assert!(!lines.iter().any(|l| l.contains("QR/Transfer:")));
    }

    #[test]
    fn test_no_tender_rows_skips_divider() {
        let mut sale = sample_sale();
        sale.cash_amount = Money::zero();
        sale.digital_amount = Money::zero();

        let lines = ReceiptFormatter::default().format_lines(&sale, "");
        let total = lines.iter().position(|l| l.starts_with("*** TOTAL:")).unwrap();
        // Table closing divider sits directly above the total.
        assert_eq!(lines[total - 1], "-".repeat(48));
        assert!(lines[total - 2].starts_with("Jugo de Naranja"));
    }

    #[test]
    fn test_wide_amounts_shrink_name_not_digits() {
        let wide = item("Pedido Corporativo Especial", 12345, 1_234_567);
        let lines = ReceiptFormatter::default().item_lines(&wide);
        assert_eq!(char_len(&lines[0]), LINE_WIDTH);
        assert!(lines[0].ends_with(" 12345 12345.67 152407296.15"));
        assert_eq!(lines[1], "  special");
    }

    #[test]
    fn test_wide_amounts_keep_every_name_character() {
        let name = "Pedido Corporativo Especial Mango";
        let lines = ReceiptFormatter::default().item_lines(&item(name, 1, 1_234_567));
        assert_eq!(
            lines,
            vec![
                "Pedido Corporativo Especi    1 12345.67 12345.67".to_string(),
                "  al Mango".to_string(),
            ]
        );

        let name_cell = "Pedido Corporativo Especi".len();
        let mut printed = lines[0][..name_cell].to_string();
        for line in &lines[1..] {
            printed.push_str(line.strip_prefix("  ").unwrap());
        }
        assert_eq!(printed, name);
    }

    #[test]
    fn test_cashier_line_is_optional() {
        let layout = LayoutConfig::default().with_cashier(true);
        let formatter = ReceiptFormatter::new(layout).unwrap();

        let mut sale = sample_sale();
        let lines = formatter.format_lines(&sale, "");
        assert!(lines.iter().any(|l| l.starts_with("Cajero:") && l.trim_end().ends_with("N/A")));

        sale.cashier_username = Some("maría".to_string());
        let lines = formatter.format_lines(&sale, "");
        assert!(lines.iter().any(|l| l.trim_end().ends_with("maria")));

        let default_lines = ReceiptFormatter::default().format_lines(&sale, "");
        assert!(!default_lines.iter().any(|l| l.starts_with("Cajero:")));
    }

    #[test]
    fn test_unparsable_date_is_printed_verbatim() {
        let mut sale = sample_sale();
        sale.timestamp = "not-a-date".to_string();
        let lines = ReceiptFormatter::default().format_lines(&sale, "");
        assert_eq!(lines[4].trim(), "not-a-date");
    }

    #[test]
    fn test_replace_policy_yields_pure_ascii() {
        let layout = LayoutConfig::default().with_unknown_chars(UnknownCharPolicy::Replace('?'));
        let formatter = ReceiptFormatter::new(layout).unwrap();

        let mut sale = sample_sale();
        sale.line_items.push(item("Açaí Bowl 🍓", 1, 2500));
        let ticket = formatter.format_ticket(&sale, "Tarija");
        assert!(ticket.is_ascii());
        assert!(ticket.contains("A?ai Bowl ?"));
    }

    #[test]
    fn test_narrow_roll() {
        let layout = LayoutConfig::default().with_line_width(42);
        let formatter = ReceiptFormatter::new(layout).unwrap();
        for line in formatter.format_lines(&sample_sale(), "Centro") {
            assert_eq!(char_len(&line), 42);
        }
    }

    #[test]
    fn test_transport_round_trip() {
        let formatter = ReceiptFormatter::default();
        let sale = sample_sale();
        let ticket = formatter.format_ticket(&sale, "Mercado Campesino");

        let bytes = STANDARD.decode(formatter.encode_ticket(&sale, "Mercado Campesino")).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), ticket);
    }

    #[test]
    fn test_formatting_is_idempotent() {
        let formatter = ReceiptFormatter::default();
        let sale = sample_sale();
        assert_eq!(
            formatter.format_ticket(&sale, "Centro"),
            formatter.format_ticket(&sale, "Centro")
        );
    }

    #[test]
    fn test_invalid_layout_is_rejected() {
        let mut layout = LayoutConfig::default();
        layout.columns.total = 8;
        assert!(ReceiptFormatter::new(layout).is_err());
    }
}
