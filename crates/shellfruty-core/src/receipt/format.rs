//! Amount and date rendering for ticket cells.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

use crate::money::Money;

/// Display format of the ticket date line.
const TICKET_DATE_FORMAT: &str = "%d/%m/%Y %H:%M";

/// Offset-less timestamps the sales API has been seen to send.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Bolivia (La Paz / Tarija) is UTC-4 all year round.
pub fn bolivia_offset() -> FixedOffset {
    FixedOffset::west_opt(4 * 3600).unwrap_or_else(|| Utc.fix())
}

/// `"12.50 Bs."`, used on the totals rows.
pub fn format_amount_with_suffix(amount: Money) -> String {
    amount.with_suffix()
}

/// `"12.50"`, used inside table cells where the suffix would not fit.
pub fn format_amount_plain(amount: Money) -> String {
    amount.to_string()
}

/// Renders an ISO-8601 timestamp as `DD/MM/YYYY HH:MM` in `local` time.
///
/// - Timestamps with an offset (`Z`, `-04:00`) are converted to `local`.
/// - Offset-less date-times are taken as already local.
/// - A bare date is UTC midnight, converted to `local`.
///
/// Anything unparsable is returned unchanged.
///
/// ```rust
/// use shellfruty_core::receipt::{bolivia_offset, format_date_time};
///
/// let local = bolivia_offset();
/// assert_eq!(format_date_time("2025-03-16T18:05:00Z", local), "16/03/2025 14:05");
/// assert_eq!(format_date_time("not-a-date", local), "not-a-date");
/// ```
pub fn format_date_time(iso: &str, local: FixedOffset) -> String {
    match parse_timestamp(iso.trim(), local) {
        Some(at) => at.format(TICKET_DATE_FORMAT).to_string(),
        None => iso.to_string(),
    }
}

fn parse_timestamp(text: &str, local: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(text) {
        return Some(at.with_timezone(&local));
    }
    if let Ok(at) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f%z") {
        return Some(at.with_timezone(&local));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return local.from_local_datetime(&naive).single();
        }
    }
    let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?;
    let midnight = date.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&midnight).with_timezone(&local))
}
