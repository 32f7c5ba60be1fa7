//! Fixed-width text helpers.
//!
//! Widths count `char`s, not bytes. After transliteration every glyph the
//! printer sees is one column wide.

/// Number of columns `text` occupies.
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// First `width` characters of `text`.
pub fn truncate(text: &str, width: usize) -> &str {
    match text.char_indices().nth(width) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Splits `text` after `width` characters.
pub fn split_at_width(text: &str, width: usize) -> (&str, &str) {
    let head = truncate(text, width);
    (head, &text[head.len()..])
}

/// Centers `text` by left padding only.
///
/// Text at least `width` long is truncated. Otherwise it is prefixed with
/// `floor((width - len) / 2)` spaces and NOT padded on the right.
///
/// ```rust
/// use shellfruty_core::receipt::center;
///
/// assert_eq!(center("SHELLFRUTY", 48), format!("{}SHELLFRUTY", " ".repeat(19)));
/// ```
pub fn center(text: &str, width: usize) -> String {
    let len = char_len(text);
    if len >= width {
        return truncate(text, width).to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// Label on the left, value flush right.
///
/// When the two do not fit with at least one space between them, returns
/// `label + " " + value` truncated to `width`; the label always survives.
///
/// ```rust
/// use shellfruty_core::receipt::row;
///
/// assert_eq!(row("TOTAL:", "9.00 Bs.", 20), "TOTAL:      9.00 Bs.");
/// ```
pub fn row(label: &str, value: &str, width: usize) -> String {
    let used = char_len(label) + char_len(value);
    if used >= width {
        let joined = format!("{} {}", label, value);
        return truncate(&joined, width).to_string();
    }
    format!("{}{}{}", label, " ".repeat(width - used), value)
}

/// Left-aligns `text` in exactly `width` columns, truncating if needed.
pub fn pad_end(text: &str, width: usize) -> String {
    let head = truncate(text, width);
    format!("{}{}", head, " ".repeat(width - char_len(head)))
}

/// Right-aligns `text` in at least `width` columns. Longer text is kept
/// whole so amounts are never cut.
pub fn pad_start(text: &str, width: usize) -> String {
    format!("{:>width$}", text, width = width)
}

/// Splits a product name into its first cell and continuation lines.
///
/// The first chunk fills `width` columns; each continuation line is two
/// spaces of indent followed by the next `width - 2` characters.
pub fn wrap_name(name: &str, width: usize) -> (String, Vec<String>) {
    let (first, mut rest) = split_at_width(name, width);
    let chunk = width.saturating_sub(2).max(1);

    let mut continuation = Vec::new();
    while !rest.is_empty() {
        let (head, tail) = split_at_width(rest, chunk);
        continuation.push(format!("  {}", head));
        rest = tail;
    }

    (first.to_string(), continuation)
}
