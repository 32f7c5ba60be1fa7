//! Transport encoding for the print deep link.
//!
//! The print handler receives `{scheme}:base64,{payload}` where the payload
//! is standard base64 of the ticket's UTF-8 bytes. Encoding the bytes rather
//! than code points keeps the payload valid even when a character slipped
//! past transliteration.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Base64 of the UTF-8 bytes of `text`.
///
/// ```rust
/// use shellfruty_core::receipt::encode_for_transport;
///
/// assert_eq!(encode_for_transport("SHELLFRUTY\n"), "U0hFTExGUlVUWQo=");
/// ```
pub fn encode_for_transport(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Deep link handed to the print handler.
///
/// ```rust
/// use shellfruty_core::receipt::print_uri;
///
/// assert_eq!(print_uri("rawbt", "QUJD"), "rawbt:base64,QUJD");
/// ```
pub fn print_uri(scheme: &str, payload: &str) -> String {
    format!("{}:base64,{}", scheme, payload)
}
