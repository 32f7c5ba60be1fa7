//! Printer settings.
//!
//! Loaded from environment variables with fallback to defaults. The
//! `ticket` binary layers its command-line flags on top.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SHELLFRUTY_PRINT_SCHEME` | `rawbt` |
//! | `SHELLFRUTY_BUSINESS_NAME` | `SHELLFRUTY` |
//! | `SHELLFRUTY_FOOTER` | `¡Gracias por su compra!` |
//! | `SHELLFRUTY_LINE_WIDTH` | `48` |
//! | `SHELLFRUTY_UTC_OFFSET_HOURS` | `-4` |
//! | `SHELLFRUTY_SHOW_CASHIER` | `false` |
//! | `SHELLFRUTY_UNKNOWN_CHAR` | unset (pass through) |

use chrono::FixedOffset;
use shellfruty_core::receipt::{LayoutConfig, UnknownCharPolicy, DEFAULT_FOOTER};
use shellfruty_core::{CoreError, BUSINESS_NAME, DEFAULT_PRINT_SCHEME, LINE_WIDTH};

/// Printer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterSettings {
    /// Deep-link scheme of the print handler.
    pub scheme: String,

    pub business_name: String,

    pub footer: String,

    /// Characters per line (32, 42 or 48 on common rolls).
    pub line_width: usize,

    /// Local time for the date line, hours east of UTC.
    pub utc_offset_hours: i32,

    pub show_cashier: bool,

    /// Replacement for characters the printer cannot render.
    pub unknown_char: Option<char>,
}

impl Default for PrinterSettings {
    fn default() -> Self {
        PrinterSettings {
            scheme: DEFAULT_PRINT_SCHEME.to_string(),
            business_name: BUSINESS_NAME.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            line_width: LINE_WIDTH,
            utc_offset_hours: -4,
            show_cashier: false,
            unknown_char: None,
        }
    }
}

impl PrinterSettings {
    /// Load settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = PrinterSettings::default();

        if let Some(scheme) = lookup("SHELLFRUTY_PRINT_SCHEME") {
            settings.scheme = scheme;
        }
        if let Some(name) = lookup("SHELLFRUTY_BUSINESS_NAME") {
            settings.business_name = name;
        }
        if let Some(footer) = lookup("SHELLFRUTY_FOOTER") {
            settings.footer = footer;
        }
        if let Some(width) = lookup("SHELLFRUTY_LINE_WIDTH") {
            settings.line_width = parse_value("SHELLFRUTY_LINE_WIDTH", &width)?;
        }
        if let Some(hours) = lookup("SHELLFRUTY_UTC_OFFSET_HOURS") {
            settings.utc_offset_hours = parse_value("SHELLFRUTY_UTC_OFFSET_HOURS", &hours)?;
        }
        if let Some(flag) = lookup("SHELLFRUTY_SHOW_CASHIER") {
            settings.show_cashier = parse_flag("SHELLFRUTY_SHOW_CASHIER", &flag)?;
        }
        if let Some(replacement) = lookup("SHELLFRUTY_UNKNOWN_CHAR") {
            settings.unknown_char = parse_char("SHELLFRUTY_UNKNOWN_CHAR", &replacement)?;
        }

        if settings.scheme.trim().is_empty() {
            return Err(ConfigError::MissingRequired(
                "SHELLFRUTY_PRINT_SCHEME".to_string(),
            ));
        }

        Ok(settings)
    }

    /// Local offset for the date line.
    pub fn utc_offset(&self) -> Result<FixedOffset, ConfigError> {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| ConfigError::InvalidValue {
                key: "SHELLFRUTY_UTC_OFFSET_HOURS".to_string(),
                value: self.utc_offset_hours.to_string(),
            })
    }

    /// Ticket layout described by these settings, validated.
    pub fn layout(&self) -> Result<LayoutConfig, ConfigError> {
        let unknown_chars = match self.unknown_char {
            Some(c) => UnknownCharPolicy::Replace(c),
            None => UnknownCharPolicy::PassThrough,
        };

        let layout = LayoutConfig::default()
            .with_business_name(self.business_name.clone())
            .with_footer(self.footer.clone())
            .with_line_width(self.line_width)
            .with_utc_offset(self.utc_offset()?)
            .with_unknown_chars(unknown_chars)
            .with_cashier(self.show_cashier);

        layout.validate()?;
        Ok(layout)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

fn parse_char(key: &str, value: &str) -> Result<Option<char>, ConfigError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid layout: {0}")]
    Layout(#[from] CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = PrinterSettings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, PrinterSettings::default());
        assert_eq!(settings.scheme, "rawbt");

        let layout = settings.layout().unwrap();
        assert_eq!(layout.line_width, 48);
        assert_eq!(layout.utc_offset.local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_overrides() {
        let settings = PrinterSettings::from_lookup(lookup(&[
            ("SHELLFRUTY_PRINT_SCHEME", "escpos"),
            ("SHELLFRUTY_LINE_WIDTH", "42"),
            ("SHELLFRUTY_UTC_OFFSET_HOURS", "-5"),
            ("SHELLFRUTY_SHOW_CASHIER", "yes"),
            ("SHELLFRUTY_UNKNOWN_CHAR", "?"),
        ]))
        .unwrap();

        assert_eq!(settings.scheme, "escpos");
        assert!(settings.show_cashier);
        assert_eq!(settings.unknown_char, Some('?'));

        let layout = settings.layout().unwrap();
        assert_eq!(layout.columns.name, 21);
        assert_eq!(layout.unknown_chars, UnknownCharPolicy::Replace('?'));
    }

    #[test]
    fn test_invalid_values() {
        let err = PrinterSettings::from_lookup(lookup(&[("SHELLFRUTY_LINE_WIDTH", "wide")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = PrinterSettings::from_lookup(lookup(&[("SHELLFRUTY_SHOW_CASHIER", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = PrinterSettings::from_lookup(lookup(&[("SHELLFRUTY_UNKNOWN_CHAR", "??")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));

        let err = PrinterSettings::from_lookup(lookup(&[("SHELLFRUTY_PRINT_SCHEME", " ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRequired(_)));
    }

    #[test]
    fn test_layout_errors_surface() {
        let settings = PrinterSettings {
            line_width: 10,
            ..PrinterSettings::default()
        };
        assert!(matches!(settings.layout(), Err(ConfigError::Layout(_))));

        let settings = PrinterSettings {
            utc_offset_hours: 30,
            ..PrinterSettings::default()
        };
        assert!(matches!(settings.layout(), Err(ConfigError::InvalidValue { .. })));
    }
}
