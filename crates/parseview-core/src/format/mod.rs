//! Total formatters turning loosely-typed payload values into display strings.
//!
//! None of these functions fail: malformed input degrades to a placeholder
//! or, for dates, to the original string.

pub mod dates;
pub mod money;
pub mod patterns;
pub mod text;

pub use dates::{format_date_with, parse_calendar_date, render_date};
pub use money::{format_amount, format_money_with, group_thousands, number_to_decimal};
pub use text::{format_text_with, number_to_string};

use serde_json::Value;

use crate::models::config::{DateStyle, ViewConfig};

/// Formatter bound to a currency glyph, date style and missing-value placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFormatter {
    currency_symbol: String,
    date_style: DateStyle,
    placeholder: String,
}

impl FieldFormatter {
    /// Create a formatter with the default `¥`, `2024/1/15` and `-` settings.
    pub fn new() -> Self {
        Self::from_config(&ViewConfig::default())
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            currency_symbol: config.format.currency_symbol.clone(),
            date_style: config.format.date_style,
            placeholder: config.placeholders.missing_value.clone(),
        }
    }

    /// Set the currency glyph.
    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    /// Set the date style.
    pub fn with_date_style(mut self, style: DateStyle) -> Self {
        self.date_style = style;
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn date(&self, value: Option<&Value>) -> String {
        format_date_with(value, self.date_style, &self.placeholder)
    }

    pub fn money(&self, value: Option<&Value>) -> String {
        format_money_with(value, &self.currency_symbol, &self.placeholder)
    }

    pub fn text(&self, value: Option<&Value>) -> String {
        format_text_with(value, &self.placeholder)
    }
}

impl Default for FieldFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a date with the default settings.
pub fn format_date(value: Option<&Value>) -> String {
    FieldFormatter::new().date(value)
}

/// Format money with the default settings.
pub fn format_money(value: Option<&Value>) -> String {
    FieldFormatter::new().money(value)
}

/// Format text with the default settings.
pub fn format_text(value: Option<&Value>) -> String {
    FieldFormatter::new().text(value)
}
