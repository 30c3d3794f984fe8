//! Parse result view assembly.
//!
//! A view is a disposable projection of one payload: status, message,
//! summary rows and the raw text / raw JSON fallbacks. Building one never
//! fails.

use serde::Serialize;

use crate::extract::{ProjectionExtractor, RowExtractor, SummaryRow};
use crate::format::FieldFormatter;
use crate::models::config::ViewConfig;
use crate::models::payload::{DocumentKind, PARSE_MESSAGE_KEY, RAW_TEXT_KEY, RawParsedPayload};
use crate::status::{Badge, ParseOutcome, classify, detail_badge};

/// Everything the parse result dialog shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseResultView {
    pub kind: DocumentKind,
    pub outcome: ParseOutcome,
    pub message: String,
    pub rows: Vec<SummaryRow>,
    /// Empty when the payload carries no text.
    pub raw_text: String,
    /// Pretty-printed payload, empty when there is no payload.
    pub raw_json: String,
}

impl ParseResultView {
    /// Whether there is a summary table to show.
    pub fn has_rows(&self) -> bool {
        !self.rows.is_empty()
    }

    /// Look up a row by payload key.
    pub fn row(&self, key: &str) -> Option<&SummaryRow> {
        self.rows.iter().find(|row| row.key == key)
    }

    /// Raw text, or `placeholder` when there is none.
    pub fn raw_text_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        if self.raw_text.is_empty() { placeholder } else { &self.raw_text }
    }
}

/// Builds views with a given configuration.
#[derive(Debug, Clone, Default)]
pub struct ViewBuilder {
    config: ViewConfig,
}

impl ViewBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific configuration.
    pub fn with_config(mut self, config: ViewConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn build(&self, kind: DocumentKind, payload: RawParsedPayload<'_>) -> ParseResultView {
        let extractor = ProjectionExtractor::new(kind)
            .with_formatter(FieldFormatter::from_config(&self.config));

        let message = payload
            .get_str(PARSE_MESSAGE_KEY)
            .map(str::to_string)
            .unwrap_or_else(|| self.config.placeholders.no_message.clone());

        let raw_text = payload
            .get_str(RAW_TEXT_KEY)
            .map(str::to_string)
            .unwrap_or_default();

        // Alternate Display pretty-prints with two-space indentation.
        let raw_json = payload
            .value()
            .map(|value| format!("{:#}", value))
            .unwrap_or_default();

        ParseResultView {
            kind,
            outcome: classify(payload),
            message,
            rows: extractor.extract_rows(payload),
            raw_text,
            raw_json,
        }
    }

    /// Status badge for the detail dialog.
    pub fn badge(&self, payload: RawParsedPayload<'_>) -> Badge {
        detail_badge(payload, &self.config.labels)
    }
}

/// Build a view with the default configuration.
pub fn build_view(kind: DocumentKind, payload: RawParsedPayload<'_>) -> ParseResultView {
    ViewBuilder::new().build(kind, payload)
}
