//! Parse status classification and compact status badges.
//!
//! One classification backs every place a status is shown; list rows and
//! detail dialogs differ only in which label they pick for [`ParseOutcome::Unparsed`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::models::config::StatusLabels;
use crate::models::entity::ParsedDocument;
use crate::models::payload::{PARSE_STATUS_KEY, RawParsedPayload};

/// How completely a payload was extracted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseOutcome {
    /// No payload, or a payload without a recognised status.
    Unparsed,
    /// Every expected field was extracted.
    Full,
    /// Some fields were extracted.
    Partial,
    /// Extraction was attempted and failed; the message explains why.
    Failed,
    /// The document format is not eligible for extraction.
    Unsupported,
}

impl ParseOutcome {
    /// Map a status string to its outcome. Matching is exact.
    pub fn from_status(status: &str) -> Option<Self> {
        match status {
            "full" => Some(Self::Full),
            "partial" => Some(Self::Partial),
            "failed" => Some(Self::Failed),
            "unsupported" => Some(Self::Unsupported),
            _ => None,
        }
    }

    /// Lowercase name, matching the upstream `parse_status` spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unparsed => "unparsed",
            Self::Full => "full",
            Self::Partial => "partial",
            Self::Failed => "failed",
            Self::Unsupported => "unsupported",
        }
    }

    /// Badge tone for this outcome.
    pub fn severity(self) -> Severity {
        match self {
            Self::Unparsed | Self::Unsupported => Severity::Neutral,
            Self::Partial => Severity::Info,
            Self::Full => Severity::Warning,
            Self::Failed => Severity::Danger,
        }
    }
}

/// Classify a payload.
///
/// An absent payload, a missing or non-string `parse_status`, and an
/// unrecognised status string all give [`ParseOutcome::Unparsed`]. A caller
/// cannot tell "never parsed" from "parsed into something unexpected".
pub fn classify(payload: RawParsedPayload<'_>) -> ParseOutcome {
    if !payload.is_present() {
        return ParseOutcome::Unparsed;
    }

    match payload.get(PARSE_STATUS_KEY) {
        Some(Value::String(status)) => ParseOutcome::from_status(status).unwrap_or_else(|| {
            debug!("unrecognised parse_status {:?}", status);
            ParseOutcome::Unparsed
        }),
        Some(other) => {
            debug!("non-string parse_status {}", other);
            ParseOutcome::Unparsed
        }
        None => ParseOutcome::Unparsed,
    }
}

/// Badge tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Neutral,
    Info,
    /// Used for fully parsed documents as a secondary, non-alerting tone.
    Warning,
    Danger,
}

impl Severity {
    /// Lowercase name as serialized.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Where a status label is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelContext {
    /// A row in a contract or invoice table.
    ListRow,
    /// The parse result dialog of a single entity.
    DetailDialog,
}

/// Pick the label for an outcome in a display context.
pub fn status_label(labels: &StatusLabels, outcome: ParseOutcome, context: LabelContext) -> &str {
    match (outcome, context) {
        (ParseOutcome::Unparsed, LabelContext::ListRow) => &labels.pending,
        (ParseOutcome::Unparsed, LabelContext::DetailDialog) => &labels.unparsed,
        (ParseOutcome::Full, _) => &labels.full,
        (ParseOutcome::Partial, _) => &labels.partial,
        (ParseOutcome::Failed, _) => &labels.failed,
        (ParseOutcome::Unsupported, _) => &labels.unsupported,
    }
}

/// Compact status indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub severity: Severity,
}

impl Badge {
    pub fn new(label: impl Into<String>, severity: Severity) -> Self {
        Self {
            label: label.into(),
            severity,
        }
    }
}

/// Badge for a table row.
///
/// The file reference is checked before the payload: an entity without a
/// file is "not uploaded" whatever its payload says.
pub fn list_badge<D: ParsedDocument + ?Sized>(document: &D, labels: &StatusLabels) -> Badge {
    if !document.has_file() {
        return Badge::new(labels.not_uploaded.clone(), Severity::Neutral);
    }

    let outcome = classify(document.payload());
    Badge::new(status_label(labels, outcome, LabelContext::ListRow), outcome.severity())
}

/// Badge for the detail dialog, driven by the payload alone.
pub fn detail_badge(payload: RawParsedPayload<'_>, labels: &StatusLabels) -> Badge {
    let outcome = classify(payload);
    Badge::new(
        status_label(labels, outcome, LabelContext::DetailDialog),
        outcome.severity(),
    )
}
