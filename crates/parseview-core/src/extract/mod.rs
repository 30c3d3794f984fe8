//! Kind-specific projection of a payload into labelled summary rows.

pub mod fields;

pub use fields::{CONTRACT_FIELDS, FieldFormat, FieldSpec, INVOICE_FIELDS, fields_for};

use serde::Serialize;
use serde_json::Value;

use crate::format::FieldFormatter;
use crate::models::payload::{DocumentKind, RawParsedPayload};
use crate::models::summary::stamp_page_indices;

/// One labelled, already formatted field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Payload key the row was read from.
    pub key: &'static str,
    pub label: &'static str,
    pub value: String,
}

/// Trait for summary row extractors.
pub trait RowExtractor {
    /// Project a payload into rows. An absent payload yields no rows.
    fn extract_rows(&self, payload: RawParsedPayload<'_>) -> Vec<SummaryRow>;
}

/// Table-driven extractor for one document kind.
#[derive(Debug, Clone)]
pub struct ProjectionExtractor {
    kind: DocumentKind,
    formatter: FieldFormatter,
}

impl ProjectionExtractor {
    pub fn new(kind: DocumentKind) -> Self {
        Self {
            kind,
            formatter: FieldFormatter::new(),
        }
    }

    /// Use a configured formatter.
    pub fn with_formatter(mut self, formatter: FieldFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    fn format_field(&self, spec: &FieldSpec, value: Option<&Value>) -> String {
        match spec.format {
            FieldFormat::Text => self.formatter.text(value),
            FieldFormat::Date => self.formatter.date(value),
            FieldFormat::Money => self.formatter.money(value),
            FieldFormat::StampPages => format_stamp_pages(value, self.formatter.placeholder()),
        }
    }
}

impl RowExtractor for ProjectionExtractor {
    fn extract_rows(&self, payload: RawParsedPayload<'_>) -> Vec<SummaryRow> {
        if !payload.is_present() {
            return Vec::new();
        }

        fields_for(self.kind)
            .iter()
            .map(|spec| SummaryRow {
                key: spec.key,
                label: spec.label,
                value: self.format_field(spec, payload.get(spec.key)),
            })
            .collect()
    }
}

/// Render zero-based page indices as `1, 3, 6`.
pub fn format_stamp_pages(value: Option<&Value>, placeholder: &str) -> String {
    let pages = stamp_page_indices(value);
    if pages.is_empty() {
        return placeholder.to_string();
    }

    pages
        .iter()
        .map(|index| index.saturating_add(1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Extract rows with the default formatter.
pub fn extract_rows(kind: DocumentKind, payload: RawParsedPayload<'_>) -> Vec<SummaryRow> {
    ProjectionExtractor::new(kind).extract_rows(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn values(rows: &[SummaryRow]) -> Vec<(&str, &str)> {
        rows.iter().map(|r| (r.label, r.value.as_str())).collect()
    }

    #[test]
    fn test_absent_payload_has_no_rows() {
        assert!(extract_rows(DocumentKind::Contract, RawParsedPayload::absent()).is_empty());
        assert!(extract_rows(DocumentKind::Invoice, RawParsedPayload::absent()).is_empty());
    }

    #[test]
    fn test_contract_rows() {
        let value = json!({
            "party_a": "甲公司",
            "party_b": "乙公司",
            "contract_number": "HT-2024-001",
            "sign_date": "2024-01-15T00:00:00",
            "effective_date": "2024年2月1日",
            "expiry_date": "长期",
            "amount": 1234.5,
            "stamp_pages": [0, 2, 5],
            "contract_name": "ignored",
        });
        let rows = extract_rows(DocumentKind::Contract, RawParsedPayload::from(&value));

        assert_eq!(
            values(&rows),
            vec![
                ("甲方", "甲公司"),
                ("乙方", "乙公司"),
                ("合同编号", "HT-2024-001"),
                ("签约日期", "2024/1/15"),
                ("生效日期", "2024/2/1"),
                ("到期日期", "长期"),
                ("合同金额", "¥1,234.50"),
                ("盖章页", "1, 3, 6"),
            ]
        );
    }

    #[test]
    fn test_empty_payload_keeps_every_row() {
        let value = json!({});
        let rows = extract_rows(DocumentKind::Invoice, RawParsedPayload::from(&value));

        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.value == "-"));
        assert_eq!(rows[0].key, "invoice_number");
        assert_eq!(rows[6].key, "tax_amount");
    }

    #[test]
    fn test_stamp_pages() {
        assert_eq!(format_stamp_pages(Some(&json!([0, 2, 5])), "-"), "1, 3, 6");
        assert_eq!(format_stamp_pages(Some(&json!([])), "-"), "-");
        assert_eq!(format_stamp_pages(Some(&json!("1")), "-"), "-");
        assert_eq!(format_stamp_pages(None, "-"), "-");
    }

    #[test]
    fn test_configured_formatter() {
        let value = json!({"amount": 10, "tax_amount": "n/a"});
        let extractor = ProjectionExtractor::new(DocumentKind::Invoice)
            .with_formatter(FieldFormatter::new().with_currency_symbol("$"));
        let rows = extractor.extract_rows(RawParsedPayload::from(&value));

        assert_eq!(rows[5].value, "$10.00");
        assert_eq!(rows[6].value, "-");
    }
}
