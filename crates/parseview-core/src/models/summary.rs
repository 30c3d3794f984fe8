//! Typed projections of a parse payload.
//!
//! Same keys as the display rows, but read into typed values for code that
//! needs numbers and dates rather than strings. Wrong-typed values become `None`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payload::RawParsedPayload;
use crate::format::{number_to_decimal, number_to_string, parse_calendar_date};

/// Contract fields read from a payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_a: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Zero-based page indices.
    pub stamp_pages: Vec<u64>,
}

impl ContractSummary {
    pub fn from_payload(payload: RawParsedPayload<'_>) -> Self {
        Self {
            party_a: text_field(payload, "party_a"),
            party_b: text_field(payload, "party_b"),
            contract_number: text_field(payload, "contract_number"),
            contract_name: text_field(payload, "contract_name"),
            sign_date: date_field(payload, "sign_date"),
            effective_date: date_field(payload, "effective_date"),
            expiry_date: date_field(payload, "expiry_date"),
            amount: decimal_field(payload, "amount"),
            stamp_pages: stamp_page_indices(payload.get("stamp_pages")),
        }
    }
}

/// Invoice fields read from a payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buyer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
}

impl InvoiceSummary {
    pub fn from_payload(payload: RawParsedPayload<'_>) -> Self {
        Self {
            invoice_number: text_field(payload, "invoice_number"),
            invoice_code: text_field(payload, "invoice_code"),
            invoice_date: date_field(payload, "invoice_date"),
            seller: text_field(payload, "seller"),
            buyer: text_field(payload, "buyer"),
            amount: decimal_field(payload, "amount"),
            tax_amount: decimal_field(payload, "tax_amount"),
        }
    }
}

/// Non-empty string, or a number rendered as text.
fn text_field(payload: RawParsedPayload<'_>, key: &str) -> Option<String> {
    match payload.get(key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Number(n) => Some(number_to_string(n)),
        _ => None,
    }
}

fn date_field(payload: RawParsedPayload<'_>, key: &str) -> Option<NaiveDate> {
    payload.get_str(key).and_then(parse_calendar_date)
}

fn decimal_field(payload: RawParsedPayload<'_>, key: &str) -> Option<Decimal> {
    payload.get(key)?.as_number().and_then(number_to_decimal)
}

/// Zero-based page indices from a `stamp_pages` value.
///
/// Elements that are not non-negative integers are skipped; a non-array
/// value yields no pages.
pub fn stamp_page_indices(value: Option<&Value>) -> Vec<u64> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| match item {
            Value::Number(n) => n.as_u64().or_else(|| {
                n.as_f64()
                    .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f < u64::MAX as f64)
                    .map(|f| f as u64)
            }),
            _ => None,
        })
        .collect()
}
