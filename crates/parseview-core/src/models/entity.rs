//! Contract and invoice records as the UI receives them.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use super::payload::{DocumentKind, RawParsedPayload};
use super::summary::ContractSummary;
use crate::format::dates::parse_calendar_date;
use crate::format::money::number_to_decimal;

/// An entity that may carry an uploaded file and its parse payload.
pub trait ParsedDocument {
    /// Which projection applies to this entity's payload.
    fn kind(&self) -> DocumentKind;

    /// Stored path of the uploaded file.
    fn file_ref(&self) -> Option<&str>;

    /// Raw parse payload.
    fn parsed_data(&self) -> Option<&Value>;

    /// Whether a file has been attached at all.
    fn has_file(&self) -> bool {
        self.file_ref().is_some_and(|path| !path.trim().is_empty())
    }

    fn payload(&self) -> RawParsedPayload<'_> {
        RawParsedPayload::new(self.parsed_data())
    }
}

/// A contract row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContractRecord {
    pub contract_number: Option<String>,
    pub contract_name: Option<String>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
    #[serde(deserialize_with = "lenient_date")]
    pub sign_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub effective_date: Option<NaiveDate>,
    #[serde(deserialize_with = "lenient_date")]
    pub expiry_date: Option<NaiveDate>,
    pub file_path: Option<String>,
    pub parsed_data: Option<Value>,
}

impl ContractRecord {
    /// Fill empty business fields from the attached payload.
    ///
    /// Fields that already hold a value are never overwritten. Returns the
    /// names of the fields that were filled.
    pub fn apply_parsed(&mut self) -> Vec<&'static str> {
        let summary = ContractSummary::from_payload(self.payload());
        let mut applied = Vec::new();

        if fill_text(&mut self.contract_number, summary.contract_number) {
            applied.push("contract_number");
        }
        if fill_text(&mut self.contract_name, summary.contract_name) {
            applied.push("contract_name");
        }
        if fill(&mut self.amount, summary.amount) {
            applied.push("amount");
        }
        if fill(&mut self.sign_date, summary.sign_date) {
            applied.push("sign_date");
        }
        if fill(&mut self.effective_date, summary.effective_date) {
            applied.push("effective_date");
        }
        if fill(&mut self.expiry_date, summary.expiry_date) {
            applied.push("expiry_date");
        }

        if !applied.is_empty() {
            debug!("filled contract fields from payload: {:?}", applied);
        }
        applied
    }
}

/// Accept dates and datetimes in any form the date formatter reads;
/// anything else becomes `None`.
fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let date = value.as_ref().and_then(Value::as_str).and_then(parse_calendar_date);
    if date.is_none() && value.as_ref().is_some_and(|v| !v.is_null()) {
        debug!("ignoring unreadable record date {:?}", value);
    }
    Ok(date)
}

/// Accept amounts as JSON numbers or numeric strings; anything else becomes `None`.
fn lenient_decimal<'de, D>(deserializer: D) -> std::result::Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => number_to_decimal(&n),
        Some(Value::String(s)) => Decimal::from_str(s.trim()).ok(),
        Some(Value::Null) | None => None,
        Some(other) => {
            debug!("ignoring non-numeric record amount {}", other);
            None
        }
    };
    Ok(amount)
}

fn fill<T>(slot: &mut Option<T>, parsed: Option<T>) -> bool {
    if slot.is_some() || parsed.is_none() {
        return false;
    }
    *slot = parsed;
    true
}

fn fill_text(slot: &mut Option<String>, parsed: Option<String>) -> bool {
    if slot.as_deref().is_some_and(|s| !s.is_empty()) {
        return false;
    }
    match parsed {
        Some(value) => {
            *slot = Some(value);
            true
        }
        None => false,
    }
}

impl ParsedDocument for ContractRecord {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Contract
    }

    fn file_ref(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    fn parsed_data(&self) -> Option<&Value> {
        self.parsed_data.as_ref()
    }
}

/// An invoice row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceRecord {
    pub invoice_number: Option<String>,
    pub invoice_code: Option<String>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
    #[serde(deserialize_with = "lenient_date")]
    pub invoice_date: Option<NaiveDate>,
    pub seller: Option<String>,
    pub buyer: Option<String>,
    #[serde(deserialize_with = "lenient_decimal")]
    pub tax_amount: Option<Decimal>,
    pub remark: Option<String>,
    pub file_path: Option<String>,
    pub parsed_data: Option<Value>,
}

impl ParsedDocument for InvoiceRecord {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Invoice
    }

    fn file_ref(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    fn parsed_data(&self) -> Option<&Value> {
        self.parsed_data.as_ref()
    }
}

/// A record of either kind, tagged by `kind` in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DocumentRecord {
    Contract(ContractRecord),
    Invoice(InvoiceRecord),
}

impl DocumentRecord {
    fn inner(&self) -> &dyn ParsedDocument {
        match self {
            Self::Contract(record) => record,
            Self::Invoice(record) => record,
        }
    }
}

impl ParsedDocument for DocumentRecord {
    fn kind(&self) -> DocumentKind {
        self.inner().kind()
    }

    fn file_ref(&self) -> Option<&str> {
        self.inner().file_ref()
    }

    fn parsed_data(&self) -> Option<&Value> {
        self.inner().parsed_data()
    }
}
