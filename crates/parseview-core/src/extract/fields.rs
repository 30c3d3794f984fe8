//! Fixed per-kind projection tables.
//!
//! Row order and row count are part of the contract with the UI: every
//! entry always yields exactly one row.

use crate::models::payload::DocumentKind;

/// How a field value is turned into display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Text,
    Date,
    Money,
    /// Zero-based page indices shown as 1-based page numbers.
    StampPages,
}

/// One projected field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Payload key.
    pub key: &'static str,
    /// Row label.
    pub label: &'static str,
    pub format: FieldFormat,
}

const fn field(key: &'static str, label: &'static str, format: FieldFormat) -> FieldSpec {
    FieldSpec { key, label, format }
}

pub const CONTRACT_FIELDS: &[FieldSpec] = &[
    field("party_a", "甲方", FieldFormat::Text),
    field("party_b", "乙方", FieldFormat::Text),
    field("contract_number", "合同编号", FieldFormat::Text),
    field("sign_date", "签约日期", FieldFormat::Date),
    field("effective_date", "生效日期", FieldFormat::Date),
    field("expiry_date", "到期日期", FieldFormat::Date),
    field("amount", "合同金额", FieldFormat::Money),
    field("stamp_pages", "盖章页", FieldFormat::StampPages),
];

pub const INVOICE_FIELDS: &[FieldSpec] = &[
    field("invoice_number", "发票号码", FieldFormat::Text),
    field("invoice_code", "发票代码", FieldFormat::Text),
    field("invoice_date", "开票日期", FieldFormat::Date),
    field("seller", "销售方", FieldFormat::Text),
    field("buyer", "购买方", FieldFormat::Text),
    field("amount", "发票金额", FieldFormat::Money),
    field("tax_amount", "税额", FieldFormat::Money),
];

/// Projection table for a document kind.
pub fn fields_for(kind: DocumentKind) -> &'static [FieldSpec] {
    match kind {
        DocumentKind::Contract => CONTRACT_FIELDS,
        DocumentKind::Invoice => INVOICE_FIELDS,
    }
}
