//! Core library for contract and invoice parse results.
//!
//! This crate provides:
//! - Parse status classification and list/detail badges
//! - Total formatters for dates, money and generic text
//! - Fixed per-kind summary row projections
//! - The aggregate parse result view with raw text and raw JSON fallbacks
//! - Typed summaries and contract/invoice records

pub mod error;
pub mod extract;
pub mod format;
pub mod models;
pub mod status;
pub mod view;

pub use error::{ParseViewError, Result};
pub use extract::{ProjectionExtractor, RowExtractor, SummaryRow, extract_rows};
pub use format::{FieldFormatter, format_date, format_money, format_text};
pub use models::config::{DateStyle, ViewConfig};
pub use models::entity::{ContractRecord, DocumentRecord, InvoiceRecord, ParsedDocument};
pub use models::payload::{DocumentKind, RawParsedPayload, decode_payload};
pub use models::summary::{ContractSummary, InvoiceSummary};
pub use status::{Badge, LabelContext, ParseOutcome, Severity, classify, list_badge};
pub use view::{ParseResultView, ViewBuilder, build_view};
