//! The untrusted parse payload and the document kind that selects its projection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ParseViewError, Result};

/// Key holding the upstream parse status.
pub const PARSE_STATUS_KEY: &str = "parse_status";

/// Key holding the upstream human-readable message.
pub const PARSE_MESSAGE_KEY: &str = "parse_message";

/// Key holding the extracted document text.
pub const RAW_TEXT_KEY: &str = "raw_text";

/// Which field projection applies to a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Contract,
    Invoice,
}

impl DocumentKind {
    /// Lowercase name, as used in record `kind` tags.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contract => "contract",
            Self::Invoice => "invoice",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = ParseViewError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "contract" => Ok(Self::Contract),
            "invoice" => Ok(Self::Invoice),
            other => Err(ParseViewError::UnknownKind(other.to_string())),
        }
    }
}

/// Read-only view over an optional parse payload.
///
/// A JSON `null` is treated the same as a missing payload. A present value
/// that is not an object has no readable keys, so every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawParsedPayload<'a> {
    value: Option<&'a Value>,
}

impl<'a> RawParsedPayload<'a> {
    pub fn new(value: Option<&'a Value>) -> Self {
        Self {
            value: value.filter(|v| !v.is_null()),
        }
    }

    /// A payload that does not exist.
    pub fn absent() -> Self {
        Self { value: None }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// The underlying JSON value, if present.
    pub fn value(&self) -> Option<&'a Value> {
        self.value
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.value.and_then(|v| v.as_object()).and_then(|obj| obj.get(key))
    }

    /// Look up a top-level key that must hold a string.
    pub fn get_str(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }
}

impl<'a> From<&'a Value> for RawParsedPayload<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(Some(value))
    }
}

impl<'a> From<Option<&'a Value>> for RawParsedPayload<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        Self::new(value)
    }
}

/// Decode payload JSON text. A literal `null` decodes to `None`.
pub fn decode_payload(text: &str) -> Result<Option<Value>> {
    let value: Value = serde_json::from_str(text)?;
    Ok(if value.is_null() { None } else { Some(value) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("contract".parse::<DocumentKind>().unwrap(), DocumentKind::Contract);
        assert_eq!(" Invoice ".parse::<DocumentKind>().unwrap(), DocumentKind::Invoice);
        assert!(matches!(
            "receipt".parse::<DocumentKind>(),
            Err(ParseViewError::UnknownKind(k)) if k == "receipt"
        ));
    }

    #[test]
    fn test_null_is_absent() {
        let null = Value::Null;
        assert!(!RawParsedPayload::from(&null).is_present());
        assert!(!RawParsedPayload::absent().is_present());
    }

    #[test]
    fn test_non_object_has_no_keys() {
        let value = json!(["parse_status", "full"]);
        let payload = RawParsedPayload::from(&value);

        assert!(payload.is_present());
        assert!(payload.get(PARSE_STATUS_KEY).is_none());
    }

    #[test]
    fn test_get_str_requires_string() {
        let value = json!({"parse_status": 42, "parse_message": "ok"});
        let payload = RawParsedPayload::from(&value);

        assert_eq!(payload.get_str(PARSE_STATUS_KEY), None);
        assert_eq!(payload.get_str(PARSE_MESSAGE_KEY), Some("ok"));
    }

    #[test]
    fn test_decode_payload() {
        assert!(decode_payload("null").unwrap().is_none());
        assert_eq!(
            decode_payload(r#"{"seller": "A Co"}"#).unwrap(),
            Some(json!({"seller": "A Co"}))
        );
        assert!(matches!(decode_payload("{"), Err(ParseViewError::Json(_))));
    }
}
