//! WASM bindings for contract and invoice parse result views.
//!
//! This crate lets the browser UI call the normalizer directly. Payloads are
//! passed as plain JS values; anything that is not JSON-shaped is treated
//! as an absent payload.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use parseview_core::{
    DocumentKind, DocumentRecord, RawParsedPayload, ViewBuilder, ViewConfig,
};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn to_json(value: JsValue) -> Option<Value> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    match serde_wasm_bindgen::from_value::<Value>(value) {
        Ok(json) => Some(json),
        Err(e) => {
            web_sys::console::warn_1(&format!("parseview: ignoring non-JSON payload: {}", e).into());
            None
        }
    }
}

fn parse_kind(kind: &str) -> Result<DocumentKind, JsValue> {
    kind.parse().map_err(|e: parseview_core::ParseViewError| JsValue::from_str(&e.to_string()))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build the parse result view for a payload.
#[wasm_bindgen(js_name = buildView)]
pub fn build_view(kind: &str, payload: JsValue) -> Result<JsValue, JsValue> {
    ParseViewer::new().build_view(kind, payload)
}

/// Classify a payload; returns the outcome name.
#[wasm_bindgen]
pub fn classify(payload: JsValue) -> String {
    let json = to_json(payload);
    parseview_core::classify(RawParsedPayload::new(json.as_ref()))
        .as_str()
        .to_string()
}

/// Badge for a contract or invoice table row.
#[wasm_bindgen(js_name = listBadge)]
pub fn list_badge(record: JsValue) -> Result<JsValue, JsValue> {
    ParseViewer::new().list_badge(record)
}

/// Format a money value, e.g. `¥1,234.50`.
#[wasm_bindgen(js_name = formatMoney)]
pub fn format_money(value: JsValue) -> String {
    parseview_core::format_money(to_json(value).as_ref())
}

/// Format a calendar date.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: JsValue) -> String {
    parseview_core::format_date(to_json(value).as_ref())
}

/// Format arbitrary text.
#[wasm_bindgen(js_name = formatText)]
pub fn format_text(value: JsValue) -> String {
    parseview_core::format_text(to_json(value).as_ref())
}

/// View builder class carrying a configuration.
#[wasm_bindgen]
pub struct ParseViewer {
    builder: ViewBuilder,
}

#[wasm_bindgen]
impl ParseViewer {
    /// Create a viewer with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            builder: ViewBuilder::new(),
        }
    }

    /// Create a viewer from a configuration object; missing keys use defaults.
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config: JsValue) -> Result<ParseViewer, JsValue> {
        let config: ViewConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            builder: ViewBuilder::new().with_config(config),
        })
    }

    /// Build the parse result view together with its detail badge.
    #[wasm_bindgen(js_name = buildView)]
    pub fn build_view(&self, kind: &str, payload: JsValue) -> Result<JsValue, JsValue> {
        let kind = parse_kind(kind)?;
        let json = to_json(payload);
        let payload = RawParsedPayload::new(json.as_ref());

        #[derive(serde::Serialize)]
        struct ViewResult {
            #[serde(flatten)]
            view: parseview_core::ParseResultView,
            badge: parseview_core::Badge,
        }

        to_js(&ViewResult {
            view: self.builder.build(kind, payload),
            badge: self.builder.badge(payload),
        })
    }

    /// Badge for a record `{kind, file_path, parsed_data, ...}`.
    #[wasm_bindgen(js_name = listBadge)]
    pub fn list_badge(&self, record: JsValue) -> Result<JsValue, JsValue> {
        let record: DocumentRecord = serde_wasm_bindgen::from_value(record)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        to_js(&parseview_core::list_badge(&record, &self.builder.config().labels))
    }
}

impl Default for ParseViewer {
    fn default() -> Self {
        Self::new()
    }
}
