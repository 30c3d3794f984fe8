//! Generic text rendering for arbitrary JSON values.

use serde_json::{Number, Value};

/// Render a number the way a browser stringifies it: integral floats drop
/// their fractional part.
pub fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        _ => n.to_string(),
    }
}

fn element_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_to_string(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(element_to_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}

/// Format a loosely-typed value as display text.
///
/// Arrays join their elements with `, `; objects render as compact JSON.
/// Missing values, empty strings and arrays that render to nothing give
/// `placeholder`.
pub fn format_text_with(value: Option<&Value>, placeholder: &str) -> String {
    let rendered = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::Array(items)) => items
            .iter()
            .map(element_to_string)
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => element_to_string(other),
    };

    if rendered.is_empty() {
        placeholder.to_string()
    } else {
        rendered
    }
}
