//! Calendar date recognition and rendering.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::Regex;
use serde_json::Value;
use tracing::trace;

use super::patterns::{DATE_CHINESE_LONG, DATE_ISO_PREFIX, DATE_YMD_SEPARATED};
use crate::models::config::DateStyle;

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a date or datetime string down to its calendar day.
///
/// Datetimes with an offset keep the day as written, not the day in any
/// local time zone.
pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    [&*DATE_YMD_SEPARATED, &*DATE_CHINESE_LONG, &*DATE_ISO_PREFIX]
        .into_iter()
        .find_map(|pattern| captured_ymd(pattern, s))
}

fn captured_ymd(pattern: &Regex, s: &str) -> Option<NaiveDate> {
    let caps = pattern.captures(s)?;
    let year: i32 = caps[1].parse().ok()?;
    let month: u32 = caps[2].parse().ok()?;
    let day: u32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Render a calendar day in the given style.
pub fn render_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::ZhCn => format!("{}/{}/{}", date.year(), date.month(), date.day()),
        DateStyle::Iso => date.format("%Y-%m-%d").to_string(),
    }
}

/// Format a loosely-typed date value.
///
/// Non-strings and empty strings give `placeholder`; strings that are not
/// dates come back unchanged.
pub fn format_date_with(value: Option<&Value>, style: DateStyle, placeholder: &str) -> String {
    let Some(s) = value.and_then(Value::as_str).filter(|s| !s.is_empty()) else {
        return placeholder.to_string();
    };

    match parse_calendar_date(s) {
        Some(date) => render_date(date, style),
        None => {
            trace!("keeping unparseable date string {:?}", s);
            s.to_string()
        }
    }
}
