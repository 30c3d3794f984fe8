//! Money rendering with a currency glyph and thousands separators.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::{Number, Value};
use tracing::trace;

/// Convert a JSON number to a decimal without going through `f64` when
/// the number is integral.
pub fn number_to_decimal(n: &Number) -> Option<Decimal> {
    if let Some(i) = n.as_i64() {
        return Some(Decimal::from(i));
    }
    if let Some(u) = n.as_u64() {
        return Some(Decimal::from(u));
    }
    n.as_f64().and_then(Decimal::from_f64)
}

/// Insert `,` every three digits of an unsigned integer string.
pub fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut formatted = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    formatted
}

/// Format an amount as `¥1,234.50` (symbol configurable), half away from zero.
pub fn format_amount(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    render(&format!("{:.2}", rounded.abs()), negative, symbol)
}

fn format_float(value: f64, symbol: &str) -> String {
    render(&format!("{:.2}", value.abs()), value < 0.0, symbol)
}

fn render(fixed: &str, negative: bool, symbol: &str) -> String {
    let (integer_part, decimal_part) = fixed.split_once('.').unwrap_or((fixed, "00"));
    let sign = if negative { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, group_thousands(integer_part), decimal_part)
}

/// Format a loosely-typed money value; anything but a JSON number gives `placeholder`.
pub fn format_money_with(value: Option<&Value>, symbol: &str, placeholder: &str) -> String {
    let Some(Value::Number(n)) = value else {
        trace!("money value is not a number: {:?}", value);
        return placeholder.to_string();
    };

    match number_to_decimal(n) {
        Some(amount) => format_amount(amount, symbol),
        // Outside the decimal range; fall back to float rendering.
        None => n
            .as_f64()
            .map(|f| format_float(f, symbol))
            .unwrap_or_else(|| placeholder.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::str::FromStr;

    fn money(value: Value) -> String {
        format_money_with(Some(&value), "¥", "-")
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("12345678"), "12,345,678");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(money(json!(1234.5)), "¥1,234.50");
        assert_eq!(money(json!(1000)), "¥1,000.00");
        assert_eq!(money(json!(0)), "¥0.00");
        assert_eq!(money(json!(0.125)), "¥0.13");
        assert_eq!(money(json!(-1234567.891)), "-¥1,234,567.89");
        assert_eq!(money(json!(u64::MAX)), "¥18,446,744,073,709,551,615.00");
    }

    #[test]
    fn test_format_money_tiny_negative_has_no_sign() {
        assert_eq!(money(json!(-0.001)), "¥0.00");
    }

    #[test]
    fn test_format_money_huge_float() {
        assert_eq!(money(json!(1e30)), format!("¥{}.00", group_thousands(&format!("{:.0}", 1e30))));
    }

    #[test]
    fn test_format_money_non_numbers() {
        assert_eq!(money(json!("x")), "-");
        assert_eq!(money(json!("1234.5")), "-");
        assert_eq!(money(json!(null)), "-");
        assert_eq!(money(json!(true)), "-");
        assert_eq!(format_money_with(None, "¥", "-"), "-");
    }

    #[test]
    fn test_format_amount_custom_symbol() {
        let amount = Decimal::from_str("9876.543").unwrap();
        assert_eq!(format_amount(amount, "CNY "), "CNY 9,876.54");
    }
}
