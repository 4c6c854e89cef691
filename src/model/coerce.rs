//! Numeric coercion for chart values.
//!
//! Assistants write values like "$1,200" or "12%". We strip currency and
//! thousands separators and read the leading number, the way a lenient
//! float parser would. Anything that does not start with a number is kept.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Coerce a value to a JSON number when possible, otherwise return it unchanged.
///
/// Numbers pass through verbatim. Strings are parsed, and so is a
/// single-element array through its element's text (`["$1,200"]` -> 1200).
pub fn coerce_number(value: &Value) -> Value {
    if value.is_number() {
        return value.clone();
    }
    let Some(text) = string_form(value) else {
        return value.clone();
    };

    let cleaned: String = text.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    match parse_leading_number(&cleaned).and_then(to_json_number) {
        Some(n) => Value::Number(n),
        None => value.clone(),
    }
}

/// Text a value stands for, if it can hold a number at all.
fn string_form(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Array(items) if items.len() == 1 => string_form(&items[0]),
        _ => None,
    }
}

/// Parse the longest numeric prefix: `[ws][sign]digits[.digits][(e|E)[sign]digits]`.
fn parse_leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts if at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn to_json_number(f: f64) -> Option<Number> {
    if !f.is_finite() {
        return None;
    }
    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        return Some(Number::from(f as i64));
    }
    Number::from_f64(f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(coerce_number(&json!(3)), json!(3));
        assert_eq!(coerce_number(&json!(2.5)), json!(2.5));
    }

    #[test]
    fn strips_currency_and_separators() {
        assert_eq!(coerce_number(&json!("$1,200")), json!(1200));
        assert_eq!(coerce_number(&json!("1,500.75")), json!(1500.75));
        assert_eq!(coerce_number(&json!(" -$3")), json!(-3));
    }

    #[test]
    fn reads_leading_number_only() {
        assert_eq!(coerce_number(&json!("12%")), json!(12));
        assert_eq!(coerce_number(&json!("1,200 USD")), json!(1200));
        assert_eq!(coerce_number(&json!(".5x")), json!(0.5));
        assert_eq!(coerce_number(&json!("2e3")), json!(2000));
        assert_eq!(coerce_number(&json!("7e")), json!(7));
        assert_eq!(coerce_number(&json!("0")), json!(0));
    }

    #[test]
    fn single_element_arrays_read_through_their_element() {
        assert_eq!(coerce_number(&json!(["$1,200"])), json!(1200));
        assert_eq!(coerce_number(&json!([7])), json!(7));
        assert_eq!(coerce_number(&json!([["2.5"]])), json!(2.5));
        assert_eq!(coerce_number(&json!(["n/a"])), json!(["n/a"]));
    }

    #[test]
    fn keeps_values_that_are_not_numbers() {
        assert_eq!(coerce_number(&json!("n/a")), json!("n/a"));
        assert_eq!(coerce_number(&json!("")), json!(""));
        assert_eq!(coerce_number(&json!("-")), json!("-"));
        assert_eq!(coerce_number(&json!(null)), json!(null));
        assert_eq!(coerce_number(&json!(true)), json!(true));
        assert_eq!(coerce_number(&json!(["1", "2"])), json!(["1", "2"]));
        assert_eq!(coerce_number(&json!([])), json!([]));
        assert_eq!(coerce_number(&json!({"v": "1"})), json!({"v": "1"}));
    }
}
