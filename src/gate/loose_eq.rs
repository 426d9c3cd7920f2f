//! Coercive ("loose") equality between a submitted JSON value and the
//! credential string.
//!
//! The service this server reproduces compared the submitted password with
//! a type-coercing `==`, so a numeric `123456` matched the string `"123456"`.
//! Strict equality would reject that request; these rules keep it passing.
//!
//! | submitted value | compared as                                  |
//! |-----------------|----------------------------------------------|
//! | string          | text, exactly                                |
//! | number          | number, credential converted to a number     |
//! | boolean         | number (`true` = 1, `false` = 0)             |
//! | null            | never equal                                  |
//! | array           | text, elements joined with `,`               |
//! | object          | text, always `[object Object]`               |

use serde_json::Value;

/// Returns true when `value` is loosely equal to `credential`.
pub fn loosely_equals(value: &Value, credential: &str) -> bool {
    match value {
        Value::String(text) => text == credential,
        // NaN compares unequal to everything, itself included
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|number| number == to_number(credential)),
        Value::Bool(flag) => {
            let number = if *flag { 1.0 } else { 0.0 };
            number == to_number(credential)
        }
        Value::Null => false,
        Value::Array(_) | Value::Object(_) => to_text(value) == credential,
    }
}

/// Numeric value of a string, NaN when it is not a number.
fn to_number(text: &str) -> f64 {
    let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    if let Some(number) = parse_prefixed_integer(trimmed) {
        return number;
    }

    match trimmed {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust's float parser also takes "inf" and "nan"; restrict to plain decimals
        _ if trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) =>
        {
            trimmed.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

/// `0x`, `0o` and `0b` integer literals. Signs are not allowed.
fn parse_prefixed_integer(text: &str) -> Option<f64> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &text[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let number = digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN);
    Some(number)
}

/// Text form of a value, as produced when an array or object is compared to a string.
fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.as_f64().map(number_to_text).unwrap_or_default(),
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_to_text(number: f64) -> String {
    if number == 0.0 {
        // covers -0 too
        return "0".to_string();
    }

    let magnitude = number.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // exponent form, with an explicit `+` on positive exponents
        let rendered = format!("{number:e}");
        match rendered.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => rendered,
        }
    } else {
        format!("{number}")
    }
}
