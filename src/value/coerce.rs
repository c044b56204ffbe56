//! Typed coercions applied to an already-unwrapped schema value.
//!
//! Every function here returns `None` when the value cannot be coerced; the
//! resolver turns `None` into the caller's fallback.

use serde_json::Value;

const TRUTHY: [&str; 4] = ["true", "1", "yes", "y"];
const FALSY: [&str; 4] = ["false", "0", "no", "n"];

/// Coerce to a boolean.
///
/// Numbers map to `n != 0`. Strings are trimmed, lower-cased and matched
/// against the fixed truthy/falsy word sets.
pub fn to_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|n| n != 0.0),
        Value::String(s) => {
            let word = s.trim().to_ascii_lowercase();
            if TRUTHY.contains(&word.as_str()) {
                Some(true)
            } else if FALSY.contains(&word.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Coerce to a number. Strings use leading-prefix float parsing (`"12px"` is 12).
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| !n.is_nan()),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }
}

/// Coerce to a non-empty string.
pub fn to_string(value: &Value) -> Option<String> {
    let s = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format_number(f),
            _ => n.to_string(),
        },
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    if s.is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Parse the longest numeric prefix of `input`, ignoring leading whitespace.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Returns `None` when no digits lead the string.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Format a float the way a JSON author would write it: integral values
/// without a fractional part.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}
