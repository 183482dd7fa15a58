//! Best-effort verification of loosely-typed webhook records.

use serde_json::{Map, Value};

use crate::signing::{verify, ParameterSet, SIGNATURE_KEY};

/// Render a JSON value the generic way.
///
/// Strings pass through, booleans print as `true`/`false`, `null` becomes the
/// empty string (and so drops out of the signature), arrays and objects print
/// as compact JSON. Numbers are treated as doubles and printed with the
/// shortest round-trip digits in `%g` style: plain decimal while the decimal
/// exponent is in `-4..6`, scientific otherwise (`100` and `15.625`, but
/// `1.234567e+06` and `1e-05`). None of the fixed-decimal field rules apply.
pub fn stringify_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => format_general(f),
            None => n.to_string(),
        },
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

fn format_general(f: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. "-1.234567e6".
    let scientific = format!("{:e}", f);
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return scientific;
    };
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if !(-4..6).contains(&exp) {
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() {
            String::new()
        } else {
            format!(".{rest}")
        };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{first}{fraction}e{exp_sign}{:02}", exp.abs());
    }

    // digits before the decimal point
    let point = exp + 1;
    let body = if point <= 0 {
        format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
    } else if point as usize >= digits.len() {
        format!("{}{}", digits, "0".repeat(point as usize - digits.len()))
    } else {
        let (int, frac) = digits.split_at(point as usize);
        format!("{int}.{frac}")
    };
    format!("{sign}{body}")
}

/// Verify an arbitrary decoded JSON record against `secret`.
///
/// Fails closed when the `signature` field is missing or not a string. Every
/// other field is stringified with [`stringify_value`]. Prefer the typed path
/// when the payload shape is known: `100.00` arrives here as `100`, not as the
/// two-decimal form the gateway signs for `amount`.
pub fn verify_untyped_record(record: &Map<String, Value>, secret: &str) -> bool {
    let Some(signature) = record.get(SIGNATURE_KEY).and_then(Value::as_str) else {
        return false;
    };

    let params: ParameterSet = record
        .iter()
        .filter(|(key, _)| key.as_str() != SIGNATURE_KEY)
        .map(|(key, value)| (key.clone(), stringify_value(value)))
        .collect();

    verify(signature, &params, secret)
}
