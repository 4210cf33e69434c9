//! Typed coercions for loosely-typed task fields.
//!
//! Task records come from user input and from the scoring backend, so any
//! field may be missing, `null`, or hold a value of the wrong JSON type.
//! These helpers give each of those cases a defined answer.

use serde_json::{Number, Value};
use std::borrow::Cow;

/// Numeric view of a field.
///
/// JSON numbers map to their value. Strings count when their trimmed text
/// parses as a finite float (`"8"`, `" 2.5 "`). Everything else, including
/// `null`, booleans and non-numeric text, is `None`.
pub fn number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Numeric view of a field, falling back to `default`.
pub fn number_or(value: Option<&Value>, default: f64) -> f64 {
    number(value).unwrap_or(default)
}

/// Textual view of a field.
///
/// Non-empty strings are returned as-is and non-zero numbers in their
/// shortest display form. Empty strings, zero and every other JSON type
/// are `None`.
pub fn text(value: Option<&Value>) -> Option<Cow<'_, str>> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(Cow::Owned(format_number(n))),
        _ => None,
    }
}

/// Textual view of a field, falling back to `default`.
pub fn text_or<'a>(value: Option<&'a Value>, default: &'a str) -> Cow<'a, str> {
    text(value).unwrap_or(Cow::Borrowed(default))
}

/// Render a JSON number the way a person would type it: `3`, `1.5`, `-2`.
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        // f64 Display drops a trailing ".0"
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}
