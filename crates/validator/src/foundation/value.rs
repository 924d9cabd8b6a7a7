//! Record and value helpers shared by the rule catalog.

pub use serde_json::Value;

/// A flat key-value record, in the caller's key order.
pub type Record = serde_json::Map<String, Value>;

/// Returns `true` for an absent key or an explicit `null`.
///
/// Every built-in rule except `required` accepts such values.
#[inline]
pub fn is_missing(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Length of text (in chars) or of a sequence; `None` for anything else.
#[inline]
pub fn length_of(value: &Value) -> Option<usize> {
    match value {
        Value::String(s) => Some(s.chars().count()),
        Value::Array(items) => Some(items.len()),
        _ => None,
    }
}

/// Returns the value as an `f64` when it is a JSON number.
#[inline]
pub(crate) fn number_of(value: &Value) -> Option<f64> {
    value.as_f64()
}

/// Returns `true` when the value is a number with no fractional part.
pub(crate) fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => true,
        Value::Number(n) => n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0),
        _ => false,
    }
}
