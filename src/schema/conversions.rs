//! Lenient conversions from loosely-typed record values.
//!
//! Form snapshots store numbers as JSON numbers or as strings typed into
//! inputs, and toggles as booleans, numbers or strings. These helpers read
//! them without ever failing: anything unusable is simply absent.

use serde_json::Value;

/// Read a finite number from a JSON number or a numeric string
#[must_use]
pub fn as_finite_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
        }
        _ => None,
    }
}

/// Numeric value of an optional field, 0 when absent or non-numeric
#[must_use]
pub fn number_or_zero(value: Option<&Value>) -> f64 {
    value.and_then(as_finite_number).unwrap_or(0.0)
}

/// Convert a raw amount into a headcount
///
/// Negative, non-finite and absent values count as nobody; fractions are
/// rounded to the nearest whole person.
#[must_use]
pub fn headcount(amount: f64) -> u64 {
    if amount.is_finite() && amount > 0.0 {
        amount.round() as u64
    } else {
        0
    }
}

/// Headcount stored in an optional field
#[must_use]
pub fn headcount_of(value: Option<&Value>) -> u64 {
    headcount(number_or_zero(value))
}

/// Truthiness of a toggle field
#[must_use]
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// A string field, if present and non-empty
#[must_use]
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// First non-empty string among several alternative field names
#[must_use]
pub fn first_non_empty_str<'a>(object: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| non_empty_str(object.get(*key)))
}

/// Items of a list field; anything other than an array reads as empty
#[must_use]
pub fn array_items(value: Option<&Value>) -> &[Value] {
    match value {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}
