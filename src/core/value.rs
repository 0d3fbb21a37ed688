//! Helpers over bound field values.

use serde_json::Value;

/// Form-style truthiness of a value.
///
/// `null`, `false`, zero and the empty string are falsy. Every other value,
/// including empty arrays and objects, is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Length of a string value in characters, `None` for non-strings.
pub fn char_len(value: &Value) -> Option<usize> {
    value.as_str().map(|s| s.chars().count())
}

/// Trim surrounding whitespace from a string value; other values pass through.
pub fn trim(value: Value) -> Value {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.len() == s.len() {
                Value::String(s)
            } else {
                Value::String(trimmed.to_string())
            }
        }
        other => other,
    }
}
