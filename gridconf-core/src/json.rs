//! Probing helpers for JSON configuration objects sent by the web client.

use serde_json::Value;

/// Returns true when any of the named keys is present and truthy on the
/// given JSON object.
///
/// Non-object values never match. Truthiness follows the web client's
/// rules: `null`, `false`, `0` and `""` are falsy, everything else
/// (including empty arrays and objects) is truthy.
pub fn has_any_property(object: &Value, keys: &[&str]) -> bool {
    let Some(map) = object.as_object() else {
        return false;
    };

    keys.iter().any(|key| map.get(*key).is_some_and(is_truthy))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
