use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors raised when a value cannot be copied into a record.
#[derive(Debug, Error)]
pub enum CloneError {
    /// The value has no JSON representation (non-string map keys, a
    /// failing `Serialize` impl, ...).
    #[error("value cannot be represented as a record: {0}")]
    Unrepresentable(#[from] serde_json::Error),
}

/// Creates a deep clone of a record.
///
/// Every object and array is rebuilt, so no container is shared between
/// the input and the output.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use deep_path_util::json_clone::clone;
///
/// let original = json!({"address": [{"city": "Boston"}]});
/// let cloned = clone(&original);
///
/// assert_eq!(original, cloned);
/// ```
pub fn clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => Value::Array(arr.iter().map(clone).collect()),
        Value::Object(obj) => {
            let mut new_obj = Map::with_capacity(obj.len());
            for (key, val) in obj {
                new_obj.insert(key.clone(), clone(val));
            }
            Value::Object(new_obj)
        }
    }
}

/// Copies any serializable value into a fresh record.
///
/// Fails instead of producing a partial copy when some part of `value`
/// has no JSON representation.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeMap;
/// use deep_path_util::json_clone::clone_from;
///
/// let mut ok = BTreeMap::new();
/// ok.insert("npi", 1234567890u64);
/// assert!(clone_from(&ok).is_ok());
///
/// let mut bad = BTreeMap::new();
/// bad.insert((1u8, 2u8), "tuple keys have no JSON form");
/// assert!(clone_from(&bad).is_err());
/// ```
pub fn clone_from<T>(value: &T) -> Result<Value, CloneError>
where
    T: Serialize + ?Sized,
{
    Ok(serde_json::to_value(value)?)
}
