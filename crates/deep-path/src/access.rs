//! Path-addressed reads and copy-on-write edits of records.
//!
//! None of these functions mutate their input. Writers deep-copy the
//! record, edit the copy and hand it back, so earlier snapshots held by the
//! caller stay valid.
//!
//! [`set`] and [`remove`] are permissive: when the path runs into a scalar
//! where a container is needed, indexes past the end of an array, or is
//! malformed, they return the record unchanged. [`try_set`] and [`try_remove`] perform the same edits
//! but report why an edit was not applied.

use deep_path_util::json_clone::clone;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::path::{array_index, format_path, is_malformed, parse_path};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("malformed path `{0}`")]
    Malformed(String),
    #[error("value at `{path}` is not a container that accepts step `{step}`")]
    TypeMismatch { path: String, step: String },
    #[error("nothing at `{0}`")]
    NotFound(String),
    #[error("index `{step}` is past the end of the array at `{path}` (length {len})")]
    OutOfRange {
        path: String,
        step: String,
        len: usize,
    },
}

fn mismatch(steps: &[String], depth: usize) -> AccessError {
    AccessError::TypeMismatch {
        path: format_path(&steps[..depth]),
        step: steps[depth].clone(),
    }
}

fn not_found(steps: &[String], depth: usize) -> AccessError {
    AccessError::NotFound(format_path(&steps[..=depth]))
}

/// Get the value at `path`.
///
/// Returns `None` when the path leads nowhere: a missing key, an index out
/// of range, a step into a scalar or `null`, or a malformed path.
///
/// # Example
///
/// ```
/// use deep_path::get;
/// use serde_json::json;
///
/// let doc = json!({"specialties": [{"id": 1, "name": "Cardiology"}]});
/// assert_eq!(get(&doc, "specialties.0.name"), Some(&json!("Cardiology")));
/// assert_eq!(get(&doc, "specialties.1.name"), None);
/// assert_eq!(get(&doc, ""), Some(&doc));
/// ```
pub fn get<'a>(record: &'a Value, path: &str) -> Option<&'a Value> {
    get_in(record, &parse_path(path))
}

/// [`get`] over already parsed steps.
pub fn get_in<'a>(record: &'a Value, steps: &[String]) -> Option<&'a Value> {
    if is_malformed(steps) {
        return None;
    }
    let mut current = record;
    for step in steps {
        current = match current {
            Value::Array(arr) => arr.get(array_index(step)?)?,
            Value::Object(map) => map.get(step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Return a copy of `record` with `value` stored at `path`.
///
/// Missing (or `null`) intermediate containers are created: an array when
/// the following step is numeric, an object otherwise. An index equal to an
/// array's length appends; an index beyond it is rejected. If the edit
/// cannot be applied the record comes back unchanged.
///
/// # Example
///
/// ```
/// use deep_path::set;
/// use serde_json::json;
///
/// let doc = set(&json!({}), "address.0.city", json!("Boston"));
/// assert_eq!(doc, json!({"address": [{"city": "Boston"}]}));
/// ```
pub fn set(record: &Value, path: &str, value: Value) -> Value {
    match try_set(record, path, value) {
        Ok(updated) => updated,
        Err(err) => {
            debug!(path, error = %err, "write not applied");
            clone(record)
        }
    }
}

/// [`set`] that reports why a write could not be applied.
pub fn try_set(record: &Value, path: &str, value: Value) -> Result<Value, AccessError> {
    let steps = parse_path(path);
    if steps.is_empty() {
        return Ok(value);
    }
    if is_malformed(&steps) {
        return Err(AccessError::Malformed(path.to_string()));
    }
    let mut updated = clone(record);
    set_in(&mut updated, &steps, 0, value)?;
    Ok(updated)
}

fn set_in(
    target: &mut Value,
    steps: &[String],
    depth: usize,
    value: Value,
) -> Result<(), AccessError> {
    let step = &steps[depth];
    let is_last = depth + 1 == steps.len();
    let slot = match target {
        Value::Object(map) => {
            if is_last {
                map.insert(step.clone(), value);
                return Ok(());
            }
            map.entry(step.clone()).or_insert(Value::Null)
        }
        Value::Array(arr) => {
            let idx = array_index(step).ok_or_else(|| mismatch(steps, depth))?;
            if idx > arr.len() {
                return Err(AccessError::OutOfRange {
                    path: format_path(&steps[..depth]),
                    step: step.clone(),
                    len: arr.len(),
                });
            }
            if idx == arr.len() {
                arr.push(Value::Null);
            }
            if is_last {
                arr[idx] = value;
                return Ok(());
            }
            &mut arr[idx]
        }
        _ => return Err(mismatch(steps, depth)),
    };
    if slot.is_null() {
        *slot = empty_container_for(&steps[depth + 1]);
    }
    set_in(slot, steps, depth + 1, value)
}

fn empty_container_for(next_step: &str) -> Value {
    if array_index(next_step).is_some() {
        Value::Array(Vec::new())
    } else {
        Value::Object(Map::new())
    }
}

/// Return a copy of `record` without the value at `path`.
///
/// Object keys are deleted; array elements are spliced out, shifting later
/// elements down by one. The empty path and paths that lead nowhere leave
/// the record unchanged.
///
/// # Example
///
/// ```
/// use deep_path::remove;
/// use serde_json::json;
///
/// let doc = remove(&json!({"items": ["a", "b", "c"]}), "items.1");
/// assert_eq!(doc, json!({"items": ["a", "c"]}));
/// ```
pub fn remove(record: &Value, path: &str) -> Value {
    match try_remove(record, path) {
        Ok(updated) => updated,
        Err(err) => {
            debug!(path, error = %err, "remove not applied");
            clone(record)
        }
    }
}

/// [`remove`] that reports why nothing was removed.
///
/// The empty path is not an error; it yields an unchanged copy.
pub fn try_remove(record: &Value, path: &str) -> Result<Value, AccessError> {
    let steps = parse_path(path);
    let Some((last, init)) = steps.split_last() else {
        return Ok(clone(record));
    };
    if is_malformed(&steps) {
        return Err(AccessError::Malformed(path.to_string()));
    }
    let mut updated = clone(record);
    let depth = init.len();
    match walk_mut(&mut updated, &steps, depth)? {
        Value::Object(map) => {
            map.shift_remove(last.as_str())
                .ok_or_else(|| not_found(&steps, depth))?;
        }
        Value::Array(arr) => {
            let idx = array_index(last).ok_or_else(|| mismatch(&steps, depth))?;
            if idx >= arr.len() {
                return Err(not_found(&steps, depth));
            }
            arr.remove(idx);
        }
        _ => return Err(mismatch(&steps, depth)),
    }
    Ok(updated)
}

/// Walk the first `depth` steps without creating anything.
fn walk_mut<'a>(
    record: &'a mut Value,
    steps: &[String],
    depth: usize,
) -> Result<&'a mut Value, AccessError> {
    let mut current = record;
    for (i, step) in steps[..depth].iter().enumerate() {
        current = match current {
            Value::Object(map) => map.get_mut(step).ok_or_else(|| not_found(steps, i))?,
            Value::Array(arr) => {
                let idx = array_index(step).ok_or_else(|| mismatch(steps, i))?;
                arr.get_mut(idx).ok_or_else(|| not_found(steps, i))?
            }
            _ => return Err(mismatch(steps, i)),
        };
    }
    Ok(current)
}

/// Return a copy of `record` with `value` appended to the array at `path`.
///
/// A missing or non-array value at `path` is treated as an empty array.
///
/// # Example
///
/// ```
/// use deep_path::append_to_array;
/// use serde_json::json;
///
/// let doc = append_to_array(&json!({"tags": ["a"]}), "tags", json!("b"));
/// assert_eq!(doc, json!({"tags": ["a", "b"]}));
///
/// let doc = append_to_array(&json!({}), "tags", json!("a"));
/// assert_eq!(doc, json!({"tags": ["a"]}));
/// ```
pub fn append_to_array(record: &Value, path: &str, value: Value) -> Value {
    let mut items = match get(record, path) {
        Some(Value::Array(arr)) => arr.iter().map(clone).collect(),
        _ => Vec::new(),
    };
    items.push(value);
    set(record, path, Value::Array(items))
}
