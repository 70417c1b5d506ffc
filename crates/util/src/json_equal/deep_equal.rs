use serde_json::{Number, Value};

/// Performs a structural equality check between two records.
///
/// - the same reference is equal without looking further
/// - `null` equals only `null`
/// - values of different kinds are never equal
/// - arrays need the same length and pairwise equal items
/// - objects need the same key set, in any order, and pairwise equal values
/// - numbers compare by numeric value, so `1` equals `1.0`
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use deep_path_util::json_equal::deep_equal;
///
/// let a = json!({"specialties": [{"id": 1}]});
/// let b = json!({"specialties": [{"id": 1}]});
/// let c = json!({"specialties": [{"id": 2}]});
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,

        (Value::Array(arr_a), Value::Array(arr_b)) => {
            arr_a.len() == arr_b.len()
                && arr_a.iter().zip(arr_b).all(|(a, b)| deep_equal(a, b))
        }

        (Value::Object(obj_a), Value::Object(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            obj_a.iter().all(|(key, val_a)| match obj_b.get(key) {
                Some(val_b) => deep_equal(val_a, val_b),
                None => false,
            })
        }

        _ => false,
    }
}

/// [`deep_equal`] over possibly absent values.
///
/// Two absent values are equal; an absent value never equals a present
/// one, `null` included.
pub fn deep_equal_opt(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => deep_equal(a, b),
        _ => false,
    }
}

fn number_equal(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
