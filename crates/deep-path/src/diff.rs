//! Field-level differences between two record snapshots.

use std::collections::btree_set;
use std::collections::BTreeSet;

use deep_path_util::json_equal::deep_equal_opt;
use serde_json::Value;

use crate::path::{is_descendant, join};

/// List every path at which `original` and `current` differ.
///
/// Paths are relative to the records and prefixed with `prefix`. Scalars
/// and kind mismatches report their own path only. Arrays of different
/// length report the array path plus each index past the shorter end;
/// overlapping indices are compared recursively. Objects are compared key
/// by key over the union of both key sets.
///
/// # Example
///
/// ```
/// use deep_path::diff_paths;
/// use serde_json::json;
///
/// let original = json!({"items": [1, 2, 3], "name": "a"});
/// let current = json!({"items": [1, 2], "name": "b"});
/// assert_eq!(diff_paths(&original, &current, ""), vec!["items", "items.2", "name"]);
/// ```
pub fn diff_paths(original: &Value, current: &Value, prefix: &str) -> Vec<String> {
    let mut out = Vec::new();
    diff_at_path(&mut out, prefix, Some(original), Some(current));
    out
}

fn diff_at_path(out: &mut Vec<String>, path: &str, src: Option<&Value>, dst: Option<&Value>) {
    if deep_equal_opt(src, dst) {
        return;
    }
    match (src, dst) {
        (Some(Value::Array(s)), Some(Value::Array(d))) => diff_arr(out, path, s, d),
        (Some(Value::Object(s)), Some(Value::Object(d))) => {
            for key in s.keys() {
                diff_at_path(out, &join(path, key), s.get(key), d.get(key));
            }
            for key in d.keys().filter(|key| !s.contains_key(*key)) {
                out.push(join(path, key));
            }
        }
        _ => out.push(path.to_string()),
    }
}

fn diff_arr(out: &mut Vec<String>, path: &str, src: &[Value], dst: &[Value]) {
    if src.len() != dst.len() {
        out.push(path.to_string());
    }
    for i in 0..src.len().max(dst.len()) {
        let item = join(path, &i.to_string());
        match (src.get(i), dst.get(i)) {
            (Some(s), Some(d)) => diff_at_path(out, &item, Some(s), Some(d)),
            _ => out.push(item),
        }
    }
}

/// The set of paths where two snapshots of a record differ.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModificationSet {
    paths: BTreeSet<String>,
}

impl ModificationSet {
    /// Compute the set of modified paths between two snapshots.
    pub fn between(original: &Value, current: &Value) -> Self {
        diff_paths(original, current, "").into_iter().collect()
    }

    /// True when exactly `path` was modified.
    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// True when `path` or anything below it was modified.
    pub fn is_modified(&self, path: &str) -> bool {
        is_modified(self, path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> btree_set::Iter<'_, String> {
        self.paths.iter()
    }
}

impl FromIterator<String> for ModificationSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        ModificationSet {
            paths: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ModificationSet {
    type Item = String;
    type IntoIter = btree_set::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

impl<'a> IntoIterator for &'a ModificationSet {
    type Item = &'a String;
    type IntoIter = btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

/// Check whether `path` itself, or any path below it, is in `set`.
///
/// This lets a section be flagged as changed when only a nested field
/// changed. The root path is modified whenever the set is non-empty.
///
/// # Example
///
/// ```
/// use deep_path::{is_modified, ModificationSet};
///
/// let set: ModificationSet = ["address.0.city".to_string()].into_iter().collect();
/// assert!(is_modified(&set, "address"));
/// assert!(is_modified(&set, "address.0.city"));
/// assert!(!is_modified(&set, "address.0.zip"));
/// ```
pub fn is_modified(set: &ModificationSet, path: &str) -> bool {
    set.contains(path) || set.iter().any(|entry| is_descendant(path, entry))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sorted(mut paths: Vec<String>) -> Vec<String> {
        paths.sort();
        paths
    }

    #[test]
    fn diff_equal_docs() {
        let doc = json!({"a": [1, {"b": null}], "c": "d"});
        assert!(diff_paths(&doc, &doc.clone(), "").is_empty());
    }

    #[test]
    fn diff_root_scalars() {
        assert_eq!(diff_paths(&json!(1), &json!(2), ""), vec![""]);
        assert_eq!(diff_paths(&json!(1), &json!(2), "root"), vec!["root"]);
    }

    #[test]
    fn diff_nested_field() {
        let src = json!({"firstName": "Jane", "specialties": [{"id": 1, "name": "Cardiology"}]});
        let dst = json!({"firstName": "Jane", "specialties": [{"id": 1, "name": "Neurology"}]});
        assert_eq!(diff_paths(&src, &dst, ""), vec!["specialties.0.name"]);
    }

    #[test]
    fn diff_array_shrink() {
        let src = json!({"items": [1, 2, 3]});
        let dst = json!({"items": [1, 2]});
        assert_eq!(diff_paths(&src, &dst, ""), vec!["items", "items.2"]);
    }

    #[test]
    fn diff_array_grow_and_change() {
        let src = json!({"items": [1, 2]});
        let dst = json!({"items": [9, 2, 3, 4]});
        assert_eq!(
            diff_paths(&src, &dst, ""),
            vec!["items", "items.0", "items.2", "items.3"]
        );
    }

    #[test]
    fn diff_key_added_and_removed() {
        let src = json!({"a": 1, "b": 2});
        let dst = json!({"a": 1, "c": {"deep": true}});
        assert_eq!(sorted(diff_paths(&src, &dst, "")), vec!["b", "c"]);
    }

    #[test]
    fn diff_kind_mismatch_reports_path_only() {
        let src = json!({"address": {"city": "Boston"}});
        let dst = json!({"address": [{"city": "Boston"}]});
        assert_eq!(diff_paths(&src, &dst, ""), vec!["address"]);

        let src = json!({"license": null});
        let dst = json!({"license": {"number": "MA-1"}});
        assert_eq!(diff_paths(&src, &dst, ""), vec!["license"]);
    }

    #[test]
    fn diff_null_versus_missing() {
        let src = json!({"license": null});
        let dst = json!({});
        assert_eq!(diff_paths(&src, &dst, ""), vec!["license"]);
    }

    #[test]
    fn diff_with_prefix() {
        let src = json!({"city": "Boston"});
        let dst = json!({"city": "Cambridge"});
        assert_eq!(diff_paths(&src, &dst, "address.0"), vec!["address.0.city"]);
    }

    #[test]
    fn diff_int_and_float_equal() {
        assert!(diff_paths(&json!({"n": 1}), &json!({"n": 1.0}), "").is_empty());
    }

    #[test]
    fn modification_set_between() {
        let src = json!({"a": {"b": 1, "c": 2}, "d": [1]});
        let dst = json!({"a": {"b": 5, "c": 2}, "d": [1, 2]});
        let set = ModificationSet::between(&src, &dst);
        assert_eq!(set.len(), 3);
        assert!(set.contains("a.b"));
        assert!(set.contains("d"));
        assert!(set.contains("d.1"));
        assert!(!set.contains("a"));
        assert!(set.is_modified("a"));
        assert!(!set.is_modified("a.c"));
    }

    #[test]
    fn is_modified_descendants() {
        let set: ModificationSet = vec!["address.0.city".to_string()].into_iter().collect();
        assert!(is_modified(&set, "address"));
        assert!(is_modified(&set, "address.0"));
        assert!(is_modified(&set, ""));
        assert!(!is_modified(&set, "addr"));
        assert!(!is_modified(&set, "address.0.city.x"));
    }

    #[test]
    fn is_modified_empty_set() {
        let set = ModificationSet::default();
        assert!(set.is_empty());
        assert!(!is_modified(&set, ""));
        assert!(!is_modified(&set, "anything"));
    }

    #[test]
    fn modification_set_iterates_sorted() {
        let set: ModificationSet = ["b", "a.1", "a"].iter().map(|s| s.to_string()).collect();
        let paths: Vec<String> = set.into_iter().collect();
        assert_eq!(paths, vec!["a", "a.1", "b"]);
    }
}
