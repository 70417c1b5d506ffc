//! Dot-separated record paths.
//!
//! A path string such as `"specialties.0.name"` is split on `.` into
//! steps. There is no escaping, so keys containing `.` cannot be
//! addressed. The empty string is the root path.

use thiserror::Error;

/// A step in a record path: an object key or an array index numeral.
pub type PathStep = String;

/// A parsed record path.
pub type Path = Vec<PathStep>;

const SEPARATOR: char = '.';

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("root path has no parent")]
    NoParent,
}

/// Parse a path string into steps.
///
/// Empty steps are kept, so malformed input stays detectable with
/// [`is_malformed`].
///
/// # Example
///
/// ```
/// use deep_path::parse_path;
///
/// assert_eq!(parse_path(""), Vec::<String>::new());
/// assert_eq!(parse_path("address.0.city"), vec!["address", "0", "city"]);
/// assert_eq!(parse_path("a..b"), vec!["a", "", "b"]);
/// ```
pub fn parse_path(path: &str) -> Path {
    if path.is_empty() {
        return Vec::new();
    }
    path.split(SEPARATOR).map(str::to_string).collect()
}

/// Format steps back into a path string.
pub fn format_path(steps: &[String]) -> String {
    steps.join(".")
}

/// True when any step is empty (consecutive, leading or trailing dots).
pub fn is_malformed(steps: &[String]) -> bool {
    steps.iter().any(String::is_empty)
}

/// Interpret a step as an array index.
///
/// Only ASCII digits qualify; signs, whitespace and decimal points do not.
pub fn array_index(step: &str) -> Option<usize> {
    if step.is_empty() || !step.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    step.parse().ok()
}

/// Append a step to a path string.
pub fn join(prefix: &str, step: &str) -> String {
    if prefix.is_empty() {
        return step.to_string();
    }
    let mut out = String::with_capacity(prefix.len() + step.len() + 1);
    out.push_str(prefix);
    out.push(SEPARATOR);
    out.push_str(step);
    out
}

/// Check whether `path` lies strictly below `ancestor`.
///
/// # Example
///
/// ```
/// use deep_path::is_descendant;
///
/// assert!(is_descendant("address", "address.0.city"));
/// assert!(!is_descendant("address", "address"));
/// assert!(!is_descendant("address", "addressLine"));
/// assert!(is_descendant("", "address"));
/// ```
pub fn is_descendant(ancestor: &str, path: &str) -> bool {
    if ancestor.is_empty() {
        return !path.is_empty();
    }
    path.len() > ancestor.len() + 1
        && path.starts_with(ancestor)
        && path[ancestor.len()..].starts_with(SEPARATOR)
}

/// Get the parent of a parsed path.
pub fn parent(steps: &[String]) -> Result<Path, PathError> {
    match steps.split_last() {
        Some((_, init)) => Ok(init.to_vec()),
        None => Err(PathError::NoParent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_path() {
        assert_eq!(parse_path(""), Vec::<String>::new());
        assert_eq!(parse_path("firstName"), vec!["firstName"]);
        assert_eq!(parse_path("specialties.0.name"), vec!["specialties", "0", "name"]);
    }

    #[test]
    fn test_parse_keeps_empty_steps() {
        assert_eq!(parse_path(".a"), vec!["", "a"]);
        assert_eq!(parse_path("a."), vec!["a", ""]);
        assert_eq!(parse_path("."), vec!["", ""]);
    }

    #[test]
    fn test_format_roundtrip() {
        for path in ["", "a", "a.b", "items.10.tags.0"] {
            assert_eq!(format_path(&parse_path(path)), path);
        }
    }

    #[test]
    fn test_is_malformed() {
        assert!(!is_malformed(&parse_path("")));
        assert!(!is_malformed(&parse_path("a.0.b")));
        assert!(is_malformed(&parse_path("a..b")));
        assert!(is_malformed(&parse_path(".a")));
        assert!(is_malformed(&parse_path("a.")));
    }

    #[test]
    fn test_array_index() {
        assert_eq!(array_index("0"), Some(0));
        assert_eq!(array_index("12"), Some(12));
        assert_eq!(array_index("007"), Some(7));
        assert_eq!(array_index("-1"), None);
        assert_eq!(array_index("+1"), None);
        assert_eq!(array_index("1.5"), None);
        assert_eq!(array_index("name"), None);
        assert_eq!(array_index(""), None);
    }

    #[test]
    fn test_join() {
        assert_eq!(join("", "a"), "a");
        assert_eq!(join("a", "0"), "a.0");
        assert_eq!(join("a.0", "city"), "a.0.city");
    }

    #[test]
    fn test_is_descendant() {
        assert!(is_descendant("specialties", "specialties.0"));
        assert!(is_descendant("specialties", "specialties.0.name"));
        assert!(!is_descendant("specialties", "specialties"));
        assert!(!is_descendant("specialties", "specialtiesOther.0"));
        assert!(!is_descendant("specialties.0", "specialties"));
        assert!(!is_descendant("", ""));
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent(&parse_path("a.b")).unwrap(), vec!["a"]);
        assert_eq!(parent(&parse_path("a")).unwrap(), Vec::<String>::new());
        assert_eq!(parent(&[]), Err(PathError::NoParent));
    }
}
