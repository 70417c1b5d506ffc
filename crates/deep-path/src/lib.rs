//! Path-addressed reads, copy-on-write edits and field-level diffs for
//! nested records.
//!
//! Records are [`serde_json::Value`] trees. A location inside a record is a
//! dot-separated path such as `"specialties.0.name"`; numeric steps index
//! arrays, every other step is an object key.
//!
//! # Example
//!
//! ```
//! use deep_path::{diff_paths, get, is_modified, set, ModificationSet};
//! use serde_json::json;
//!
//! let original = json!({
//!     "firstName": "Jane",
//!     "specialties": [{"id": 1, "name": "Cardiology"}]
//! });
//! let current = set(&original, "specialties.0.name", json!("Neurology"));
//!
//! assert_eq!(diff_paths(&original, &current, ""), vec!["specialties.0.name"]);
//!
//! let modified = ModificationSet::between(&original, &current);
//! assert!(is_modified(&modified, "specialties"));
//!
//! let reverted = set(&current, "specialties.0.name", get(&original, "specialties.0.name").unwrap().clone());
//! assert_eq!(reverted, original);
//! ```

pub mod access;
pub mod cli;
pub mod diff;
pub mod path;
pub mod session;

pub use access::{append_to_array, get, get_in, remove, set, try_remove, try_set, AccessError};
pub use diff::{diff_paths, is_modified, ModificationSet};
pub use path::{
    array_index, format_path, is_descendant, is_malformed, join, parent, parse_path, Path,
    PathError, PathStep,
};
pub use session::EditSession;

pub use deep_path_util::json_clone::{clone, clone_from, CloneError};
pub use deep_path_util::json_equal::{deep_equal as equals, deep_equal_opt};
