//! Edit sessions over a record.
//!
//! An [`EditSession`] keeps the snapshot an edit started from next to the
//! record being edited. Every edit replaces the current record with a new
//! value, and the set of changed fields is derived from the pair on demand.

use deep_path_util::json_clone::{clone, clone_from, CloneError};
use serde::Serialize;
use serde_json::Value;
use tracing::trace;

use crate::access::{append_to_array, get, remove, set};
use crate::diff::ModificationSet;

#[derive(Debug, Clone, PartialEq)]
pub struct EditSession {
    original: Value,
    current: Value,
}

impl EditSession {
    pub fn new(original: Value) -> Self {
        let current = clone(&original);
        EditSession { original, current }
    }

    /// Start a session from any serializable record.
    pub fn from_serializable<T>(record: &T) -> Result<Self, CloneError>
    where
        T: Serialize + ?Sized,
    {
        Ok(Self::new(clone_from(record)?))
    }

    /// The snapshot the session started from (or was last committed at).
    pub fn original(&self) -> &Value {
        &self.original
    }

    pub fn current(&self) -> &Value {
        &self.current
    }

    /// Read a field of the current record.
    pub fn get(&self, path: &str) -> Option<&Value> {
        get(&self.current, path)
    }

    pub fn set_field(&mut self, path: &str, value: Value) {
        trace!(path, "set field");
        self.current = set(&self.current, path, value);
    }

    pub fn remove_field(&mut self, path: &str) {
        trace!(path, "remove field");
        self.current = remove(&self.current, path);
    }

    pub fn append_to_field(&mut self, path: &str, value: Value) {
        trace!(path, "append to field");
        self.current = append_to_array(&self.current, path, value);
    }

    /// Restore a single field to its original value.
    ///
    /// Fields that did not exist originally are removed again.
    pub fn revert_field(&mut self, path: &str) {
        trace!(path, "revert field");
        self.current = match get(&self.original, path) {
            Some(value) => set(&self.current, path, clone(value)),
            None => remove(&self.current, path),
        };
    }

    /// Drop every edit.
    pub fn reset(&mut self) {
        self.current = clone(&self.original);
    }

    /// Accept the edits: the current record becomes the new original.
    pub fn commit(&mut self) -> Value {
        self.original = clone(&self.current);
        clone(&self.current)
    }

    pub fn modified_paths(&self) -> ModificationSet {
        ModificationSet::between(&self.original, &self.current)
    }

    /// True when `path` or any field below it differs from the original.
    pub fn is_modified(&self, path: &str) -> bool {
        self.modified_paths().is_modified(path)
    }

    pub fn has_changes(&self) -> bool {
        !self.modified_paths().is_empty()
    }
}
