//! deep-path-util - structural clone and equality for JSON records.

pub mod json_clone;
pub mod json_equal;

pub use json_clone::{clone, clone_from, CloneError};
pub use json_equal::{deep_equal, deep_equal_opt};
