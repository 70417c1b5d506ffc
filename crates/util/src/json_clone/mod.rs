//! Record cloning utilities.
//!
//! Deep copies of records, plus a fallible copy from any serializable
//! value.

mod clone;

pub use clone::{clone, clone_from, CloneError};
