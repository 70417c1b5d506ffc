//! Core logic of the `deep-path` command-line tool.
//!
//! Documents come in as JSON text and results go out as JSON text; the
//! binary only deals with argument handling and I/O.
//!
//! - `deep-path get <path>`                     print the value at a path
//! - `deep-path set <path> <json>`              print the updated document
//! - `deep-path remove <path>`                  print the updated document
//! - `deep-path append <path> <json>`           print the updated document
//! - `deep-path diff <original> <current>`      print the modified paths

use serde_json::Value;
use thiserror::Error;

use crate::access::{append_to_array, get, remove, set};
use crate::diff::ModificationSet;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing argument: {0}")]
    MissingArgument(&'static str),
    #[error("no value at path `{0}`")]
    NoValue(String),
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get { path: String },
    Set { path: String, value: String },
    Remove { path: String },
    Append { path: String, value: String },
    Diff { original: String, current: String },
}

impl Command {
    /// Parse arguments following the program name.
    pub fn parse(args: &[String]) -> Result<Command, CliError> {
        let mut args = args.iter().cloned();
        let name = args.next().ok_or(CliError::MissingArgument("command"))?;
        let mut next = |what: &'static str| args.next().ok_or(CliError::MissingArgument(what));
        match name.as_str() {
            "get" => Ok(Command::Get { path: next("path")? }),
            "set" => Ok(Command::Set {
                path: next("path")?,
                value: next("value")?,
            }),
            "remove" => Ok(Command::Remove { path: next("path")? }),
            "append" => Ok(Command::Append {
                path: next("path")?,
                value: next("value")?,
            }),
            "diff" => Ok(Command::Diff {
                original: next("original")?,
                current: next("current")?,
            }),
            _ => Err(CliError::UnknownCommand(name)),
        }
    }

    /// True when the command reads its document from stdin.
    pub fn reads_stdin(&self) -> bool {
        !matches!(self, Command::Diff { .. })
    }
}

/// Look up `path` in a JSON document and return the value as JSON.
pub fn lookup_path(json: &str, path: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(json)?;
    let value = get(&doc, path).ok_or_else(|| CliError::NoValue(path.to_string()))?;
    Ok(serde_json::to_string(value)?)
}

/// Store a JSON value at `path` and return the updated document.
pub fn set_path(json: &str, path: &str, value: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(json)?;
    let value: Value = serde_json::from_str(value)?;
    Ok(serde_json::to_string(&set(&doc, path, value))?)
}

/// Remove `path` and return the updated document.
pub fn remove_path(json: &str, path: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string(&remove(&doc, path))?)
}

/// Append a JSON value to the array at `path` and return the updated document.
pub fn append_path(json: &str, path: &str, value: &str) -> Result<String, CliError> {
    let doc: Value = serde_json::from_str(json)?;
    let value: Value = serde_json::from_str(value)?;
    Ok(serde_json::to_string(&append_to_array(&doc, path, value))?)
}

/// Return the modified paths between two documents as a JSON array.
pub fn diff_documents(original: &str, current: &str) -> Result<String, CliError> {
    let original: Value = serde_json::from_str(original)?;
    let current: Value = serde_json::from_str(current)?;
    let paths: Vec<String> = ModificationSet::between(&original, &current)
        .into_iter()
        .collect();
    Ok(serde_json::to_string(&paths)?)
}

/// Run a command. `stdin` is the document for every command but `diff`,
/// which reads its two documents from the named files.
pub fn run(command: &Command, stdin: &str) -> Result<String, CliError> {
    match command {
        Command::Get { path } => lookup_path(stdin, path),
        Command::Set { path, value } => set_path(stdin, path, value),
        Command::Remove { path } => remove_path(stdin, path),
        Command::Append { path, value } => append_path(stdin, path, value),
        Command::Diff { original, current } => {
            let original = std::fs::read_to_string(original)?;
            let current = std::fs::read_to_string(current)?;
            diff_documents(&original, &current)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(
            Command::parse(&args(&["get", "a.b"])).unwrap(),
            Command::Get { path: "a.b".into() }
        );
        assert_eq!(
            Command::parse(&args(&["set", "a", "1"])).unwrap(),
            Command::Set { path: "a".into(), value: "1".into() }
        );
        assert!(matches!(
            Command::parse(&args(&["set", "a"])),
            Err(CliError::MissingArgument("value"))
        ));
        assert!(matches!(
            Command::parse(&args(&["frobnicate"])),
            Err(CliError::UnknownCommand(_))
        ));
        assert!(matches!(
            Command::parse(&[]),
            Err(CliError::MissingArgument("command"))
        ));
    }

    #[test]
    fn lookup() {
        let doc = r#"{"address":[{"city":"Boston"}]}"#;
        assert_eq!(lookup_path(doc, "address.0.city").unwrap(), r#""Boston""#);
        assert!(matches!(lookup_path(doc, "address.1"), Err(CliError::NoValue(_))));
        assert!(matches!(lookup_path("{", "a"), Err(CliError::Json(_))));
    }

    #[test]
    fn edits() {
        assert_eq!(
            set_path("{}", "address.0.city", r#""Boston""#).unwrap(),
            r#"{"address":[{"city":"Boston"}]}"#
        );
        assert_eq!(
            remove_path(r#"{"items":["a","b","c"]}"#, "items.1").unwrap(),
            r#"{"items":["a","c"]}"#
        );
        assert_eq!(
            append_path(r#"{"items":[1]}"#, "items", "2").unwrap(),
            r#"{"items":[1,2]}"#
        );
    }

    #[test]
    fn set_out_of_range_index_leaves_document() {
        assert_eq!(
            set_path(r#"{"items":[]}"#, "items.18446744073709551615", "1").unwrap(),
            r#"{"items":[]}"#
        );
    }

    #[test]
    fn diff() {
        assert_eq!(
            diff_documents(r#"{"items":[1,2,3]}"#, r#"{"items":[1,2]}"#).unwrap(),
            r#"["items","items.2"]"#
        );
    }

    #[test]
    fn run_dispatches() {
        let command = Command::Get { path: "a".into() };
        assert!(command.reads_stdin());
        assert_eq!(run(&command, r#"{"a":true}"#).unwrap(), "true");
    }
}
