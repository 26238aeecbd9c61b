//! Reference configuration schema store.
//!
//! The schema is a JSON document describing the template shape of valid
//! configuration: arbitrarily nested objects whose leaf paths (joined with
//! `.`) form the set of defined keys. Loading is best-effort by design: a
//! missing or unparsable schema yields an empty store so the tool can still
//! run (every key lookup then reports as undefined).

use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

/// Conventional schema file name, looked up in the working directory.
pub const SCHEMA_FILE_NAME: &str = "config.json.template";

/// Read-only set of dotted config key paths considered valid.
///
/// Built once per run and shared by reference across all rule invocations;
/// never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct SchemaStore {
    keys: HashSet<String>,
}

impl SchemaStore {
    /// Load the schema from `path`, swallowing all failures.
    ///
    /// Absence or invalid content degrades to an empty store rather than an
    /// error, so a vendored or schema-less tree can still be linted.
    pub fn load(path: &Path) -> Self {
        Self::try_load(path).unwrap_or_default()
    }

    fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {}", path.display()))?;
        let json: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse schema file: {}", path.display()))?;
        Ok(Self::from_value(&json))
    }

    /// Build a store from an already-parsed schema document.
    pub fn from_value(json: &Value) -> Self {
        let mut keys = HashSet::new();
        flatten_value(json, String::new(), &mut keys);
        Self { keys }
    }

    /// Build a store from explicit keys.
    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `key` exists in the flattened key set.
    ///
    /// Exact dotted-path equality only; no prefix or wildcard matching.
    pub fn is_defined(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }
}

/// Flatten a JSON value into dotted key paths.
///
/// Objects recurse; every non-object leaf (string, number, bool, null,
/// array) terminates a path. A non-object root contributes no keys.
fn flatten_value(value: &Value, prefix: String, keys: &mut HashSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_value(val, new_prefix, keys);
            }
        }
        _ => {
            if !prefix.is_empty() {
                keys.insert(prefix);
            }
        }
    }
}
