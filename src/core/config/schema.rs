//! core::config::schema
//!
//! Layout file schema.
//!
//! # Layout File
//!
//! ```toml
//! root = "build"
//!
//! [paths]
//! logs = ["var", "log"]
//! cache = "var/cache"
//! ```
//!
//! # Validation
//!
//! Path values arrive as untyped TOML. After parsing, every entry is checked
//! to be a string or an array of strings, and names and segments go through
//! the same validation as the programmatic API.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::types::{validate_segments, PathName, ValidationError};
use crate::core::workspace::Workspace;

use super::ConfigError;

/// A named-path layout as read from a TOML file.
///
/// Path entries keep their file order; that order becomes the registration
/// order of the workspace.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Root rebinding, relative to the starting root.
    pub root: Option<String>,

    /// Named paths: a string or an array of path segments each.
    pub paths: IndexMap<String, toml::Value>,
}

/// A validated layout entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    /// The registered name.
    pub name: PathName,
    /// Segments joined under the root.
    pub segments: Vec<String>,
}

impl LayoutConfig {
    /// Validate the layout and convert entries to typed form.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first bad entry.
    pub fn validate(&self) -> Result<Vec<LayoutEntry>, ConfigError> {
        if let Some(root) = &self.root {
            validate_segments(&[root])?;
        }

        let mut entries = Vec::with_capacity(self.paths.len());
        for (name, value) in &self.paths {
            let segments = segments_of(name, value)?;
            validate_segments(&segments)?;
            entries.push(LayoutEntry {
                name: PathName::new(name.as_str())?,
                segments,
            });
        }
        Ok(entries)
    }

    /// Register this layout in `workspace`.
    ///
    /// The root is rebound first, then every path is registered in file
    /// order. Nothing is registered if validation fails.
    pub fn apply<C>(&self, workspace: &mut Workspace<C>) -> Result<(), ConfigError> {
        let entries = self.validate()?;

        if let Some(root) = &self.root {
            workspace.set_root(root)?;
        }
        for entry in entries {
            workspace.set_path(entry.name.as_str(), &entry.segments)?;
        }
        Ok(())
    }

    /// Add or replace a path entry.
    pub fn insert<S: AsRef<str>>(&mut self, name: &str, segments: &[S]) {
        let value = toml::Value::Array(
            segments
                .iter()
                .map(|segment| toml::Value::String(segment.as_ref().to_string()))
                .collect(),
        );
        self.paths.insert(name.to_string(), value);
    }
}

fn segments_of(name: &str, value: &toml::Value) -> Result<Vec<String>, ValidationError> {
    match value {
        toml::Value::String(single) => Ok(vec![single.clone()]),
        toml::Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                toml::Value::String(segment) => Ok(segment.clone()),
                _ => Err(ValidationError::NotAString {
                    entry: name.to_string(),
                    index: Some(index),
                }),
            })
            .collect(),
        _ => Err(ValidationError::NotAString {
            entry: name.to_string(),
            index: None,
        }),
    }
}
