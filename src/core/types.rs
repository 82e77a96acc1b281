//! core::types
//!
//! Strong types for registry keys and boundary validation.
//!
//! # Types
//!
//! - [`PathName`] - Validated symbolic name of a storage location
//! - [`ValidationError`] - Rejection of a malformed name or path segment
//!
//! # Validation
//!
//! Names are validated at construction time, so a `PathName` held by the
//! registry is always well-formed. Path segments stay plain strings and are
//! checked by [`validate_segments`] at each public entry point.
//!
//! # Examples
//!
//! ```
//! use dirmap::core::types::{validate_segments, PathName};
//!
//! let name = PathName::new("cache").unwrap();
//! assert_eq!(name.as_str(), "cache");
//! assert!(!name.is_root());
//!
//! assert!(PathName::new("").is_err());
//! assert!(validate_segments(&["var", "log"]).is_ok());
//! assert!(validate_segments(&["var", "l\0g"]).is_err());
//! ```

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The reserved name of the anchor every other name resolves against.
pub const ROOT: &str = "root";

/// An empty segment list, for calls that address a name itself.
pub const NO_SEGMENTS: &[&str] = &[];

/// Errors from name and segment validation.
///
/// Each variant identifies the offending argument: the name itself, or the
/// zero-based position of the segment that failed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid path name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid path segment at position {index}: {reason}")]
    InvalidSegment { index: usize, reason: &'static str },

    #[error("{}", not_a_string_message(.entry, .index))]
    NotAString { entry: String, index: Option<usize> },
}

fn not_a_string_message(entry: &str, index: &Option<usize>) -> String {
    match index {
        Some(index) => format!("path '{entry}': segment at position {index} is not a string"),
        None => format!("path '{entry}': expected a string or an array of strings"),
    }
}

/// A validated symbolic path name.
///
/// Names must be non-empty and must not contain a NUL character. The name
/// [`ROOT`] is reserved for the registry anchor.
///
/// # Example
///
/// ```
/// use dirmap::core::types::PathName;
///
/// let root = PathName::root();
/// assert!(root.is_root());
/// assert_eq!(root.to_string(), "root");
///
/// assert!(PathName::new("logs").is_ok());
/// assert!(PathName::new("").is_err());
/// assert!(PathName::new("bad\0name").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PathName(String);

impl PathName {
    /// Create a new validated path name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is empty or
    /// contains a NUL character.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    /// The reserved `root` name.
    pub fn root() -> Self {
        Self(ROOT.to_string())
    }

    fn validate(name: &str) -> Result<(), ValidationError> {
        if name.is_empty() {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: "name cannot be empty",
            });
        }
        if name.contains('\0') {
            return Err(ValidationError::InvalidName {
                name: name.escape_default().to_string(),
                reason: "name cannot contain a NUL character",
            });
        }
        Ok(())
    }

    /// Whether this is the reserved `root` name.
    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PathName {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl TryFrom<&str> for PathName {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PathName> for String {
    fn from(name: PathName) -> Self {
        name.0
    }
}

impl AsRef<str> for PathName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets the registry map be queried with a plain `&str`.
impl Borrow<str> for PathName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PathName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a sequence of path segments.
///
/// Empty segments are accepted; they contribute nothing to a join.
///
/// # Errors
///
/// Returns `ValidationError::InvalidSegment` carrying the position of the
/// first segment that contains a NUL character.
pub fn validate_segments<S: AsRef<str>>(segments: &[S]) -> Result<(), ValidationError> {
    for (index, segment) in segments.iter().enumerate() {
        let segment: &str = segment.as_ref();
        if segment.contains('\0') {
            return Err(ValidationError::InvalidSegment {
                index,
                reason: "segment cannot contain a NUL character",
            });
        }
    }
    Ok(())
}
