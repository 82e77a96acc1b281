//! core::registry
//!
//! The ordered name → path mapping behind a [`Workspace`](crate::core::workspace::Workspace).
//!
//! # Invariants
//!
//! - The `root` entry always exists and always holds an absolute,
//!   normalized path.
//! - Rebinding root is relative to the previous root, never a blind
//!   overwrite.
//! - Every other entry holds the relative fragment it was registered with.
//!   Absolute paths are computed on every query from the *current* root,
//!   so rebinding root moves every name registered before it.
//! - Iteration follows insertion order. Re-registering a name keeps its
//!   original position.
//!
//! The registry works on typed, already-validated input. Boundary
//! validation of untyped strings happens in the workspace layer.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use super::resolve::{rebase_root, strip_anchor};
use super::types::{PathName, ROOT};

/// Ordered mapping from [`PathName`] to stored path values.
///
/// # Example
///
/// ```
/// use dirmap::core::registry::PathRegistry;
/// use dirmap::core::types::PathName;
/// use std::path::PathBuf;
///
/// let mut registry = PathRegistry::new(PathBuf::from("/a"));
/// registry.set(PathName::new("x").unwrap(), PathBuf::from("b/c"));
/// assert_eq!(registry.absolute("x"), Some(PathBuf::from("/a/b/c")));
///
/// registry.set(PathName::root(), PathBuf::from("z"));
/// assert_eq!(registry.root(), PathBuf::from("/a/z").as_path());
/// assert_eq!(registry.absolute("x"), Some(PathBuf::from("/a/z/b/c")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRegistry {
    entries: IndexMap<PathName, PathBuf>,
}

impl PathRegistry {
    /// Create a registry anchored at `root`.
    ///
    /// `root` is normalized; callers pass an absolute path.
    pub fn new(root: PathBuf) -> Self {
        let mut entries = IndexMap::new();
        entries.insert(PathName::root(), rebase_root(&root, Path::new("")));
        Self { entries }
    }

    /// Store a value for `name`.
    ///
    /// For `root`, the fragment is resolved against the previous root.
    /// For any other name, the fragment is stored relative, with any root
    /// component dropped.
    pub fn set(&mut self, name: PathName, fragment: PathBuf) {
        if name.is_root() {
            let rebound = rebase_root(self.root(), &fragment);
            tracing::debug!(path = %rebound.display(), "rebinding root");
            self.entries.insert(name, rebound);
        } else {
            let fragment = strip_anchor(&fragment);
            tracing::trace!(name = %name, fragment = %fragment.display(), "registering path");
            self.entries.insert(name, fragment);
        }
    }

    /// The current absolute root.
    pub fn root(&self) -> &Path {
        // Inserted by `new` and never removed.
        &self.entries[ROOT]
    }

    /// The raw stored value for `name`, as registered.
    pub fn stored(&self, name: &str) -> Option<&Path> {
        self.entries.get(name).map(PathBuf::as_path)
    }

    /// The absolute path for `name`, resolved against the current root.
    pub fn absolute(&self, name: &str) -> Option<PathBuf> {
        let stored = self.entries.get(name)?;
        if name == ROOT {
            Some(stored.clone())
        } else {
            Some(self.root().join(stored))
        }
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered names, `root` included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether no names are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over registered names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &PathName> + '_ {
        self.entries.keys()
    }

    /// Iterate over `(name, absolute path)` pairs in insertion order.
    ///
    /// Each path is computed when its item is produced.
    pub fn entries(&self) -> impl Iterator<Item = (&PathName, PathBuf)> + '_ {
        let root = self.root();
        self.entries.iter().map(move |(name, stored)| {
            if name.is_root() {
                (name, stored.clone())
            } else {
                (name, root.join(stored))
            }
        })
    }
}
