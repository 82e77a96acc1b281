//! core::workspace
//!
//! The public entry point: a registry of named paths plus the directory
//! creator that materializes them.
//!
//! # Operations
//!
//! - [`Workspace::set_path`] / [`Workspace::set_root`] - register or rebind
//! - [`Workspace::get_path`] - absolute path of a name
//! - [`Workspace::resolve`] - absolute path of a name plus sub-segments
//! - [`Workspace::names`] / [`Workspace::entries`] - introspection
//! - [`Workspace::build_root`], [`Workspace::build`],
//!   [`Workspace::build_all`] - create directories on disk
//!
//! Every operation that takes a name or segments validates them before any
//! lookup or I/O.
//!
//! # Example
//!
//! ```
//! use dirmap::core::workspace::Workspace;
//! use dirmap::fs::RecordingDirCreator;
//! use std::path::PathBuf;
//!
//! # tokio_test::block_on(async {
//! let creator = RecordingDirCreator::new();
//! let mut ws = Workspace::with_creator("/w", creator.clone()).unwrap();
//! ws.set_path("logs", &["var", "log"]).unwrap();
//! ws.set_path("cache", &["var", "cache"]).unwrap();
//!
//! ws.build_all().await.unwrap();
//! assert_eq!(
//!     creator.created(),
//!     vec![
//!         PathBuf::from("/w"),
//!         PathBuf::from("/w/var/log"),
//!         PathBuf::from("/w/var/cache"),
//!     ]
//! );
//!
//! assert_eq!(
//!     ws.resolve("logs", &["app.log"]).unwrap(),
//!     PathBuf::from("/w/var/log/app.log")
//! );
//! # });
//! ```

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::registry::PathRegistry;
use super::resolve::{join_rebinding, join_segments};
use super::types::{validate_segments, PathName, ValidationError, ROOT};
use crate::fs::{DirCreator, TokioDirCreator};

/// Errors from workspace operations.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// A name or segment argument is malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The name was never registered.
    #[error("the path named {name} is not registered")]
    NotFound { name: String },

    /// Directory creation failed.
    #[error("failed to build '{name}' at '{}': {source}", .path.display())]
    Io {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The process working directory could not be determined.
    #[error("cannot determine the current working directory: {0}")]
    WorkingDirectory(#[source] io::Error),
}

/// A named-path registry bound to a directory creator.
///
/// Mutation takes `&mut self`; queries and builds take `&self`.
#[derive(Debug, Clone)]
pub struct Workspace<C = TokioDirCreator> {
    pub(crate) registry: PathRegistry,
    pub(crate) creator: C,
}

impl Workspace<TokioDirCreator> {
    /// Create a workspace anchored at the current working directory.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::WorkingDirectory` if the working directory
    /// cannot be read.
    pub fn new() -> Result<Self, WorkspaceError> {
        let cwd = std::env::current_dir().map_err(WorkspaceError::WorkingDirectory)?;
        Ok(Self::from_parts(PathRegistry::new(cwd), TokioDirCreator))
    }

    /// Create a workspace anchored at `root`.
    ///
    /// A relative `root` is made absolute against the current working
    /// directory.
    pub fn with_root(root: impl AsRef<Path>) -> Result<Self, WorkspaceError> {
        Self::with_creator(root, TokioDirCreator)
    }
}

impl<C: DirCreator> Workspace<C> {
    /// Create a workspace anchored at `root` that builds through `creator`.
    ///
    /// An empty `root` anchors at the current working directory.
    pub fn with_creator(root: impl AsRef<Path>, creator: C) -> Result<Self, WorkspaceError> {
        let root = root.as_ref();
        let root = if root.as_os_str().is_empty() {
            std::env::current_dir()
        } else {
            std::path::absolute(root)
        }
        .map_err(WorkspaceError::WorkingDirectory)?;
        Ok(Self::from_parts(PathRegistry::new(root), creator))
    }
}

impl<C> Workspace<C> {
    fn from_parts(registry: PathRegistry, creator: C) -> Self {
        Self { registry, creator }
    }

    /// Register `name` as the join of `segments`.
    ///
    /// The fragment is stored raw and resolved against the root on every
    /// query; absolute segments are kept relative. Registering `root`
    /// rebinds the anchor relative to the current root instead, and there an
    /// absolute segment replaces the root.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Validation` for a malformed name or segment.
    pub fn set_path<S: AsRef<str>>(&mut self, name: &str, segments: &[S]) -> Result<(), WorkspaceError> {
        let name = PathName::new(name)?;
        validate_segments(segments)?;
        let fragment = if name.is_root() {
            join_rebinding(segments)
        } else {
            join_segments(segments)
        };
        self.registry.set(name, fragment);
        Ok(())
    }

    /// Rebind the root relative to the current root.
    ///
    /// Same as `set_path("root", &[path])`; an absolute `path` replaces the
    /// root outright.
    pub fn set_root(&mut self, path: &str) -> Result<(), WorkspaceError> {
        self.set_path(ROOT, &[path])
    }

    /// The current absolute root.
    pub fn root(&self) -> &Path {
        self.registry.root()
    }

    /// The absolute path registered under `name`.
    ///
    /// # Errors
    ///
    /// - `WorkspaceError::Validation` if `name` is malformed
    /// - `WorkspaceError::NotFound` if `name` is not registered
    pub fn get_path(&self, name: &str) -> Result<PathBuf, WorkspaceError> {
        let name = PathName::new(name)?;
        self.lookup(&name)
    }

    pub(crate) fn lookup(&self, name: &PathName) -> Result<PathBuf, WorkspaceError> {
        self.registry
            .absolute(name.as_str())
            .ok_or_else(|| WorkspaceError::NotFound {
                name: name.to_string(),
            })
    }

    /// Check whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.registry.contains(name)
    }

    /// Iterate over registered names in registration order, `root` first.
    pub fn names(&self) -> impl Iterator<Item = &PathName> + '_ {
        self.registry.names()
    }

    /// Iterate over `(name, absolute path)` pairs in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&PathName, PathBuf)> + '_ {
        self.registry.entries()
    }

    /// The underlying registry.
    pub fn registry(&self) -> &PathRegistry {
        &self.registry
    }

    /// The directory creator used by the build operations.
    pub fn creator(&self) -> &C {
        &self.creator
    }
}
