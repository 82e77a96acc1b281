//! core::materialize
//!
//! Directory materialization for registered names.
//!
//! # Semantics
//!
//! - Creation is recursive and idempotent: an existing directory is not an
//!   error.
//! - `build_root()` and `build("root", ..)` are the same operation.
//! - `build_all()` walks the registry in registration order, one directory
//!   at a time, and stops at the first failure. Directories created before
//!   the failure are left in place.
//! - Failures are not retried; they surface as `WorkspaceError::Io` with the
//!   name and the attempted path.

use std::path::{Path, PathBuf};

use super::resolve::join_onto;
use super::types::{validate_segments, PathName};
use super::workspace::{Workspace, WorkspaceError};
use crate::fs::DirCreator;

impl<C: DirCreator> Workspace<C> {
    /// Create the root directory.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Io` if the directory cannot be created.
    pub async fn build_root(&self) -> Result<(), WorkspaceError> {
        let root = self.root().to_path_buf();
        self.materialize(&PathName::root(), &root).await
    }

    /// Create the directory for `name` plus `segments`.
    ///
    /// # Errors
    ///
    /// - `WorkspaceError::Validation` for a malformed name or segment
    /// - `WorkspaceError::NotFound` if `name` is not registered
    /// - `WorkspaceError::Io` if the directory cannot be created
    pub async fn build<S: AsRef<str>>(&self, name: &str, segments: &[S]) -> Result<(), WorkspaceError> {
        let name = PathName::new(name)?;
        validate_segments(segments)?;
        let path = join_onto(self.lookup(&name)?, segments);
        self.materialize(&name, &path).await
    }

    /// Create the directory of every registered name, `root` included.
    ///
    /// Builds run sequentially in registration order. Returns the created
    /// paths in that order.
    ///
    /// # Errors
    ///
    /// Returns the first `WorkspaceError::Io`; later names are not built.
    pub async fn build_all(&self) -> Result<Vec<PathBuf>, WorkspaceError> {
        let mut built = Vec::with_capacity(self.registry.len());
        for (name, path) in self.registry.entries() {
            self.materialize(name, &path).await?;
            built.push(path);
        }
        Ok(built)
    }

    async fn materialize(&self, name: &PathName, path: &Path) -> Result<(), WorkspaceError> {
        tracing::debug!(name = %name, path = %path.display(), "creating directory");
        self.creator
            .create_dir_all(path)
            .await
            .map_err(|source| WorkspaceError::Io {
                name: name.to_string(),
                path: path.to_path_buf(),
                source,
            })
    }
}
