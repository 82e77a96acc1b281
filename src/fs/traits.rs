//! fs::traits
//!
//! Directory creation trait definition.
//!
//! # Design
//!
//! The `DirCreator` trait is the single filesystem capability the workspace
//! consumes. It is async because directory creation may block on I/O.
//!
//! Implementations MUST:
//! - Create missing parent directories (recursive creation)
//! - Succeed when the directory already exists
//! - Fail when the path exists as something other than a directory
//! - Be thread-safe (Send + Sync)
//!
//! # Example
//!
//! ```
//! use dirmap::fs::{DirCreator, TokioDirCreator};
//!
//! # tokio_test::block_on(async {
//! let temp = tempfile::TempDir::new().unwrap();
//! let target = temp.path().join("a/b/c");
//!
//! let creator = TokioDirCreator;
//! creator.create_dir_all(&target).await.unwrap();
//! // Idempotent on an existing directory
//! creator.create_dir_all(&target).await.unwrap();
//! assert!(target.is_dir());
//! # });
//! ```

use std::path::Path;

use async_trait::async_trait;

/// Trait for recursive, idempotent directory creation.
#[async_trait]
pub trait DirCreator: Send + Sync {
    /// Create `path` and any missing parents.
    ///
    /// Returns `Ok(())` if the directory already exists.
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;
}

#[async_trait]
impl<T: DirCreator + ?Sized> DirCreator for std::sync::Arc<T> {
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        (**self).create_dir_all(path).await
    }
}
