//! fs::tokio_fs
//!
//! Directory creation backed by `tokio::fs`.

use std::path::Path;

use async_trait::async_trait;

use super::traits::DirCreator;

/// Creates directories on the local filesystem.
///
/// This is the default creator used by
/// [`Workspace::new`](crate::core::workspace::Workspace::new).
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDirCreator;

#[async_trait]
impl DirCreator for TokioDirCreator {
    async fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
        tokio::fs::create_dir_all(path).await
    }
}
