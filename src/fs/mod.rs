//! fs
//!
//! Filesystem capability consumed by the workspace.
//!
//! # Architecture
//!
//! Directory creation goes through the [`DirCreator`] trait, which has
//! two implementations:
//!
//! - [`TokioDirCreator`]: Creates directories with `tokio::fs` (default)
//! - [`RecordingDirCreator`]: Records requests in memory (testing)
//!
//! Nothing else in the crate touches the filesystem to create directories.

pub mod mock;
mod tokio_fs;
mod traits;

pub use mock::RecordingDirCreator;
pub use tokio_fs::TokioDirCreator;
pub use traits::DirCreator;
