//! fs::mock
//!
//! In-memory directory creator for deterministic testing.
//!
//! # Design
//!
//! The recording creator never touches the disk. It records every
//! `create_dir_all` call in order and can be configured to fail on a given
//! path, so callers can test ordering and error propagation without a
//! temporary directory.
//!
//! # Example
//!
//! ```
//! use dirmap::fs::{DirCreator, RecordingDirCreator};
//! use std::path::{Path, PathBuf};
//!
//! # tokio_test::block_on(async {
//! let creator = RecordingDirCreator::new();
//! creator.create_dir_all(Path::new("/w/a")).await.unwrap();
//!
//! creator.fail_on("/w/b", std::io::ErrorKind::PermissionDenied);
//! assert!(creator.create_dir_all(Path::new("/w/b")).await.is_err());
//!
//! assert_eq!(creator.created(), vec![PathBuf::from("/w/a")]);
//! assert_eq!(creator.calls().len(), 2);
//! # });
//! ```

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::traits::DirCreator;

/// Recording directory creator for testing.
///
/// Thread-safe via internal `Arc<Mutex<...>>` wrapping; clones share state.
#[derive(Debug, Clone, Default)]
pub struct RecordingDirCreator {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    /// Every requested path, including failed ones.
    calls: Vec<PathBuf>,
    /// Paths that were "created" successfully.
    created: Vec<PathBuf>,
    /// Path to fail on, with the error kind to report.
    fail_on: Option<(PathBuf, io::ErrorKind)>,
}

impl RecordingDirCreator {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any future request for `path` with an error of `kind`.
    pub fn fail_on(&self, path: impl Into<PathBuf>, kind: io::ErrorKind) {
        self.lock().fail_on = Some((path.into(), kind));
    }

    /// Stop failing.
    pub fn clear_failure(&self) {
        self.lock().fail_on = None;
    }

    /// All requested paths, in call order.
    pub fn calls(&self) -> Vec<PathBuf> {
        self.lock().calls.clone()
    }

    /// Successfully created paths, in call order.
    pub fn created(&self) -> Vec<PathBuf> {
        self.lock().created.clone()
    }

    fn lock(&self) -> MutexGuard<'_, RecordingInner> {
        // A poisoned lock only means another test thread panicked mid-call.
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl DirCreator for RecordingDirCreator {
    async fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut inner = self.lock();
        inner.calls.push(path.to_path_buf());

        if let Some((fail_path, kind)) = &inner.fail_on {
            if fail_path == path {
                return Err(io::Error::new(
                    *kind,
                    format!("injected failure for {}", path.display()),
                ));
            }
        }

        inner.created.push(path.to_path_buf());
        Ok(())
    }
}
