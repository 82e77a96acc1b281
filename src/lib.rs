//! dirmap - A symbolic path registry over the filesystem
//!
//! Callers register logical names ("root", "cache", "logs", …) bound to
//! directory paths, resolve sub-paths under those names, and create the
//! corresponding directories on demand. Components address storage by name
//! and never hard-code the layout.
//!
//! # Architecture
//!
//! The codebase is layered:
//!
//! - [`core`] - Validation, registry, resolution, materialization, layout files
//! - [`fs`] - The directory-creation capability the core consumes
//! - [`cli`] - Command-line interface (parses args, drives a workspace)
//! - [`ui`] - User-facing output
//!
//! # Correctness Invariants
//!
//! 1. The `root` name always exists and always resolves to an absolute path
//! 2. Rebinding root is relative to the previous root
//! 3. Non-root names resolve against the root current at query time
//! 4. Bulk materialization is sequential and in registration order
//!
//! # Example
//!
//! ```
//! use dirmap::core::workspace::Workspace;
//! use std::path::PathBuf;
//!
//! let mut ws = Workspace::with_root("/srv/app").unwrap();
//! ws.set_path("logs", &["var", "log"]).unwrap();
//! assert_eq!(ws.get_path("logs").unwrap(), PathBuf::from("/srv/app/var/log"));
//!
//! ws.set_root("/srv/other").unwrap();
//! assert_eq!(ws.get_path("logs").unwrap(), PathBuf::from("/srv/other/var/log"));
//! ```

pub mod cli;
pub mod core;
pub mod fs;
pub mod ui;

pub use crate::core::types::{PathName, ValidationError, NO_SEGMENTS, ROOT};
pub use crate::core::workspace::{Workspace, WorkspaceError};
