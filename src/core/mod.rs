//! core
//!
//! Named-path registry, resolution, and directory materialization.
//!
//! # Modules
//!
//! - [`types`] - Strong types: PathName, boundary validation
//! - [`registry`] - Ordered name → path mapping with the `root` anchor
//! - [`resolve`] - Path joining and root rebinding rules
//! - [`workspace`] - Public entry point combining registry and creator
//! - [`materialize`] - Directory creation for registered names
//! - [`config`] - Layout file schema and loading
//!
//! # Design Principles
//!
//! - Names are validated once, at the boundary
//! - Absolute paths are recomputed from the current root on every query
//! - Directory creation is the only side effect, and goes through
//!   [`crate::fs::DirCreator`]

pub mod config;
pub mod materialize;
pub mod registry;
pub mod resolve;
pub mod types;
pub mod workspace;
