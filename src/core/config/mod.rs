//! core::config
//!
//! Layout file discovery, loading, and writing.
//!
//! # Overview
//!
//! A layout file declares a root rebinding and a list of named paths. It is
//! input to a [`Workspace`](crate::core::workspace::Workspace), never a
//! persisted copy of one.
//!
//! # Locations
//!
//! Searched in order (first existing file wins):
//! 1. An explicit path (the `--config` flag)
//! 2. `$DIRMAP_CONFIG` if set
//! 3. `<cwd>/dirmap.toml` (canonical write location)
//! 4. `$XDG_CONFIG_HOME/dirmap/layout.toml`
//! 5. `~/.dirmap/layout.toml`
//!
//! A missing file is not an error: the empty layout is used. An explicit
//! path that does not exist is an error.
//!
//! # Example
//!
//! ```no_run
//! use dirmap::core::config::Config;
//! use dirmap::core::workspace::Workspace;
//! use std::path::Path;
//!
//! let cwd = Path::new("/path/to/project");
//! let loaded = Config::load(None, cwd).unwrap();
//!
//! let mut ws = Workspace::with_root(cwd).unwrap();
//! loaded.layout.apply(&mut ws).unwrap();
//! println!("logs live in {}", ws.get_path("logs").unwrap().display());
//! ```

pub mod schema;

pub use schema::{LayoutConfig, LayoutEntry};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::ValidationError;
use crate::core::workspace::WorkspaceError;

/// Name of the layout file in a project directory.
pub const LAYOUT_FILE_NAME: &str = "dirmap.toml";

/// Environment variable naming a layout file.
pub const CONFIG_ENV: &str = "DIRMAP_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("invalid layout: {0}")]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),
}

/// Result of loading a layout.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoadResult {
    /// The loaded layout (empty if no file was found).
    pub layout: LayoutConfig,
    /// The file it came from, if any.
    pub path: Option<PathBuf>,
}

/// Layout file loader and writer.
pub struct Config;

impl Config {
    /// Find and load the layout for `cwd`.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist, or if a located file
    /// cannot be read, parsed, or validated.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<ConfigLoadResult, ConfigError> {
        if let Some(path) = explicit {
            let layout = Self::read_layout(path)?;
            return Ok(ConfigLoadResult {
                layout,
                path: Some(path.to_path_buf()),
            });
        }

        match Self::locate(cwd) {
            Some(path) => {
                let layout = Self::read_layout(&path)?;
                Ok(ConfigLoadResult {
                    layout,
                    path: Some(path),
                })
            }
            None => Ok(ConfigLoadResult::default()),
        }
    }

    /// Find the first existing layout file among the standard locations.
    pub fn locate(cwd: &Path) -> Option<PathBuf> {
        Self::candidates(cwd).into_iter().find(|path| path.is_file())
    }

    fn candidates(cwd: &Path) -> Vec<PathBuf> {
        let mut candidates = Vec::new();

        if let Ok(path) = std::env::var(CONFIG_ENV) {
            candidates.push(PathBuf::from(path));
        }

        candidates.push(Self::project_layout_path(cwd));

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            candidates.push(PathBuf::from(xdg_home).join("dirmap/layout.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".dirmap/layout.toml"));
        }

        candidates
    }

    /// Read, parse, and validate a layout file.
    pub fn read_layout(path: &Path) -> Result<LayoutConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let layout: LayoutConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        layout.validate()?;
        Ok(layout)
    }

    /// The canonical layout path for a project directory.
    ///
    /// Returns `<cwd>/dirmap.toml`.
    pub fn project_layout_path(cwd: &Path) -> PathBuf {
        cwd.join(LAYOUT_FILE_NAME)
    }

    /// Write a layout file atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file in the
    /// same directory, then renames it over the target.
    pub fn write_layout(path: &Path, layout: &LayoutConfig) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(layout).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }
}
