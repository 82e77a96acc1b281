//! cli
//!
//! Command-line interface layer for dirmap.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Set up logging
//! - Build the workspace from the layout file and delegate to a handler
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, loads the layout
//! through [`crate::core::config`], and calls [`crate::core::workspace`]
//! operations. It never creates directories itself.

pub mod args;
pub mod commands;

pub use args::Cli;

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::core::workspace::Workspace;
use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Layout file override.
    pub config: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    /// The directory commands run in.
    pub fn working_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => std::path::absolute(cwd)
                .with_context(|| format!("Invalid working directory '{}'", cwd.display())),
            None => std::env::current_dir().context("Failed to read the current directory"),
        }
    }

    /// Output verbosity derived from the flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Build a workspace anchored at the working directory, with the
    /// layout file applied.
    pub fn open_workspace(&self) -> Result<Workspace> {
        let cwd = self.working_dir()?;
        let loaded = Config::load(self.config.as_deref(), &cwd).context("Failed to load layout")?;

        let mut workspace = Workspace::with_root(&cwd)?;
        loaded
            .layout
            .apply(&mut workspace)
            .context("Failed to apply layout")?;

        match &loaded.path {
            Some(path) => tracing::debug!(path = %path.display(), "loaded layout"),
            None => tracing::debug!("no layout file found, using the working directory only"),
        }
        Ok(workspace)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let ctx = Context {
        cwd: cli.cwd.clone(),
        config: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--debug` selects the `debug`
/// level and the default is `warn`.
fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when run from tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
