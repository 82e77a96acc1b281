//! build command - Create directories on disk

use crate::cli::Context;
use crate::core::types::ROOT;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Create directories for the workspace.
///
/// - `all`: every registered name, in registration order
/// - `name`: that name plus `segments`
/// - neither: the root
pub fn build(ctx: &Context, name: Option<&str>, segments: &[String], all: bool) -> Result<()> {
    let workspace = ctx.open_workspace()?;
    let verbosity = ctx.verbosity();

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;

    if all {
        if workspace.registry().len() == 1 {
            output::warn("no named paths are registered; building the root only", verbosity);
        }
        let built = runtime.block_on(workspace.build_all())?;
        for path in built {
            output::success(format!("Built {}", path.display()), verbosity);
        }
        return Ok(());
    }

    let name = name.unwrap_or(ROOT);
    runtime.block_on(workspace.build(name, segments))?;

    let path = workspace.resolve(name, segments)?;
    output::success(format!("Built {}", path.display()), verbosity);
    Ok(())
}
