//! resolve command - Print a path under a name without creating it

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// Print `segments` resolved under `name`.
pub fn resolve(ctx: &Context, name: &str, segments: &[String]) -> Result<()> {
    let workspace = ctx.open_workspace()?;
    let path = workspace.resolve(name, segments)?;
    output::print(path.display());
    Ok(())
}
