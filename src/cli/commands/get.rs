//! get command - Print the absolute path of a name

use crate::cli::Context;
use crate::ui::output;
use anyhow::Result;

/// Print the absolute path registered under `name`.
pub fn get(ctx: &Context, name: &str) -> Result<()> {
    let workspace = ctx.open_workspace()?;
    let path = workspace.get_path(name)?;
    output::print(path.display());
    Ok(())
}
