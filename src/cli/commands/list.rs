//! list command - Show registered names and their absolute paths

use serde::Serialize;

use crate::cli::Context;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// One `list --json` record.
#[derive(Debug, Serialize)]
struct EntryJson {
    name: String,
    path: String,
}

/// List every registered name in registration order.
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let workspace = ctx.open_workspace()?;

    if json {
        let entries: Vec<EntryJson> = workspace
            .entries()
            .map(|(name, path)| EntryJson {
                name: name.to_string(),
                path: path.display().to_string(),
            })
            .collect();
        let text =
            serde_json::to_string_pretty(&entries).context("Failed to serialize entries")?;
        output::print(text);
    } else {
        output::print(output::format_entries(workspace.entries()));
    }

    Ok(())
}
