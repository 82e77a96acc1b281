//! init command - Write a starter layout file

use crate::cli::Context;
use crate::core::config::{Config, LayoutConfig};
use crate::ui::output;
use anyhow::{bail, Context as _, Result};

/// Write a starter `dirmap.toml` in the working directory.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let cwd = ctx.working_dir()?;
    let path = Config::project_layout_path(&cwd);

    if path.exists() && !force {
        bail!(
            "Layout file '{}' already exists. Use --force to overwrite it.",
            path.display()
        );
    }

    Config::write_layout(&path, &starter_layout()).context("Failed to write layout")?;

    output::success(
        format!("Wrote {}", path.display()),
        ctx.verbosity(),
    );
    Ok(())
}

/// The layout written by `init`.
fn starter_layout() -> LayoutConfig {
    let mut layout = LayoutConfig::default();
    layout.insert("cache", &["var", "cache"]);
    layout.insert("logs", &["var", "log"]);
    layout.insert("data", &["var", "data"]);
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starter_layout_is_valid() {
        let entries = starter_layout().validate().unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["cache", "logs", "data"]);
    }
}
