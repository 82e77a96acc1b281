//! completion command
//!
//! Emits a completion script for the `dirmap` command tree.

use std::io::{self, Write};

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::args::Cli;

/// Print the completion script for `shell` to stdout.
pub fn completion(shell: Shell) -> Result<()> {
    write_script(shell, &mut io::stdout())
}

fn write_script(shell: Shell, out: &mut dyn Write) -> Result<()> {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "dirmap", out);
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_mentions_subcommands() {
        let mut out = Vec::new();
        write_script(Shell::Zsh, &mut out).unwrap();

        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("dirmap"));
        assert!(script.contains("resolve"));
    }
}
