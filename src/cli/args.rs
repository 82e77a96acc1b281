//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--config <path>`: Use this layout file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// dirmap - Name your storage locations, resolve and create them on demand
#[derive(Parser, Debug)]
#[command(name = "dirmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if dirmap was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Layout file to load instead of searching the standard locations
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter layout file
    #[command(
        name = "init",
        long_about = "Write a starter dirmap.toml in the working directory.\n\n\
            The layout file names your storage locations. Every other command \
            loads it to build the workspace.",
        after_help = "\
EXAMPLES:
    # Create dirmap.toml in the current directory
    dirmap init

    # Replace an existing layout
    dirmap init --force"
    )]
    Init {
        /// Overwrite an existing layout file
        #[arg(long)]
        force: bool,
    },

    /// List registered names and their absolute paths
    #[command(
        name = "list",
        after_help = "\
EXAMPLES:
    # Tab-separated name and path, one per line
    dirmap list

    # Machine-readable output
    dirmap list --json"
    )]
    List {
        /// Output as a JSON array of {name, path} objects
        #[arg(long)]
        json: bool,
    },

    /// Print the absolute path of a name
    #[command(name = "get")]
    Get {
        /// Registered name
        name: String,
    },

    /// Print the path of a name plus sub-segments, without creating it
    #[command(
        name = "resolve",
        after_help = "\
EXAMPLES:
    # Where would the app log go?
    dirmap resolve logs app.log"
    )]
    Resolve {
        /// Registered name
        name: String,

        /// Segments joined under the name's path
        segments: Vec<String>,
    },

    /// Create directories on disk
    #[command(
        name = "build",
        long_about = "Create directories on disk.\n\n\
            With no arguments, creates the root directory. With a name, creates \
            that name's directory plus any extra segments. With --all, creates \
            every registered directory in registration order, stopping at the \
            first failure. Existing directories are left as they are.",
        after_help = "\
EXAMPLES:
    # Create the root directory
    dirmap build

    # Create one named directory
    dirmap build cache

    # Create a sub-directory under a name
    dirmap build logs archive 2024

    # Create everything
    dirmap build --all"
    )]
    Build {
        /// Registered name (defaults to root)
        #[arg(conflicts_with = "all")]
        name: Option<String>,

        /// Segments joined under the name's path
        #[arg(requires = "name")]
        segments: Vec<String>,

        /// Create every registered directory
        #[arg(long)]
        all: bool,
    },

    /// Generate shell completion scripts
    #[command(
        name = "completion",
        after_help = "\
INSTALLATION:
    # Bash
    dirmap completion bash >> ~/.bashrc

    # Zsh
    dirmap completion zsh > ~/.zfunc/_dirmap

    # Fish
    dirmap completion fish > ~/.config/fish/completions/dirmap.fish"
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_build_with_segments() {
        let cli = Cli::try_parse_from(["dirmap", "build", "logs", "archive", "2024"]).unwrap();
        match cli.command {
            Command::Build {
                name,
                segments,
                all,
            } => {
                assert_eq!(name.as_deref(), Some("logs"));
                assert_eq!(segments, vec!["archive", "2024"]);
                assert!(!all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn build_all_conflicts_with_name() {
        assert!(Cli::try_parse_from(["dirmap", "build", "logs", "--all"]).is_err());
    }

    #[test]
    fn parse_completion_shell() {
        let cli = Cli::try_parse_from(["dirmap", "completion", "powershell"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Completion {
                shell: Shell::PowerShell
            }
        ));
        assert!(Cli::try_parse_from(["dirmap", "completion", "tcsh"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["dirmap", "list", "--cwd", "/tmp", "-q"]).unwrap();
        assert_eq!(cli.cwd, Some(PathBuf::from("/tmp")));
        assert!(cli.quiet);
    }
}
