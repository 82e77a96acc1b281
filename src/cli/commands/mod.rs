//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Opens the workspace from the layout file
//! 2. Calls workspace operations
//! 3. Formats and displays output
//!
//! # Async Commands
//!
//! `build` creates directories through the async
//! [`DirCreator`](crate::fs::DirCreator), so it runs on a tokio runtime
//! created for the invocation. All other commands are pure queries.

mod build;
mod completion;
mod get;
mod init;
mod list;
mod resolve;

// Re-export command functions for testing and direct invocation
pub use build::build;
pub use completion::completion;
pub use get::get;
pub use init::init;
pub use list::list;
pub use resolve::resolve;

use super::args::Command;
use super::Context;
use anyhow::Result;

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init { force } => init::init(ctx, force),
        Command::List { json } => list::list(ctx, json),
        Command::Get { name } => get::get(ctx, &name),
        Command::Resolve { name, segments } => resolve::resolve(ctx, &name, &segments),
        Command::Build {
            name,
            segments,
            all,
        } => build::build(ctx, name.as_deref(), &segments, all),
        Command::Completion { shell } => completion::completion(shell),
    }
}
