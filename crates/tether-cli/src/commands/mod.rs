//! Command-line interface definition and command implementations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod bootstrap;
pub mod reset;
pub mod status;
pub mod sync_local;
pub mod sync_remote;
mod utils;

/// Keep a workspace directory mirrored against a remote repository.
#[derive(Parser)]
#[command(
    name = "tether",
    version,
    about = "Workspace synchronization against a remote repository"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Project root containing tether.toml (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub project: Option<PathBuf>,

    /// Suppress step progress output
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Create the workspace, ignore entries and history log
    Bootstrap,

    /// Delete the working copy and history log
    Reset,

    /// Clone or refresh the local working copy
    SyncLocal,

    /// Refresh the working copy and publish changes to a new remote branch
    SyncRemote,

    /// Show bootstrap and working-copy state
    Status,
}
