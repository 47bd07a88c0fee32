//! `tether status` command - show workspace state.

use std::path::Path;

use anyhow::Result;

use crate::commands::utils;
use crate::output;

/// Run the status command.
pub fn run(project: &Path) -> Result<()> {
    let syncer = utils::build_syncer(project)?;
    let paths = syncer.paths();

    output::info(&format!("workspace: {}", paths.workspace_dir.display()));
    output::info(&format!("remote: {}", paths.repository_url));
    println!("bootstrapped: {}", syncer.has_bootstrap());
    println!("working copy: {}", syncer.has_init_git());

    Ok(())
}
