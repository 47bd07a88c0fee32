//! `tether reset` command - delete the working copy and history log.

use std::path::Path;

use anyhow::Result;

use crate::commands::utils;
use crate::output;

/// Run the reset command.
pub fn run(project: &Path) -> Result<()> {
    let syncer = utils::build_syncer(project)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(syncer.reset())?;

    output::success("workspace removed");
    Ok(())
}
