//! `tether sync-local` command - clone or refresh the working copy.

use std::path::Path;

use anyhow::Result;

use crate::commands::utils;
use crate::output;

/// Run the sync-local command.
pub fn run(project: &Path) -> Result<()> {
    let syncer = utils::build_syncer(project)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(syncer.sync_local())?;

    output::success("local sync complete");
    Ok(())
}
