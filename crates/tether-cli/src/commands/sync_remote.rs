//! `tether sync-remote` command - publish local changes.

use std::path::Path;

use anyhow::Result;

use crate::commands::utils;
use crate::output;

/// Run the sync-remote command.
pub fn run(project: &Path) -> Result<()> {
    let syncer = utils::build_syncer(project)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(syncer.sync_remote())?;

    output::success("remote sync complete");
    Ok(())
}
