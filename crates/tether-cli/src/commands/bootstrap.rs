//! `tether bootstrap` command - create the workspace.

use std::path::Path;

use anyhow::Result;

use crate::commands::utils;
use crate::output;

/// Run the bootstrap command.
pub fn run(project: &Path) -> Result<()> {
    let syncer = utils::build_syncer(project)?;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(syncer.bootstrap())?;

    output::success(&format!(
        "workspace ready at {}",
        syncer.paths().workspace_dir.display()
    ));
    Ok(())
}
