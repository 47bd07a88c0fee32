//! Shared command plumbing: building a syncer from project configuration.

use std::path::Path;

use anyhow::Result;
use tether_core::options::{GitOptions, OptionValue, SyncContext};
use tether_core::syncer::{Syncer, SyncerOptions};
use tether_core::workspace::{WorkspaceOptions, WorkspacePaths};
use tether_git::{GitCli, GitShell};
use tether_hosting::{HostingServer, SecretString, ServerOptions};

use crate::config::Config;

/// Build the syncer for `project` from its `tether.toml`.
pub fn build_syncer(project: &Path) -> Result<Syncer<GitCli, HostingServer>> {
    let config = Config::load(project)?;

    let workspace = WorkspaceOptions {
        context: project.to_path_buf(),
        sync_tag: config.workspace.sync_tag,
        workspace_dir_name: config.workspace.workspace_dir_name,
        repository_dir_name: config.workspace.repository_dir_name,
        repository_url: config.workspace.repository_url,
    };
    let paths = WorkspacePaths::derive(&workspace);

    let git_options = GitOptions::new(
        config.git.branch_name,
        config.git.commit_message,
        config.git.add_files.clone(),
        diff_option(config.git.default_branch.clone(), config.git.add_files),
    );

    let mut options = SyncerOptions::new(workspace, git_options);
    options.default_branch = config.git.default_branch;
    options.open_merge_request = config.hosting.open_merge_request;

    let git = GitCli::new(paths.repository_dir.clone());

    let token = std::env::var(&config.hosting.token_env).unwrap_or_default();
    let hosting = HostingServer::create(ServerOptions {
        kind: config.hosting.kind,
        host: config.hosting.host,
        token: SecretString::from(token),
        project: config.hosting.project,
    })?;

    Syncer::new(options, git, hosting).map_err(Into::into)
}

/// Default diff predicate: report a change when `git diff` against the
/// remote default branch produces output for any configured file.
fn diff_option(default_branch: String, files: Vec<String>) -> OptionValue<bool> {
    OptionValue::computed(move |ctx: &SyncContext| {
        let git = GitCli::new(ctx.repository_dir.clone());
        let base = format!("origin/{default_branch}");
        files.iter().any(|file| {
            git.diff_remote(&base, file)
                .is_ok_and(|ret| ret.success && !ret.output.trim().is_empty())
        })
    })
}
