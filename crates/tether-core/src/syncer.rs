//! The sync lifecycle: bootstrap, reset, local sync, remote sync.

use std::fs;
use std::path::Path;

use chrono::Utc;

use tether_git::{DEFAULT_BRANCH, GitShell};
use tether_hosting::HostingApi;

use crate::error::{Error, Result};
use crate::hooks::{HookStage, Hooks};
use crate::options::{GitOptions, SyncContext};
use crate::progress;
use crate::step::{run_step, run_step_async};
use crate::workspace::{self, SyncHistory, WorkspaceOptions, WorkspacePaths};

/// Everything needed to construct a [`Syncer`].
#[derive(Debug)]
pub struct SyncerOptions {
    /// Workspace layout and remote URL.
    pub workspace: WorkspaceOptions,

    /// Branch, commit message, staged files and diff predicate.
    pub git_options: GitOptions,

    /// Callbacks around each lifecycle stage.
    pub hooks: Hooks,

    /// Remote branch pulled from and reset against.
    pub default_branch: String,

    /// Ask the hosting service to open a merge request after a push.
    pub open_merge_request: bool,
}

impl SyncerOptions {
    /// Options with no hooks, the default branch and no merge request.
    #[must_use]
    pub fn new(workspace: WorkspaceOptions, git_options: GitOptions) -> Self {
        Self {
            workspace,
            git_options,
            hooks: Hooks::default(),
            default_branch: DEFAULT_BRANCH.to_string(),
            open_merge_request: false,
        }
    }
}

/// The stateful sync orchestrator.
///
/// Owns its configuration and derived paths; the git and hosting
/// collaborators are injected and treated as stateless. The two state
/// flags, [`has_bootstrap`](Self::has_bootstrap) and
/// [`has_init_git`](Self::has_init_git), are re-read from the filesystem
/// on every access so external changes are always reflected.
pub struct Syncer<G, H> {
    paths: WorkspacePaths,
    options: GitOptions,
    hooks: Hooks,
    default_branch: String,
    open_merge_request: bool,
    user_name: String,
    os_platform: String,
    git: G,
    hosting: H,
}

impl<G: GitShell, H: HostingApi> Syncer<G, H> {
    /// Build a syncer, verifying the git tool answered its version probe.
    ///
    /// # Errors
    /// Returns [`Error::GitNotInstalled`] when the probe failed.
    pub fn new(options: SyncerOptions, git: G, hosting: H) -> Result<Self> {
        if !git.installed() {
            return Err(Error::GitNotInstalled);
        }

        Ok(Self {
            paths: WorkspacePaths::derive(&options.workspace),
            options: options.git_options,
            hooks: options.hooks,
            default_branch: options.default_branch,
            open_merge_request: options.open_merge_request,
            user_name: user_name(),
            os_platform: std::env::consts::OS.to_string(),
            git,
            hosting,
        })
    }

    /// The derived workspace paths.
    #[must_use]
    pub fn paths(&self) -> &WorkspacePaths {
        &self.paths
    }

    /// Read-only view handed to computed options and hooks.
    #[must_use]
    pub fn context(&self) -> SyncContext {
        SyncContext {
            context: self.paths.context.clone(),
            sync_tag: self.paths.sync_tag.clone(),
            workspace_dir: self.paths.workspace_dir.clone(),
            repository_dir: self.paths.repository_dir.clone(),
            log_file: self.paths.log_file.clone(),
            repository_url: self.paths.repository_url.clone(),
            user_name: self.user_name.clone(),
            os_platform: self.os_platform.clone(),
        }
    }

    /// Whether bootstrap has completed for this workspace.
    #[must_use]
    pub fn has_bootstrap(&self) -> bool {
        self.paths.log_file.exists()
    }

    /// Whether a git working copy exists in the workspace.
    #[must_use]
    pub fn has_init_git(&self) -> bool {
        self.paths.repository_dir.exists() && self.paths.repository_dir.join(".git").exists()
    }

    /// Create the workspace: the working-copy directory, the project's
    /// ignore entries and the history log.
    ///
    /// Idempotent: a second call leaves the ignore file and the log's
    /// `createTime` unchanged.
    ///
    /// # Errors
    /// Returns error if a directory or file cannot be created.
    pub async fn bootstrap(&self) -> Result<()> {
        let ctx = self.context();
        self.hooks.fire_before(HookStage::Init, &ctx).await;

        progress::info("create workspace...");
        fs::create_dir_all(&self.paths.repository_dir)?;

        progress::info("update ignore file...");
        workspace::update_ignore_file(&self.paths)?;

        progress::info("create log file...");
        SyncHistory::write_initial(&self.paths.log_file)?;

        self.hooks.fire_after(HookStage::Init, &ctx).await;
        Ok(())
    }

    /// Delete the working copy and the history log.
    ///
    /// Targets that are already absent are skipped, not errors.
    ///
    /// # Errors
    /// Returns error if an existing target cannot be removed.
    pub async fn reset(&self) -> Result<()> {
        let ctx = self.context();
        self.hooks.fire_before(HookStage::Reset, &ctx).await;

        remove_dir_if_present(&self.paths.repository_dir)?;
        remove_file_if_present(&self.paths.log_file)?;

        self.hooks.fire_after(HookStage::Reset, &ctx).await;
        Ok(())
    }

    /// Clone or refresh the local working copy.
    ///
    /// Exactly one of two sequences runs, decided by
    /// [`has_init_git`](Self::has_init_git) at call time: an existing
    /// working copy is refreshed (fetch, hard reset, pull), a missing one
    /// is initialized (init, remote add, checkout, pull).
    ///
    /// # Errors
    /// Returns [`Error::StepFailed`] at the first failing git action.
    pub async fn sync_local(&self) -> Result<()> {
        let ctx = self.context();
        self.hooks.fire_before(HookStage::SyncLocal, &ctx).await;

        if self.has_init_git() {
            self.refresh_local()?;
        } else {
            self.init_local(&ctx)?;
        }

        self.hooks.fire_after(HookStage::SyncLocal, &ctx).await;
        Ok(())
    }

    /// Refresh the working copy and publish local changes to a freshly
    /// named remote branch.
    ///
    /// # Errors
    /// Returns [`Error::NoLocalClone`] when no working copy exists yet,
    /// [`Error::NothingToSync`] when the diff predicate reports no
    /// change, and [`Error::StepFailed`] at the first failing git action.
    pub async fn sync_remote(&self) -> Result<()> {
        let ctx = self.context();
        self.hooks.fire_before(HookStage::SyncRemote, &ctx).await;

        // Publishing refreshes the clone first, so one must exist.
        if !self.has_init_git() {
            return Err(Error::NoLocalClone);
        }

        self.refresh_local()?;

        if !self.options.diff.resolve(&ctx) {
            return Err(Error::NothingToSync);
        }

        // Suffix with epoch millis so repeated runs never collide.
        let branch = self.options.branch_name.resolve(&ctx);
        let remote_branch = format!("{branch}-{}", Utc::now().timestamp_millis());

        self.publish(&ctx, &branch, &remote_branch)?;

        if self.open_merge_request {
            run_step_async("create merge request", async {
                self.hosting
                    .create_merge_request(&remote_branch, &self.default_branch)
                    .await
                    .map(|mr| Some(mr.web_url))
            })
            .await?;
        }

        self.hooks.fire_after(HookStage::SyncRemote, &ctx).await;
        Ok(())
    }

    /// The "with init" sequence: init, remote add, checkout, pull.
    fn init_local(&self, ctx: &SyncContext) -> Result<()> {
        let branch = self.options.branch_name.resolve(ctx);

        run_step("git init", || self.git.init())?;
        run_step("git set remote", || {
            self.git.set_remote(&self.paths.repository_url)
        })?;
        run_step(&format!("git checkout branch [{branch}]"), || {
            self.git.checkout_new(&branch)
        })?;
        run_step(&format!("git pull from {}", self.default_branch), || {
            self.git.pull(&self.default_branch)
        })?;
        Ok(())
    }

    /// The "without init" sequence: fetch, hard reset, pull.
    fn refresh_local(&self) -> Result<()> {
        run_step("git fetch all", || self.git.fetch_all())?;
        run_step(&format!("git reset to {}", self.default_branch), || {
            self.git
                .reset_hard(&format!("origin/{}", self.default_branch))
        })?;
        run_step(&format!("git pull from {}", self.default_branch), || {
            self.git.pull(&self.default_branch)
        })?;
        Ok(())
    }

    /// Stage, commit and push to the freshly named remote branch.
    fn publish(&self, ctx: &SyncContext, branch: &str, remote_branch: &str) -> Result<()> {
        let files = self.options.add_files.resolve(ctx);
        let message = self.options.commit_message.resolve(ctx);

        run_step("git add", || self.git.add(&files))?;
        run_step("git commit", || self.git.commit(&message))?;
        run_step("git push", || {
            self.git.push(&format!("{branch}:{remote_branch}"))
        })?;
        Ok(())
    }
}

/// Login name of the invoking user, best effort.
fn user_name() -> String {
    std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_default()
}

fn remove_dir_if_present(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

fn remove_file_if_present(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}
