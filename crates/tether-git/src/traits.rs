//! Trait abstraction for git subcommand execution.
//!
//! This module defines the `GitShell` trait which abstracts the git
//! command-line tool, enabling dependency injection and testability.

use crate::error::Result;
use crate::shell::ExecResult;

/// Trait for running git subcommands against a working directory.
///
/// This trait abstracts the git CLI, allowing for:
/// - Dependency injection in the sync lifecycle
/// - Mock implementations that record invocations for testing
/// - Alternative implementations (e.g., dry-run mode)
///
/// Every operation returns an [`ExecResult`] describing one invocation's
/// outcome; only a failure to spawn the process at all is an `Err`.
#[allow(clippy::missing_errors_doc)]
pub trait GitShell {
    /// Whether the `git` binary answered the version probe.
    fn installed(&self) -> bool;

    /// The probed `git --version` output, if the probe succeeded.
    fn version(&self) -> Option<&str>;

    /// `git init`
    fn init(&self) -> Result<ExecResult>;

    /// `git remote add origin <url>`
    fn set_remote(&self, url: &str) -> Result<ExecResult>;

    /// `git checkout -b <branch>`
    fn checkout_new(&self, branch: &str) -> Result<ExecResult>;

    /// `git pull origin <branch>`
    fn pull(&self, branch: &str) -> Result<ExecResult>;

    /// `git add <files...>`
    fn add(&self, files: &[String]) -> Result<ExecResult>;

    /// `git commit -m <message>`
    fn commit(&self, message: &str) -> Result<ExecResult>;

    /// `git push origin <refspec>`
    fn push(&self, refspec: &str) -> Result<ExecResult>;

    /// `git diff <base> -- <file>`
    fn diff_remote(&self, base: &str, file: &str) -> Result<ExecResult>;

    /// `git fetch --all`
    fn fetch_all(&self) -> Result<ExecResult>;

    /// `git reset --hard <ref>`
    fn reset_hard(&self, reference: &str) -> Result<ExecResult>;
}
