//! Git invocation via `std::process::Command`.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::traits::GitShell;

/// Outcome of one git invocation, with combined stdout and stderr.
#[derive(Debug, Clone)]
pub struct ExecResult {
    /// Whether the process exited with status zero.
    pub success: bool,

    /// Exit code, if the process exited normally.
    pub code: Option<i32>,

    /// Combined stdout and stderr, in that order.
    pub output: String,
}

impl ExecResult {
    /// Human-readable reason for a failed invocation.
    #[must_use]
    pub fn failure_reason(&self) -> String {
        self.code.map_or_else(
            || "git terminated by signal".to_string(),
            |code| format!("git exited with code {code}"),
        )
    }
}

/// Runs git subcommands against a fixed working directory.
///
/// The `git --version` probe happens once at construction; a failed probe
/// is recorded rather than fatal so the lifecycle constructor can decide
/// how to surface it.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
    version: Option<String>,
}

impl GitCli {
    /// Create a shell for `workdir`, probing `git --version`.
    ///
    /// The working directory does not need to exist yet; it is only
    /// resolved when a subcommand runs.
    #[must_use]
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        let version = Command::new("git")
            .arg("--version")
            .output()
            .ok()
            .filter(|out| out.status.success())
            .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string());

        Self {
            workdir: workdir.into(),
            version,
        }
    }

    /// The directory subcommands run in.
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    fn run(&self, args: &[&str]) -> Result<ExecResult> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .map_err(|source| Error::Spawn {
                subcommand: args.join(" "),
                source,
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ExecResult {
            success: output.status.success(),
            code: output.status.code(),
            output: combined,
        })
    }
}

impl GitShell for GitCli {
    fn installed(&self) -> bool {
        self.version.is_some()
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn init(&self) -> Result<ExecResult> {
        self.run(&["init"])
    }

    fn set_remote(&self, url: &str) -> Result<ExecResult> {
        self.run(&["remote", "add", "origin", url])
    }

    fn checkout_new(&self, branch: &str) -> Result<ExecResult> {
        self.run(&["checkout", "-b", branch])
    }

    fn pull(&self, branch: &str) -> Result<ExecResult> {
        self.run(&["pull", "origin", branch])
    }

    fn add(&self, files: &[String]) -> Result<ExecResult> {
        let mut args = vec!["add"];
        args.extend(files.iter().map(String::as_str));
        self.run(&args)
    }

    fn commit(&self, message: &str) -> Result<ExecResult> {
        self.run(&["commit", "-m", message])
    }

    fn push(&self, refspec: &str) -> Result<ExecResult> {
        self.run(&["push", "origin", refspec])
    }

    fn diff_remote(&self, base: &str, file: &str) -> Result<ExecResult> {
        self.run(&["diff", base, "--", file])
    }

    fn fetch_all(&self) -> Result<ExecResult> {
        self.run(&["fetch", "--all"])
    }

    fn reset_hard(&self, reference: &str) -> Result<ExecResult> {
        self.run(&["reset", "--hard", reference])
    }
}
