//! Per-invocation git options, either fixed values or computed callbacks.
//!
//! Callbacks receive the lifecycle's readable state as an explicit
//! [`SyncContext`] parameter; anything else they need must be captured at
//! construction time.

use std::fmt;
use std::path::PathBuf;

/// Read-only view of lifecycle state handed to computed options and hooks.
#[derive(Debug, Clone)]
pub struct SyncContext {
    /// Project root.
    pub context: PathBuf,

    /// Logical name of this sync target.
    pub sync_tag: String,

    /// Workspace directory under the project root.
    pub workspace_dir: PathBuf,

    /// Working-copy directory under the workspace.
    pub repository_dir: PathBuf,

    /// Sync history log file.
    pub log_file: PathBuf,

    /// Remote repository URL.
    pub repository_url: String,

    /// Login name of the invoking user.
    pub user_name: String,

    /// Operating-system identifier, e.g. `"linux"`.
    pub os_platform: String,
}

/// A value that is either fixed or recomputed from the [`SyncContext`] at
/// every access.
pub enum OptionValue<T> {
    /// A constant supplied up front.
    Fixed(T),

    /// A callback evaluated anew at each point of use; nothing is memoized.
    Computed(Box<dyn Fn(&SyncContext) -> T + Send + Sync>),
}

impl<T> OptionValue<T> {
    /// Wrap a callback.
    pub fn computed(f: impl Fn(&SyncContext) -> T + Send + Sync + 'static) -> Self {
        Self::Computed(Box::new(f))
    }
}

impl<T: Clone> OptionValue<T> {
    /// Resolve the value against the current lifecycle state.
    pub fn resolve(&self, ctx: &SyncContext) -> T {
        match self {
            Self::Fixed(value) => value.clone(),
            Self::Computed(f) => f(ctx),
        }
    }
}

impl<T> From<T> for OptionValue<T> {
    fn from(value: T) -> Self {
        Self::Fixed(value)
    }
}

impl From<&str> for OptionValue<String> {
    fn from(value: &str) -> Self {
        Self::Fixed(value.to_string())
    }
}

impl<T: fmt::Debug> fmt::Debug for OptionValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(value) => f.debug_tuple("Fixed").field(value).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// The four per-invocation git options.
#[derive(Debug)]
pub struct GitOptions {
    /// Local branch name; also the prefix of the pushed remote branch.
    pub branch_name: OptionValue<String>,

    /// Commit message for published changes.
    pub commit_message: OptionValue<String>,

    /// Files staged before committing.
    pub add_files: OptionValue<Vec<String>>,

    /// Whether the working copy differs from the remote default branch.
    pub diff: OptionValue<bool>,
}

impl GitOptions {
    /// Bundle the four options.
    pub fn new(
        branch_name: impl Into<OptionValue<String>>,
        commit_message: impl Into<OptionValue<String>>,
        add_files: impl Into<OptionValue<Vec<String>>>,
        diff: impl Into<OptionValue<bool>>,
    ) -> Self {
        Self {
            branch_name: branch_name.into(),
            commit_message: commit_message.into(),
            add_files: add_files.into(),
            diff: diff.into(),
        }
    }
}
