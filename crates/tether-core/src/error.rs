//! Error types for tether-core.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during sync orchestration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The git command-line tool did not answer the version probe.
    #[error("git is not installed")]
    GitNotInstalled,

    /// A remote sync was requested before a local working copy exists.
    #[error("there is no git repo in workspace, please bootstrap and sync-local first")]
    NoLocalClone,

    /// The diff predicate found nothing to publish.
    #[error("there is no change in the workspace to sync")]
    NothingToSync,

    /// An orchestration step failed; the whole invocation stops here.
    #[error("{reason}")]
    StepFailed {
        /// Exit-code name or the underlying error's message.
        reason: String,
    },

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error (sync history record).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Git invocation error.
    #[error("git error: {0}")]
    Git(#[from] tether_git::Error),

    /// Hosting API error.
    #[error("hosting error: {0}")]
    Hosting(#[from] tether_hosting::Error),
}
