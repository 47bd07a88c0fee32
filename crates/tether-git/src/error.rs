//! Error types for tether-git.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when invoking git.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The `git` process could not be spawned at all.
    ///
    /// A started-but-failed invocation is not an error; it is reported
    /// through [`ExecResult`](crate::ExecResult) instead.
    #[error("failed to run `git {subcommand}`: {source}")]
    Spawn {
        /// The subcommand and arguments that were attempted.
        subcommand: String,
        /// The underlying spawn failure.
        #[source]
        source: std::io::Error,
    },
}
