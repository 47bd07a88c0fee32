//! Leveled notices surfaced to the operator.
//!
//! Components never call `process::exit`; they return [`Error`] values.
//! The binary converts the error into a `Notice`, prints each message at
//! its severity, and exits with the notice's code. Centralizing exit
//! semantics at the top level keeps the orchestration core testable.

use crate::error::Error;

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal condition.
    Error,
    /// Expected early stop, e.g. nothing to sync.
    Warning,
}

/// One or more messages plus the exit code the process should end with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Message severity.
    pub severity: Severity,

    /// Messages printed in order before the process exits.
    pub messages: Vec<String>,

    /// Exit code for the process.
    pub exit_code: i32,
}

impl Notice {
    /// An error-level notice with exit code 1.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            messages: vec![message.into()],
            exit_code: 1,
        }
    }

    /// A warning-level notice with exit code 0.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            messages: vec![message.into()],
            exit_code: 0,
        }
    }
}

impl From<&Error> for Notice {
    fn from(err: &Error) -> Self {
        match err {
            // The one conceptually-non-fatal stop: the workspace matched
            // the remote, so there was nothing to publish.
            Error::NothingToSync => Self::warning(err.to_string()),
            _ => Self::error(err.to_string()),
        }
    }
}
