//! Process-step runners, one orchestration step each.
//!
//! A step logs `"{label}..."` before running and `"{label} success"` after.
//! Any failure - a spawn error or a non-zero exit - becomes
//! [`Error::StepFailed`], which aborts the caller's whole sequence. Steps
//! are never retried.

use std::future::Future;

use tether_git::ExecResult;

use crate::error::{Error, Result};
use crate::progress;

/// Run one synchronous step wrapping a git invocation.
///
/// # Errors
/// Returns [`Error::StepFailed`] when the invocation could not run or
/// exited non-zero; the reason is the exit-code name or the underlying
/// error's message.
pub fn run_step(label: &str, op: impl FnOnce() -> tether_git::Result<ExecResult>) -> Result<()> {
    progress::info(&format!("{label}..."));

    match op() {
        Ok(ret) if ret.success => {}
        Ok(ret) => {
            return Err(Error::StepFailed {
                reason: ret.failure_reason(),
            });
        }
        Err(err) => {
            return Err(Error::StepFailed {
                reason: err.to_string(),
            });
        }
    }

    progress::success(&format!("{label} success"));
    Ok(())
}

/// Run one asynchronous step.
///
/// On success, the operation's combined output (if it produced any) is
/// printed as plain log output before the success line.
///
/// # Errors
/// Returns [`Error::StepFailed`] when the future resolves to an error.
pub async fn run_step_async<F, E>(label: &str, fut: F) -> Result<()>
where
    F: Future<Output = std::result::Result<Option<String>, E>>,
    E: std::fmt::Display,
{
    progress::info(&format!("{label}..."));

    match fut.await {
        Ok(Some(output)) => progress::plain(&output),
        Ok(None) => {}
        Err(err) => {
            return Err(Error::StepFailed {
                reason: err.to_string(),
            });
        }
    }

    progress::success(&format!("{label} success"));
    Ok(())
}
