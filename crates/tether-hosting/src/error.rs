//! Error types for tether-hosting.

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during hosting-service API operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Authentication failed or token rejected.
    #[error("hosting authentication failed - check the configured token")]
    AuthenticationFailed,

    /// API rate limit exceeded.
    #[error("hosting API rate limit exceeded - wait and try again")]
    RateLimited,

    /// API error with status code.
    #[error("hosting API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Network error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("failed to parse hosting response: {0}")]
    Parse(#[from] serde_json::Error),
}
