//! # tether-hosting
//!
//! Hosting-service API integration for tether. Provides the [`HostingApi`]
//! trait, GitLab and GitHub clients built on `reqwest`, and the
//! [`HostingServer`] factory that selects a client from a configuration
//! tag.
//!
//! # Security
//!
//! Authentication tokens are stored using `SecretString` which
//! automatically zeroizes memory when dropped.

mod error;
mod github;
mod gitlab;
mod response;
mod server;
mod traits;
mod types;

pub use error::{Error, Result};
pub use github::GitHubClient;
pub use gitlab::GitLabClient;
pub use server::{HostingServer, ServerKind, ServerOptions};
pub use traits::HostingApi;
pub use types::MergeRequest;
// Re-export SecretString for constructing ServerOptions
pub use secrecy::SecretString;
