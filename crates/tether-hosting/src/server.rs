//! Server-kind selection and the hosting factory.

use secrecy::SecretString;
use serde_json::Value;

use crate::error::Result;
use crate::github::GitHubClient;
use crate::gitlab::GitLabClient;
use crate::traits::HostingApi;
use crate::types::MergeRequest;

/// Supported hosting-service kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerKind {
    /// GitLab (the default).
    GitLab,
    /// GitHub.
    GitHub,
}

impl ServerKind {
    /// Parse a configuration tag. Unrecognized tags fall back to GitLab.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "github" => Self::GitHub,
            _ => Self::GitLab,
        }
    }
}

/// Configuration for selecting and building a hosting client.
#[derive(Debug)]
pub struct ServerOptions {
    /// Server-kind tag, e.g. `"gitlab"` or `"github"`.
    pub kind: String,

    /// Service host; each client's default is used when `None`.
    pub host: Option<String>,

    /// Authentication token.
    pub token: SecretString,

    /// Repository identifier (`group/repo` for GitLab, `owner/repo` for
    /// GitHub).
    pub project: String,
}

/// A hosting client selected from a [`ServerOptions`] tag.
#[derive(Debug)]
pub enum HostingServer {
    /// GitLab backend.
    GitLab(GitLabClient),
    /// GitHub backend.
    GitHub(GitHubClient),
}

impl HostingServer {
    /// Build the client named by the options' kind tag.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn create(options: ServerOptions) -> Result<Self> {
        let ServerOptions {
            kind,
            host,
            token,
            project,
        } = options;

        match ServerKind::from_tag(&kind) {
            ServerKind::GitLab => {
                let client = match host {
                    Some(host) => GitLabClient::with_host(token, project, host)?,
                    None => GitLabClient::new(token, project)?,
                };
                Ok(Self::GitLab(client))
            }
            ServerKind::GitHub => {
                let client = match host {
                    Some(host) => GitHubClient::with_base_url(token, project, host)?,
                    None => GitHubClient::new(token, project)?,
                };
                Ok(Self::GitHub(client))
            }
        }
    }
}

impl HostingApi for HostingServer {
    async fn create_merge_request(&self, source: &str, target: &str) -> Result<MergeRequest> {
        match self {
            Self::GitLab(client) => client.create_merge_request(source, target).await,
            Self::GitHub(client) => client.create_merge_request(source, target).await,
        }
    }

    async fn get(&self, path: &str) -> Result<Value> {
        match self {
            Self::GitLab(client) => HostingApi::get(client, path).await,
            Self::GitHub(client) => HostingApi::get(client, path).await,
        }
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        match self {
            Self::GitLab(client) => HostingApi::post(client, path, body).await,
            Self::GitHub(client) => HostingApi::post(client, path, body).await,
        }
    }
}
