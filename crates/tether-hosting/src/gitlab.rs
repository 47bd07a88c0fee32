//! GitLab API client.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::response::read_json;
use crate::traits::HostingApi;
use crate::types::MergeRequest;

/// Internal representation of a merge request from the GitLab API.
#[derive(serde::Deserialize)]
struct ApiMergeRequest {
    iid: u64,
    title: String,
    web_url: String,
    source_branch: String,
    target_branch: String,
}

impl ApiMergeRequest {
    fn into_merge_request(self) -> MergeRequest {
        MergeRequest {
            number: self.iid,
            title: self.title,
            web_url: self.web_url,
            source_branch: self.source_branch,
            target_branch: self.target_branch,
        }
    }
}

/// GitLab API client.
pub struct GitLabClient {
    client: Client,
    base_url: String,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: SecretString,
    /// Project path (`group/repo`) or numeric project id.
    project: String,
}

impl GitLabClient {
    /// Default GitLab host.
    pub const DEFAULT_HOST: &'static str = "https://gitlab.com";

    /// Create a new GitLab client against the default host.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(token: SecretString, project: impl Into<String>) -> Result<Self> {
        Self::with_host(token, project, Self::DEFAULT_HOST)
    }

    /// Create a new GitLab client with a custom host (for self-managed
    /// instances).
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn with_host(
        token: SecretString,
        project: impl Into<String>,
        host: impl Into<String>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("tether-cli"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: host.into(),
            token,
            project: project.into(),
        })
    }

    /// Project path with `/` escaped, as GitLab expects in URLs.
    fn project_id(&self) -> String {
        self.project.replace('/', "%2F")
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .send()
            .await?;

        read_json(response).await
    }

    async fn post_json<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .header(
                AUTHORIZATION,
                format!("Bearer {}", self.token.expose_secret()),
            )
            .json(body)
            .send()
            .await?;

        read_json(response).await
    }

    /// Open a merge request from `source` into `target`.
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn create_merge_request(&self, source: &str, target: &str) -> Result<MergeRequest> {
        let body = serde_json::json!({
            "source_branch": source,
            "target_branch": target,
            "title": format!("Sync {source} into {target}"),
        });

        let api_mr: ApiMergeRequest = self
            .post_json(
                &format!("/api/v4/projects/{}/merge_requests", self.project_id()),
                &body,
            )
            .await?;

        Ok(api_mr.into_merge_request())
    }
}

impl std::fmt::Debug for GitLabClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLabClient")
            .field("base_url", &self.base_url)
            .field("project", &self.project)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl HostingApi for GitLabClient {
    async fn create_merge_request(&self, source: &str, target: &str) -> Result<MergeRequest> {
        self.create_merge_request(source, target).await
    }

    async fn get(&self, path: &str) -> Result<Value> {
        self.get_json(path).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value> {
        self.post_json(path, body).await
    }
}
