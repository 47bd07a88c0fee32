//! GitHub API client.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::Result;
use crate::response::read_json;
use crate::traits::HostingApi;
use crate::types::MergeRequest;

/// Internal representation of a pull request from the GitHub API.
#[derive(serde::Deserialize)]
struct ApiPullRequest {
    number: u64,
    title: String,
    html_url: String,
    head: ApiBranch,
    base: ApiBranch,
}

/// Internal representation of a branch ref from the GitHub API.
#[derive(serde::Deserialize)]
struct ApiBranch {
    #[serde(rename = "ref")]
    ref_name: String,
}

impl ApiPullRequest {
    fn into_merge_request(self) -> MergeRequest {
        MergeRequest {
            number: self.number,
            title: self.title,
            web_url: self.html_url,
            source_branch: self.head.ref_name,
            target_branch: self.base.ref_name,
        }
    }
}

/// GitHub API client.
pub struct GitHubClient {
    client: Client,
    base_url: String,
    /// Token stored as `SecretString` for automatic zeroization on drop.
    token: SecretString,
    /// Repository path in `owner/repo` form.
    project: String,
}

impl GitHubClient {
    /// Default GitHub API URL.
    pub const DEFAULT_API_URL: &'static str = "https://api.github.com";

    /// Create a new GitHub client.
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(token: SecretString, project: impl Into<String>) -> Result<Self> {
        Self::with_base_url(token, project, Self::DEFAULT_API_URL)
    }

    /// Create a new GitHub client with a custom API URL (for GitHub
    /// Enterprise).
    ///
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn with_base_url(
        token: SecretString,
        project: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("tether-cli"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token,
            project: project.into(),
        })
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

    /// Open a pull request from `source` into `target`.
    ///
    /// # Errors
    /// Returns error if the API call fails.
    pub async fn create_merge_request(&self, source: &str, target: &str) -> Result<MergeRequest> {
        let body = serde_json::json!({
            "title": format!("Sync {source} into {target}"),
            "head": source,
            "base": target,
        });

        let api_pr: ApiPullRequest = self
            .post_json(&format!("/repos/{}/pulls", self.project), &body)
            .await?;

        Ok(api_pr.into_merge_request())
    }
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .field("project", &self.project)
            .field("token", &"[redacted]")
            .finish_non_exhaustive()
    }
}

impl HostingApi for GitHubClient {
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::Error;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GitHubClient {
        GitHubClient::with_base_url(SecretString::from("test-token"), "owner/repo", base_url)
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_merge_request_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/pulls"))
            .and(header("authorization", "Bearer test-token"))
            .and(body_partial_json(serde_json::json!({
                "head": "feature-sync-1700000000000",
                "base": "master"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
                "number": 12,
                "title": "Sync feature-sync-1700000000000 into master",
                "html_url": "https://github.com/owner/repo/pull/12",
                "head": { "ref": "feature-sync-1700000000000" },
                "base": { "ref": "master" }
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let mr = client
            .create_merge_request("feature-sync-1700000000000", "master")
            .await
            .unwrap();

        assert_eq!(mr.number, 12);
        assert_eq!(mr.target_branch, "master");
    }

    #[tokio::test]
    async fn test_rate_limited_via_header() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rate_limit"))
            .respond_with(
                ResponseTemplate::new(403)
                    .insert_header("x-ratelimit-remaining", "0")
                    .set_body_json(serde_json::json!({
                        "message": "API rate limit exceeded"
                    })),
            )
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.get_json::<Value>("/rate_limit").await;

        assert!(matches!(result, Err(Error::RateLimited)));
    }

    #[tokio::test]
    async fn test_api_error_carries_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/owner/repo/pulls"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Validation Failed"
            })))
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server.uri());
        let result = client.create_merge_request("feature", "master").await;

        assert!(matches!(result, Err(Error::ApiError { status: 422, .. })));
    }
}
