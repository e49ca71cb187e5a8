use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use reqwest::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;

#[derive(Deserialize)]
struct UserResponse {
    created_at: DateTime<Utc>,
}

#[derive(Clone)]
pub struct GithubClient {
    api_base: String,
    token: Option<String>,
    http: Client,
}

impl GithubClient {
    /// Create a GitHub REST client for the configured API base.
    /// Requests are anonymous unless a token is configured.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            api_base: config.api_base.clone(),
            token: config.token.clone(),
            http,
        })
    }

    /// Low-level GET returning the JSON body. Any transport error or non-2xx
    /// status is returned as an error without retrying.
    async fn get(&self, path: &str) -> Result<Value> {
        let url = format!("{}{path}", self.api_base);
        tracing::debug!(%url, "GET");

        let mut req = self
            .http
            .get(&url)
            .header(USER_AGENT, "member-since")
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .with_context(|| format!("Network error requesting {url}"))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("GitHub API returned HTTP {} for {url}: {body}", status.as_u16());
        }

        resp.json()
            .await
            .with_context(|| format!("Failed to parse JSON from {url}"))
    }

    /// Account creation time of `username`.
    pub async fn join_date(&self, username: &str) -> Result<DateTime<Utc>> {
        let path = format!("/users/{}", urlencoding::encode(username));
        let json = self.get(&path).await?;
        let parsed: UserResponse = serde_json::from_value(json)
            .with_context(|| format!("Missing or malformed created_at for user {username}"))?;
        Ok(parsed.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use httpmock::prelude::*;

    fn client_for(server: &MockServer, token: Option<&str>) -> GithubClient {
        let mut config =
            Config::new("octocat", "README.md").with_api_base(server.base_url());
        if let Some(token) = token {
            config = config.with_token(token);
        }
        GithubClient::new(&config).unwrap()
    }

    fn joined_2011() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36).unwrap()
    }

    #[tokio::test]
    async fn parses_created_at() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/users/octocat")
                    .header("user-agent", "member-since");
                then.status(200).json_body(serde_json::json!({
                    "login": "octocat",
                    "created_at": "2011-01-25T18:44:36Z"
                }));
            })
            .await;

        let client = client_for(&server, None);
        let joined = client.join_date("octocat").await.unwrap();

        mock.assert_async().await;
        assert_eq!(joined, joined_2011());
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/users/octocat")
                    .header("authorization", "Bearer ghp_secret");
                then.status(200).json_body(serde_json::json!({
                    "created_at": "2011-01-25T18:44:36Z"
                }));
            })
            .await;

        let client = client_for(&server, Some("ghp_secret"));
        client.join_date("octocat").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn username_is_encoded_into_a_single_path_segment() {
        let server = MockServer::start_async().await;
        let encoded = server
            .mock_async(|when, then| {
                when.method(GET).path("/users/octo%2Fcat%3Fx%3D1");
                then.status(200).json_body(serde_json::json!({
                    "created_at": "2011-01-25T18:44:36Z"
                }));
            })
            .await;
        let split = server
            .mock_async(|when, then| {
                when.method(GET).path("/users/octo/cat");
                then.status(200).json_body(serde_json::json!({
                    "created_at": "1999-01-01T00:00:00Z"
                }));
            })
            .await;

        let client = client_for(&server, None);
        let joined = client.join_date("octo/cat?x=1").await.unwrap();

        encoded.assert_async().await;
        split.assert_hits_async(0).await;
        assert_eq!(joined, joined_2011());
    }

    #[tokio::test]
    async fn non_success_status_fails_without_retry() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/users/octocat");
                then.status(503).body("unavailable");
            })
            .await;

        let client = client_for(&server, None);
        let err = client.join_date("octocat").await.unwrap_err();

        mock.assert_hits_async(1).await;
        assert!(err.to_string().contains("HTTP 503"), "{err:#}");
    }

    #[tokio::test]
    async fn missing_created_at_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/octocat");
                then.status(200).json_body(serde_json::json!({
                    "login": "octocat"
                }));
            })
            .await;

        let client = client_for(&server, None);
        let err = client.join_date("octocat").await.unwrap_err();

        assert!(format!("{err:#}").contains("created_at"), "{err:#}");
    }

    #[tokio::test]
    async fn malformed_created_at_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/users/octocat");
                then.status(200).json_body(serde_json::json!({
                    "created_at": "last tuesday"
                }));
            })
            .await;

        let client = client_for(&server, None);
        assert!(client.join_date("octocat").await.is_err());
    }
}
