//! GitHub REST client for the repository pull request listing.

use super::{PullRequestSource, SourceError};
use crate::types::records::{pull_requests_from_values, PullRequestRecord};
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

pub struct GithubClient {
    http: Client,
    api_base: String,
    owner: String,
    repo: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(api_base: &str, owner: &str, repo: &str, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            owner: owner.to_string(),
            repo: repo.to_string(),
            token: token.filter(|token| !token.trim().is_empty()),
        }
    }

    fn pulls_url(&self) -> String {
        format!("{}/repos/{}/{}/pulls", self.api_base, self.owner, self.repo)
    }

    fn handle_response(&self, response: Response) -> Result<Vec<serde_json::Value>, SourceError> {
        let status = response.status();

        if status.is_success() {
            let body: serde_json::Value = response
                .json()
                .map_err(|e| SourceError::Decode(e.to_string()))?;
            match body {
                serde_json::Value::Array(items) => Ok(items),
                other => Err(SourceError::Decode(format!(
                    "expected a JSON array, got {}",
                    json_kind(&other)
                ))),
            }
        } else if matches!(status.as_u16(), 403 | 429) {
            Err(SourceError::RateLimited {
                status: status.as_u16(),
            })
        } else if status.as_u16() == 404 {
            Err(SourceError::NotFound(format!("{}/{}", self.owner, self.repo)))
        } else {
            Err(SourceError::Api {
                status: status.as_u16(),
            })
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

impl PullRequestSource for GithubClient {
    fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<PullRequestRecord>, SourceError> {
        let mut request = self
            .http
            .get(self.pulls_url())
            .query(&[
                ("state", "all".to_string()),
                ("per_page", per_page.to_string()),
                ("page", page.to_string()),
            ])
            .header(ACCEPT, ACCEPT_GITHUB_JSON)
            .header(
                USER_AGENT,
                concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
            );
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        tracing::debug!(page, per_page, url = %self.pulls_url(), "requesting pull requests");
        let response = request.send()?;
        let items = self.handle_response(response)?;
        Ok(pull_requests_from_values(items))
    }
}
