use std::time::Duration;
use ureq::Agent;

use crate::error::{GitHubError, Result};
use crate::models::*;

/// Public GitHub REST endpoint
pub const PUBLIC_API_URL: &str = "https://api.github.com";

const ENTERPRISE_API_PATH: &str = "/api/v3";

/// Page size used when scanning issue comments
pub const COMMENTS_PER_PAGE: usize = 100;

/// GitHub REST API client
pub struct GitHubClient {
    agent: Agent,
    base_url: String,
    token: String,
}

impl GitHubClient {
    /// Create a new GitHub client targeting api.github.com
    pub fn new(token: &str) -> Self {
        Self::with_base_url(PUBLIC_API_URL, token)
    }

    /// Create a client for a GitHub Enterprise Server instance
    ///
    /// Accepts either the instance root (`https://ghe.example.com`) or the
    /// full API root (`https://ghe.example.com/api/v3`).
    pub fn enterprise(base_url: &str, token: &str) -> Self {
        Self::with_base_url(&enterprise_api_url(base_url), token)
    }

    /// Create a new GitHub client with a custom base URL, used verbatim
    pub fn with_base_url(base_url: &str, token: &str) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(30)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a repo-scoped URL
    fn repo_url(&self, owner: &str, repo: &str, path: &str) -> String {
        format!("{}/repos/{}/{}{}", self.base_url, owner, repo, path)
    }

    /// Build the Authorization header value
    fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Check response status and return error if not successful
    fn check_response(
        &self,
        mut response: ureq::http::Response<ureq::Body>,
    ) -> Result<ureq::http::Response<ureq::Body>> {
        let status = response.status().as_u16();

        if (200..300).contains(&status) {
            return Ok(response);
        }

        // Detect rate limiting: 403 with x-ratelimit-remaining: 0
        if status == 403 {
            if let Some(remaining) = response.headers().get("x-ratelimit-remaining") {
                if remaining.to_str().unwrap_or("") == "0" {
                    return Err(GitHubError::RateLimited);
                }
            }
        }

        let body = response
            .body_mut()
            .read_to_string()
            .unwrap_or_else(|_| String::new());

        let message = if let Ok(error_response) = serde_json::from_str::<serde_json::Value>(&body) {
            error_response
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or(&body)
                .to_string()
        } else if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };

        match status {
            401 => Err(GitHubError::Unauthorized),
            404 => Err(GitHubError::NotFound(message)),
            _ => Err(GitHubError::Api { status, message }),
        }
    }

    // ==================== Comment Operations ====================

    /// List one page of comments on an issue or pull request, oldest first
    pub fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        per_page: usize,
        page: usize,
    ) -> Result<Vec<GitHubComment>> {
        let url = format!(
            "{}?per_page={}&page={}",
            self.repo_url(owner, repo, &format!("/issues/{}/comments", number)),
            per_page,
            page
        );

        let response = self
            .agent
            .get(&url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        let comments: Vec<GitHubComment> = response.body_mut().read_json()?;
        Ok(comments)
    }

    /// Add a comment to an issue or pull request
    pub fn add_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<GitHubComment> {
        let url = self.repo_url(owner, repo, &format!("/issues/{}/comments", number));

        let comment = GitHubCommentBody {
            body: body.to_string(),
        };

        let response = self
            .agent
            .post(&url)
            .header("Authorization", &self.auth_header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send_json(&comment)
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        let created: GitHubComment = response.body_mut().read_json()?;
        Ok(created)
    }

    /// Replace the body of an existing comment
    pub fn edit_comment(
        &self,
        owner: &str,
        repo: &str,
        comment_id: u64,
        body: &str,
    ) -> Result<GitHubComment> {
        let url = self.repo_url(owner, repo, &format!("/issues/comments/{}", comment_id));

        let update = GitHubCommentBody {
            body: body.to_string(),
        };

        let response = self
            .agent
            .patch(&url)
            .header("Authorization", &self.auth_header())
            .header("Content-Type", "application/json")
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send_json(&update)
            .map_err(GitHubError::Http)?;

        let mut response = self.check_response(response)?;
        let updated: GitHubComment = response.body_mut().read_json()?;
        Ok(updated)
    }

    /// Delete a comment by id
    pub fn remove_comment(&self, owner: &str, repo: &str, comment_id: u64) -> Result<()> {
        let url = self.repo_url(owner, repo, &format!("/issues/comments/{}", comment_id));

        let response = self
            .agent
            .delete(&url)
            .header("Authorization", &self.auth_header())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .call()
            .map_err(GitHubError::Http)?;

        self.check_response(response)?;
        Ok(())
    }
}

/// Normalise a GitHub Enterprise base URL to its REST API root
pub fn enterprise_api_url(base_url: &str) -> String {
    let trimmed = base_url.trim().trim_end_matches('/');
    let host = trimmed
        .split_once("://")
        .map_or(trimmed, |(_, rest)| rest)
        .split('/')
        .next()
        .unwrap_or_default();

    if trimmed.ends_with(ENTERPRISE_API_PATH) || host.starts_with("api.") {
        trimmed.to_string()
    } else {
        format!("{}{}", trimmed, ENTERPRISE_API_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enterprise_url_gets_api_suffix() {
        assert_eq!(
            enterprise_api_url("https://ghe.example.com"),
            "https://ghe.example.com/api/v3"
        );
        assert_eq!(
            enterprise_api_url("https://ghe.example.com/"),
            "https://ghe.example.com/api/v3"
        );
    }

    #[test]
    fn enterprise_url_with_api_suffix_is_kept() {
        assert_eq!(
            enterprise_api_url("https://ghe.example.com/api/v3/"),
            "https://ghe.example.com/api/v3"
        );
    }

    #[test]
    fn api_host_is_kept() {
        assert_eq!(
            enterprise_api_url("https://api.ghe.example.com"),
            "https://api.ghe.example.com"
        );
    }

    #[test]
    fn public_client_targets_api_github_com() {
        assert_eq!(GitHubClient::new("t").base_url(), PUBLIC_API_URL);
    }
}
