//! Conversions between GitHub API models and comment-core types

use chrono::{DateTime, Utc};
use comment_core::RemoteComment;

use crate::models::GitHubComment;

impl From<GitHubComment> for RemoteComment {
    fn from(c: GitHubComment) -> Self {
        Self {
            id: c.id,
            body: c.body.unwrap_or_default(),
            author: c.user.map(|u| u.login),
            html_url: c.html_url,
            created: parse_github_datetime(&c.created_at),
            updated: parse_github_datetime(&c.updated_at),
        }
    }
}

/// Parse a GitHub ISO 8601 datetime string
fn parse_github_datetime(dt: &str) -> Option<DateTime<Utc>> {
    chrono::DateTime::parse_from_rfc3339(dt)
        .ok()
        .map(|d| d.with_timezone(&Utc))
}
