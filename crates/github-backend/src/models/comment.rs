use serde::{Deserialize, Serialize};

use super::user::GitHubUser;

/// GitHub issue comment
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitHubComment {
    pub id: u64,
    pub body: Option<String>,
    pub user: Option<GitHubUser>,
    pub html_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating or editing a comment
#[derive(Debug, Clone, Serialize)]
pub struct GitHubCommentBody {
    pub body: String,
}
