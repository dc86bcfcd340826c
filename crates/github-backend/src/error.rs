use comment_core::CommentError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitHubError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Rate limited")]
    RateLimited,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GitHubError>;

impl From<GitHubError> for CommentError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::Http(e) => CommentError::Http(e.to_string()),
            GitHubError::Parse(e) => CommentError::Parse(e.to_string()),
            GitHubError::NotFound(what) => CommentError::NotFound(what),
            GitHubError::Unauthorized => CommentError::Unauthorized,
            GitHubError::RateLimited => CommentError::Api {
                status: 429,
                message: "GitHub API rate limit exceeded".to_string(),
            },
            GitHubError::Api { status, message } => CommentError::Api { status, message },
        }
    }
}
