use thiserror::Error;

/// Errors shared by the resolver and every comment backend
#[derive(Error, Debug)]
pub enum CommentError {
    #[error("Cannot delete a comment without an update tag")]
    MissingTag,

    #[error("Invalid repository URL '{url}': {reason}")]
    InvalidRepositoryUrl { url: String, reason: String },

    #[error("Failed to look up tagged comment: {0}")]
    Lookup(Box<CommentError>),

    #[error("API call failed when {action} comment: {cause}")]
    Mutation {
        action: &'static str,
        cause: Box<CommentError>,
    },

    #[error("No match in the first {pages} pages of comments; raise PR_COMMENT_MAX_PAGES to scan further")]
    PageLimitReached { pages: usize },

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl CommentError {
    pub(crate) fn invalid_url(url: &str, reason: impl Into<String>) -> Self {
        CommentError::InvalidRepositoryUrl {
            url: url.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn mutation(action: &'static str, cause: CommentError) -> Self {
        CommentError::Mutation {
            action,
            cause: Box::new(cause),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommentError>;
