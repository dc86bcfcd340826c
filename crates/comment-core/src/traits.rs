use crate::error::Result;
use crate::models::{RemoteComment, RepositoryRef};

/// Comment operations a hosting backend must provide
///
/// The resolver only ever talks to this trait, so public and self-hosted
/// instances (or test doubles) are interchangeable.
pub trait CommentApi: Send + Sync {
    /// Find the first comment on an issue whose body carries `decorated_tag`
    ///
    /// `Ok(None)` means the whole thread was scanned and no comment matched.
    /// Any transport or API failure is reported as `Err`, and so is hitting
    /// the page cap before the listing ends (`PageLimitReached`).
    fn find_first_comment_with_tag(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        decorated_tag: &str,
    ) -> Result<Option<RemoteComment>>;

    /// Post a new comment on an issue or pull request
    fn create_comment(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        body: &str,
    ) -> Result<RemoteComment>;

    /// Replace the body of an existing comment
    fn update_comment(
        &self,
        repo: &RepositoryRef,
        comment_id: u64,
        body: &str,
    ) -> Result<RemoteComment>;

    /// Delete a comment by id
    fn delete_comment(&self, repo: &RepositoryRef, comment_id: u64) -> Result<()>;
}
