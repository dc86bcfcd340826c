//! Implementation of comment-core traits for GitHubClient

use comment_core::tag::carries_tag;
use comment_core::{
    CommentApi, CommentError, RemoteComment, RepositoryRef, Result, find_in_pages, get_max_pages,
};

use crate::client::{COMMENTS_PER_PAGE, GitHubClient};

impl CommentApi for GitHubClient {
    fn find_first_comment_with_tag(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        decorated_tag: &str,
    ) -> Result<Option<RemoteComment>> {
        let found = find_in_pages(
            |page, per_page| {
                self.list_comments(&repo.owner, &repo.name, issue_number, per_page, page)
                    .map_err(CommentError::from)
            },
            COMMENTS_PER_PAGE,
            get_max_pages(),
            |comment| {
                comment
                    .body
                    .as_deref()
                    .is_some_and(|body| carries_tag(body, decorated_tag))
            },
        )?;

        Ok(found.map(Into::into))
    }

    fn create_comment(
        &self,
        repo: &RepositoryRef,
        issue_number: u64,
        body: &str,
    ) -> Result<RemoteComment> {
        self.add_comment(&repo.owner, &repo.name, issue_number, body)
            .map(Into::into)
            .map_err(CommentError::from)
    }

    fn update_comment(
        &self,
        repo: &RepositoryRef,
        comment_id: u64,
        body: &str,
    ) -> Result<RemoteComment> {
        self.edit_comment(&repo.owner, &repo.name, comment_id, body)
            .map(Into::into)
            .map_err(CommentError::from)
    }

    fn delete_comment(&self, repo: &RepositoryRef, comment_id: u64) -> Result<()> {
        self.remove_comment(&repo.owner, &repo.name, comment_id)
            .map_err(CommentError::from)
    }
}
