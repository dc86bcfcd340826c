//! Decide and perform the single comment action for a run.
//!
//! Branches are evaluated once, in priority order:
//!
//! 1. delete, when requested (requires a tag)
//! 2. update the tagged comment, when a tag is set and the comment exists
//! 3. create, otherwise
//!
//! A tag lookup that fails (as opposed to finding nothing) ends the run
//! with `CommentError::Lookup` in every branch.

use crate::error::{CommentError, Result};
use crate::models::{CommentRequest, Outcome, RemoteComment, RepositoryRef};
use crate::tag::{decorate, tagged_body};
use crate::traits::CommentApi;

/// Resolve `request` against the comments currently on the thread
pub fn resolve(
    api: &dyn CommentApi,
    repo: &RepositoryRef,
    request: &CommentRequest,
) -> Result<Outcome> {
    if request.delete {
        let tag = request.tag().ok_or(CommentError::MissingTag)?;
        return delete_tagged(api, repo, request.issue_number, tag);
    }

    let body = match request.tag() {
        Some(tag) => {
            let body = tagged_body(&request.body, tag);
            if let Some(existing) = find_tagged(api, repo, request.issue_number, tag)? {
                let comment = api
                    .update_comment(repo, existing.id, &body)
                    .map_err(|e| CommentError::mutation("updating", e))?;
                return Ok(Outcome::Updated { comment });
            }
            body
        }
        None => request.body.clone(),
    };

    let comment = api
        .create_comment(repo, request.issue_number, &body)
        .map_err(|e| CommentError::mutation("creating", e))?;
    Ok(Outcome::Created { comment })
}

fn delete_tagged(
    api: &dyn CommentApi,
    repo: &RepositoryRef,
    issue_number: u64,
    tag: &str,
) -> Result<Outcome> {
    let Some(existing) = find_tagged(api, repo, issue_number, tag)? else {
        return Ok(Outcome::NothingToDelete {
            tag: tag.to_string(),
        });
    };

    api.delete_comment(repo, existing.id)
        .map_err(|e| CommentError::mutation("deleting", e))?;

    Ok(Outcome::Deleted {
        comment_id: existing.id,
        tag: tag.to_string(),
    })
}

fn find_tagged(
    api: &dyn CommentApi,
    repo: &RepositoryRef,
    issue_number: u64,
    tag: &str,
) -> Result<Option<RemoteComment>> {
    api.find_first_comment_with_tag(repo, issue_number, &decorate(tag))
        .map_err(|e| CommentError::Lookup(Box::new(e)))
}
