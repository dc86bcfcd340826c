//! Invisible markers that let a later run find the comment it posted.

/// Wrap a tag in an HTML comment so it does not render in the comment body
pub fn decorate(tag: &str) -> String {
    format!("<!-- {} -->", tag)
}

/// Append the decorated tag to a comment body, separated by a blank line
pub fn tagged_body(body: &str, tag: &str) -> String {
    format!("{}\n\n{}", body, decorate(tag))
}

/// Whether a comment body carries an already decorated tag
pub fn carries_tag(comment_body: &str, decorated_tag: &str) -> bool {
    comment_body.contains(decorated_tag)
}
