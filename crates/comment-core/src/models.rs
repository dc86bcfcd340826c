use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owner and name of a hosted repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRef {
    pub owner: String,
    pub name: String,
}

impl RepositoryRef {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A comment as it exists on the hosting service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteComment {
    pub id: u64,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl RemoteComment {
    /// Minimal comment with only the fields the resolver relies on
    pub fn new(id: u64, body: impl Into<String>) -> Self {
        Self {
            id,
            body: body.into(),
            author: None,
            html_url: None,
            created: None,
            updated: None,
        }
    }
}

/// What the caller asked the resolver to do
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentRequest {
    pub body: String,
    pub delete: bool,
    pub issue_number: u64,
    pub update_tag: Option<String>,
}

impl CommentRequest {
    /// The update tag, treating an empty string as absent
    pub fn tag(&self) -> Option<&str> {
        self.update_tag.as_deref().filter(|t| !t.is_empty())
    }
}

/// Terminal result of a successful resolution
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Outcome {
    Created { comment: RemoteComment },
    Updated { comment: RemoteComment },
    Deleted { comment_id: u64, tag: String },
    NothingToDelete { tag: String },
}

impl Outcome {
    /// The comment left on the thread, if any
    pub fn comment(&self) -> Option<&RemoteComment> {
        match self {
            Outcome::Created { comment } | Outcome::Updated { comment } => Some(comment),
            Outcome::Deleted { .. } | Outcome::NothingToDelete { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tag_is_treated_as_absent() {
        let request = CommentRequest {
            update_tag: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(request.tag(), None);

        let request = CommentRequest {
            update_tag: Some("ci-result".to_string()),
            ..Default::default()
        };
        assert_eq!(request.tag(), Some("ci-result"));
    }

    #[test]
    fn repository_ref_displays_as_slug() {
        assert_eq!(RepositoryRef::new("octo", "cat").to_string(), "octo/cat");
    }

    #[test]
    fn outcome_serializes_with_action_tag() {
        let outcome = Outcome::Deleted {
            comment_id: 42,
            tag: "ci-result".to_string(),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"action": "deleted", "comment_id": 42, "tag": "ci-result"})
        );

        let outcome = Outcome::Created {
            comment: RemoteComment::new(7, "LGTM"),
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["action"], "created");
        assert_eq!(json["comment"]["id"], 7);
        assert!(json["comment"].get("author").is_none());
    }
}
