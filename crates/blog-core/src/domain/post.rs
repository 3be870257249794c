use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a post, always rendered as `{firstName, lastName}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name, e.g. "Jim Smith".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Post contents as submitted by a client, before an id and creation time are assigned.
///
/// Serializes to the same shape the `POST /posts` endpoint accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author,
        }
    }

    /// Check that every text field is non-blank.
    ///
    /// All offending fields are reported at once.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("title", &self.title),
            ("content", &self.content),
            ("author.firstName", &self.author.first_name),
            ("author.lastName", &self.author.last_name),
        ];

        let errors: Vec<String> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| format!("{name} must not be empty"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(errors))
        }
    }
}

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a fresh id and creation timestamp.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            created: Utc::now(),
        }
    }

    /// Replace the contents of this post. `id` and `created` are kept.
    pub fn replace(self, contents: NewPost) -> Self {
        Self {
            title: contents.title,
            content: contents.content,
            author: contents.author,
            ..self
        }
    }
}
