//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Author as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
}

/// Request to create a post. `id` and `created` are assigned by the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
}

/// Request to replace a post. `id` must match the id in the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacePostRequest {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
}

/// A post as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
    /// RFC 3339 creation timestamp.
    pub created: String,
}
