//! Post comment entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Post comment entity, ordered by creation time within a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostComment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl PostComment {
    /// Create a new PostComment
    pub fn new(id: Uuid, post_id: Uuid, author_id: Uuid, content: String) -> Self {
        Self {
            id,
            post_id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }
}
