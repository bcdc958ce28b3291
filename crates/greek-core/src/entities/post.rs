//! Post entity - a feed post

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Post entity, append-only from the reader's perspective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new Post
    pub fn new(id: Uuid, author_id: Uuid, content: String) -> Self {
        Self {
            id,
            author_id,
            content,
            created_at: Utc::now(),
        }
    }
}
