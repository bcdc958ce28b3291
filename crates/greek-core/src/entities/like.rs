//! Post like entity - at most one per (post, profile) pair

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Post like entity, keyed by the (post, profile) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostLike {
    pub post_id: Uuid,
    pub profile_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl PostLike {
    /// Create a new PostLike
    pub fn new(post_id: Uuid, profile_id: Uuid) -> Self {
        Self {
            post_id,
            profile_id,
            created_at: Utc::now(),
        }
    }
}
