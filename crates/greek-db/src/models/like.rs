//! Post like database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the post_likes table
#[derive(Debug, Clone, FromRow)]
pub struct PostLikeModel {
    pub post_id: Uuid,
    pub profile_id: Uuid,
    pub created_at: DateTime<Utc>,
}
