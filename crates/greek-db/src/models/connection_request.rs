//! Connection request database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the connection_requests table
#[derive(Debug, Clone, FromRow)]
pub struct ConnectionRequestModel {
    pub id: Uuid,
    pub from_profile: Uuid,
    pub to_profile: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
