//! Connection database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the connections table
///
/// Edges are stored normalized: `profile_a` is always the smaller UUID.
#[derive(Debug, Clone, FromRow)]
pub struct ConnectionModel {
    pub id: Uuid,
    pub profile_a: Uuid,
    pub profile_b: Uuid,
    pub created_at: DateTime<Utc>,
}
