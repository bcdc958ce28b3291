//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for the profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub university: Option<String>,
    pub chapter: Option<String>,
    pub grad_year: Option<i32>,
    pub industry: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub major: Option<String>,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub connection_notifications: bool,
    pub message_notifications: bool,
    pub profile_visibility: String,
    pub show_email: bool,
    pub show_location: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
