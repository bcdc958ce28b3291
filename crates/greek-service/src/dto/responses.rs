//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use greek_core::value_objects::ConnectionStatus;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub profile: CurrentProfileResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        profile: CurrentProfileResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            profile,
        }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Public profile response (privacy settings applied)
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grad_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Current authenticated profile response (all fields, plus settings)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentProfileResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub university: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grad_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,
    pub notifications: NotificationPrefsResponse,
    pub privacy: PrivacyResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Notification preferences
#[derive(Debug, Clone, Serialize)]
pub struct NotificationPrefsResponse {
    pub email: bool,
    pub push: bool,
    pub connection: bool,
    pub message: bool,
}

/// Privacy settings
#[derive(Debug, Clone, Serialize)]
pub struct PrivacyResponse {
    pub visibility: String,
    pub show_email: bool,
    pub show_location: bool,
}

// ============================================================================
// Connection Responses
// ============================================================================

/// An accepted connection, viewed from one endpoint
#[derive(Debug, Serialize)]
pub struct ConnectionResponse {
    pub id: Uuid,
    pub profile: ProfileResponse,
    pub connected_at: DateTime<Utc>,
}

/// A pending incoming connection request
#[derive(Debug, Serialize)]
pub struct ConnectionRequestResponse {
    pub id: Uuid,
    pub from: ProfileResponse,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement of a newly sent connection request
#[derive(Debug, Serialize)]
pub struct SentRequestResponse {
    pub id: Uuid,
    pub to_profile: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Relationship between the viewer and another profile
#[derive(Debug, Serialize)]
pub struct ConnectionStatusResponse {
    pub status: ConnectionStatus,
}

// ============================================================================
// Messaging Responses
// ============================================================================

/// A single direct message
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub content: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// A conversation summary for one partner
#[derive(Debug, Serialize)]
pub struct ConversationResponse {
    pub partner: ProfileResponse,
    pub last_message: MessageResponse,
    pub unread_count: i64,
}

// ============================================================================
// Feed Responses
// ============================================================================

/// A comment with its author
#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: ProfileResponse,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A single like on a post
#[derive(Debug, Clone, Serialize)]
pub struct PostLikeResponse {
    pub profile_id: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A feed post with author, likes, and comments assembled
#[derive(Debug, Serialize)]
pub struct FeedPostResponse {
    pub id: Uuid,
    pub author: ProfileResponse,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes: Vec<PostLikeResponse>,
    pub like_count: i64,
    pub liked_by_me: bool,
    pub comments: Vec<CommentResponse>,
}

/// Result of a like toggle
#[derive(Debug, Serialize)]
pub struct LikeStateResponse {
    pub liked: bool,
    pub like_count: i64,
}

// ============================================================================
// Notification Responses
// ============================================================================

/// An in-app notification
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub kind: String,
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Unread notification count
#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
