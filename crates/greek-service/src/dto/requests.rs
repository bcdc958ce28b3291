//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those carrying user-provided
//! text also implement `Validate` for input validation.

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Member registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// Member login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke; absent revokes all)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Update current profile request; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Validate, Default)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 200, message = "University must be at most 200 characters"))]
    pub university: Option<String>,

    #[validate(length(max = 200, message = "Chapter must be at most 200 characters"))]
    pub chapter: Option<String>,

    #[validate(range(min = 1900, max = 2100, message = "Graduation year out of range"))]
    pub grad_year: Option<i32>,

    #[validate(length(max = 200, message = "Industry must be at most 200 characters"))]
    pub industry: Option<String>,

    #[validate(length(max = 2000, message = "Bio must be at most 2000 characters"))]
    pub bio: Option<String>,

    pub avatar_url: Option<String>,

    #[validate(length(max = 200, message = "Location must be at most 200 characters"))]
    pub location: Option<String>,

    #[validate(length(max = 200, message = "Major must be at most 200 characters"))]
    pub major: Option<String>,
}

/// Update notification preferences; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateNotificationPrefsRequest {
    pub email: Option<bool>,
    pub push: Option<bool>,
    pub connection: Option<bool>,
    pub message: Option<bool>,
}

/// Update privacy settings; absent fields are left unchanged
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdatePrivacyRequest {
    /// One of "public", "connections", "private"
    pub visibility: Option<String>,
    pub show_email: Option<bool>,
    pub show_location: Option<bool>,
}

/// Update account settings request
#[derive(Debug, Clone, Deserialize, Default)]
pub struct UpdateSettingsRequest {
    pub notifications: Option<UpdateNotificationPrefsRequest>,
    pub privacy: Option<UpdatePrivacyRequest>,
}

/// Profile search request
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SearchProfilesRequest {
    /// Free-text match against name
    pub q: Option<String>,
    pub university: Option<String>,
    pub chapter: Option<String>,
    pub industry: Option<String>,
    pub limit: Option<i64>,
}

// ============================================================================
// Connection Requests
// ============================================================================

/// Send a connection request to another member
#[derive(Debug, Clone, Deserialize)]
pub struct SendConnectionRequest {
    pub to_profile: Uuid,
}

/// Decision on a pending connection request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestDecision {
    Accept,
    Reject,
}

/// Respond to a pending connection request
#[derive(Debug, Clone, Deserialize)]
pub struct RespondRequest {
    pub decision: RequestDecision,
}

// ============================================================================
// Messaging Requests
// ============================================================================

/// Send a direct message
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SendMessageRequest {
    #[validate(length(max = 2000, message = "Message must be at most 2000 characters"))]
    pub content: String,
}

// ============================================================================
// Feed Requests
// ============================================================================

/// Create a feed post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(max = 5000, message = "Post must be at most 5000 characters"))]
    pub content: String,
}

/// Add a comment to a post
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCommentRequest {
    #[validate(length(max = 2000, message = "Comment must be at most 2000 characters"))]
    pub content: String,
}
