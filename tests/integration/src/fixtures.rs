//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Response structs
//! mirror the API wire format rather than reusing server-side types, so
//! a serialization regression shows up as a test failure here.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Member {suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub profile: CurrentProfileResponse,
}

/// The caller's own profile
#[derive(Debug, Deserialize)]
pub struct CurrentProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub university: Option<String>,
    pub chapter: Option<String>,
    pub industry: Option<String>,
    pub bio: Option<String>,
    pub created_at: String,
}

/// Another member's profile as the caller sees it
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub university: Option<String>,
    pub chapter: Option<String>,
    pub created_at: String,
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Send connection request body
#[derive(Debug, Serialize)]
pub struct SendConnectionRequest {
    pub to_profile: String,
}

/// Respond to a connection request
#[derive(Debug, Serialize)]
pub struct RespondRequest {
    pub decision: String,
}

/// Acknowledgement of a sent connection request
#[derive(Debug, Deserialize)]
pub struct SentRequestResponse {
    pub id: String,
    pub to_profile: String,
    pub status: String,
}

/// A pending incoming connection request
#[derive(Debug, Deserialize)]
pub struct ConnectionRequestResponse {
    pub id: String,
    pub from: ProfileResponse,
    pub created_at: String,
}

/// An established connection
#[derive(Debug, Deserialize)]
pub struct ConnectionResponse {
    pub id: String,
    pub profile: ProfileResponse,
    pub connected_at: String,
}

/// Connection status between two members
#[derive(Debug, Deserialize)]
pub struct ConnectionStatusResponse {
    pub status: String,
}

/// Send message request body
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub content: String,
}

/// A direct message
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
    pub read: bool,
    pub created_at: String,
}

/// A conversation summary
#[derive(Debug, Deserialize)]
pub struct ConversationResponse {
    pub partner: ProfileResponse,
    pub last_message: MessageResponse,
    pub unread_count: i64,
}

/// Create post request body
#[derive(Debug, Serialize)]
pub struct CreatePostRequest {
    pub content: String,
}

/// Add comment request body
#[derive(Debug, Serialize)]
pub struct AddCommentRequest {
    pub content: String,
}

/// A feed post
#[derive(Debug, Deserialize)]
pub struct FeedPostResponse {
    pub id: String,
    pub author: ProfileResponse,
    pub content: String,
    pub created_at: String,
    pub likes: Vec<PostLikeResponse>,
    pub like_count: i64,
    pub liked_by_me: bool,
    pub comments: Vec<CommentResponse>,
}

/// A single like on a post
#[derive(Debug, Deserialize)]
pub struct PostLikeResponse {
    pub profile_id: String,
    pub created_at: String,
}

/// A comment on a post
#[derive(Debug, Deserialize)]
pub struct CommentResponse {
    pub id: String,
    pub post_id: String,
    pub author: ProfileResponse,
    pub content: String,
    pub created_at: String,
}

/// Result of toggling a like
#[derive(Debug, Deserialize)]
pub struct LikeStateResponse {
    pub liked: bool,
    pub like_count: i64,
}

/// An in-app notification
#[derive(Debug, Deserialize)]
pub struct NotificationResponse {
    pub id: String,
    pub kind: String,
    pub title: String,
    pub body: String,
    pub data: Option<Value>,
    pub read: bool,
    pub created_at: String,
}

/// Unread notification count
#[derive(Debug, Deserialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
