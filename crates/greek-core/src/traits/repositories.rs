//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::entities::{
    Connection, ConnectionRequest, Message, Notification, Post, PostComment, PostLike, Profile,
};
use crate::error::DomainError;
use crate::value_objects::{MemberPair, RequestStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

/// Search parameters for profile lookup
#[derive(Debug, Clone, Default)]
pub struct ProfileQuery {
    /// Free-text match against name
    pub text: Option<String>,
    pub university: Option<String>,
    pub chapter: Option<String>,
    pub industry: Option<String>,
    /// Profile to exclude (usually the searcher)
    pub exclude: Option<Uuid>,
    /// Maximum number of results (clamped by the implementation)
    pub limit: i64,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find profile by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>>;

    /// Find profile by email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new profile
    async fn create(&self, profile: &Profile, password_hash: &str) -> RepoResult<()>;

    /// Update an existing profile
    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>>;

    /// Search visible profiles
    async fn search(&self, query: &ProfileQuery) -> RepoResult<Vec<Profile>>;
}

// ============================================================================
// Connection Repository
// ============================================================================

#[async_trait]
pub trait ConnectionRepository: Send + Sync {
    /// Find the edge for a normalized pair, if it exists
    async fn find_by_pair(&self, pair: &MemberPair) -> RepoResult<Option<Connection>>;

    /// List all edges touching a member, newest first
    async fn find_by_member(&self, member: Uuid) -> RepoResult<Vec<Connection>>;

    /// Create an edge; a concurrent duplicate insert is treated as satisfied
    async fn create(&self, connection: &Connection) -> RepoResult<()>;
}

// ============================================================================
// Connection Request Repository
// ============================================================================

#[async_trait]
pub trait ConnectionRequestRepository: Send + Sync {
    /// Find request by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ConnectionRequest>>;

    /// Find the pending request for an ordered (from, to) pair
    async fn find_pending(&self, from: Uuid, to: Uuid) -> RepoResult<Option<ConnectionRequest>>;

    /// List pending requests addressed to a member
    async fn find_pending_incoming(&self, to: Uuid) -> RepoResult<Vec<ConnectionRequest>>;

    /// Create a pending request; a racing duplicate maps to `AlreadyRequested`
    async fn create(&self, request: &ConnectionRequest) -> RepoResult<()>;

    /// Persist a status transition
    async fn update_status(&self, id: Uuid, status: RequestStatus) -> RepoResult<()>;
}

// ============================================================================
// Message Repository
// ============================================================================

/// Per-partner conversation aggregate
///
/// How the aggregate is produced is the implementation's choice: a scan
/// over the message table, or a summary maintained alongside each write.
#[derive(Debug, Clone)]
pub struct ConversationSummary {
    /// The other participant
    pub partner: Uuid,
    /// Most recent message in either direction
    pub last_message: Message,
    /// Messages addressed to the queried member and not yet read
    pub unread_count: i64,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// One summary per partner the member has exchanged messages with,
    /// ordered by most recent message, newest first
    async fn conversation_summaries(&self, member: Uuid) -> RepoResult<Vec<ConversationSummary>>;

    /// All messages between two members, oldest first
    async fn find_thread(&self, member: Uuid, partner: Uuid) -> RepoResult<Vec<Message>>;

    /// Append a new message
    async fn create(&self, message: &Message) -> RepoResult<()>;

    /// Mark unread messages from `sender` to `receiver` as read;
    /// returns the number of rows changed
    async fn mark_read(&self, receiver: Uuid, sender: Uuid) -> RepoResult<u64>;
}

// ============================================================================
// Post / Like / Comment Repositories
// ============================================================================

#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find post by ID
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>>;

    /// All posts, newest first
    async fn find_all(&self) -> RepoResult<Vec<Post>>;

    /// Create a new post
    async fn create(&self, post: &Post) -> RepoResult<()>;
}

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Find the like for a (post, profile) pair
    async fn find(&self, post_id: Uuid, profile_id: Uuid) -> RepoResult<Option<PostLike>>;

    /// All likes on a post
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<PostLike>>;

    /// Insert a like; a concurrent duplicate insert is treated as satisfied
    async fn create(&self, like: &PostLike) -> RepoResult<()>;

    /// Remove the like for a (post, profile) pair
    async fn delete(&self, post_id: Uuid, profile_id: Uuid) -> RepoResult<()>;
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// All comments on a post, oldest first
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<PostComment>>;

    /// Append a comment
    async fn create(&self, comment: &PostComment) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Notifications for a profile, newest first
    async fn find_by_profile(&self, profile_id: Uuid, limit: i64) -> RepoResult<Vec<Notification>>;

    /// Count unread notifications
    async fn unread_count(&self, profile_id: Uuid) -> RepoResult<i64>;

    /// Create a notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;

    /// Mark one notification read; returns false if it did not exist
    async fn mark_read(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool>;

    /// Mark all notifications read; returns the number of rows changed
    async fn mark_all_read(&self, profile_id: Uuid) -> RepoResult<u64>;
}
