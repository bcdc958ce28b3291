//! In-memory fakes for service tests
//!
//! Each fake replicates the store-level guarantees the real Postgres
//! implementation provides: the pending-request uniqueness slot, idempotent
//! edge and like inserts, and read-flag transitions.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use greek_common::auth::{JwtService, PasswordService};
use greek_core::entities::{
    Connection, ConnectionRequest, Message, Notification, Post, PostComment, PostLike, Profile,
};
use greek_core::error::DomainError;
use greek_core::events::DomainEvent;
use greek_core::traits::{
    CommentRepository, ConnectionRepository, ConnectionRequestRepository, ConversationSummary,
    EventPublisher, LikeRepository, MessageRepository, NotificationRepository, PostRepository,
    ProfileQuery, ProfileRepository, RepoResult, SessionStore,
};
use greek_core::value_objects::{MemberPair, RequestStatus};
use greek_service::services::ServiceContext;

// ============================================================================
// Profile repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryProfileRepo {
    profiles: Mutex<HashMap<Uuid, (Profile, String)>>,
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>> {
        Ok(self.profiles.lock().unwrap().get(&id).map(|(p, _)| p.clone()))
    }

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .find(|(p, _)| p.email == email)
            .map(|(p, _)| p.clone()))
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .any(|(p, _)| p.email == email))
    }

    async fn create(&self, profile: &Profile, password_hash: &str) -> RepoResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.values().any(|(p, _)| p.email == profile.email) {
            return Err(DomainError::EmailAlreadyExists);
        }
        profiles.insert(profile.id, (profile.clone(), password_hash.to_string()));
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles.get_mut(&profile.id) {
            Some(entry) => {
                entry.0 = profile.clone();
                Ok(())
            }
            None => Err(DomainError::ProfileNotFound(profile.id)),
        }
    }

    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        Ok(self.profiles.lock().unwrap().get(&id).map(|(_, h)| h.clone()))
    }

    async fn search(&self, query: &ProfileQuery) -> RepoResult<Vec<Profile>> {
        let profiles = self.profiles.lock().unwrap();
        let mut results: Vec<Profile> = profiles
            .values()
            .map(|(p, _)| p.clone())
            .filter(Profile::is_searchable)
            .filter(|p| query.exclude != Some(p.id))
            .filter(|p| {
                query.text.as_ref().is_none_or(|t| {
                    p.name.to_lowercase().contains(&t.to_lowercase())
                })
            })
            .filter(|p| {
                query
                    .university
                    .as_ref()
                    .is_none_or(|u| p.university.as_deref() == Some(u))
            })
            .filter(|p| {
                query
                    .chapter
                    .as_ref()
                    .is_none_or(|c| p.chapter.as_deref() == Some(c))
            })
            .filter(|p| {
                query
                    .industry
                    .as_ref()
                    .is_none_or(|i| p.industry.as_deref() == Some(i))
            })
            .collect();
        results.sort_by(|a, b| a.name.cmp(&b.name));
        results.truncate(usize::try_from(query.limit.clamp(1, 100)).unwrap());
        Ok(results)
    }
}

// ============================================================================
// Connection graph repositories
// ============================================================================

#[derive(Default)]
pub struct InMemoryConnectionRepo {
    connections: Mutex<Vec<Connection>>,
}

#[async_trait]
impl ConnectionRepository for InMemoryConnectionRepo {
    async fn find_by_pair(&self, pair: &MemberPair) -> RepoResult<Option<Connection>> {
        Ok(self
            .connections
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.pair == *pair)
            .copied())
    }

    async fn find_by_member(&self, member: Uuid) -> RepoResult<Vec<Connection>> {
        Ok(self
            .connections
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|c| c.involves(member))
            .copied()
            .collect())
    }

    async fn create(&self, connection: &Connection) -> RepoResult<()> {
        let mut connections = self.connections.lock().unwrap();
        // Duplicate pair inserts are satisfied silently, like ON CONFLICT
        // DO NOTHING against the unique pair index.
        if !connections.iter().any(|c| c.pair == connection.pair) {
            connections.push(*connection);
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryRequestRepo {
    requests: Mutex<Vec<ConnectionRequest>>,
}

#[async_trait]
impl ConnectionRequestRepository for InMemoryRequestRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ConnectionRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_pending(&self, from: Uuid, to: Uuid) -> RepoResult<Option<ConnectionRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.from_profile == from && r.to_profile == to && r.is_pending())
            .cloned())
    }

    async fn find_pending_incoming(&self, to: Uuid) -> RepoResult<Vec<ConnectionRequest>> {
        Ok(self
            .requests
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|r| r.to_profile == to && r.is_pending())
            .cloned()
            .collect())
    }

    async fn create(&self, request: &ConnectionRequest) -> RepoResult<()> {
        let mut requests = self.requests.lock().unwrap();
        // One pending slot per ordered pair, like the partial unique index.
        if requests.iter().any(|r| {
            r.from_profile == request.from_profile
                && r.to_profile == request.to_profile
                && r.is_pending()
        }) {
            return Err(DomainError::AlreadyRequested);
        }
        requests.push(request.clone());
        Ok(())
    }

    async fn update_status(&self, id: Uuid, status: RequestStatus) -> RepoResult<()> {
        let mut requests = self.requests.lock().unwrap();
        match requests.iter_mut().find(|r| r.id == id) {
            Some(request) => {
                request.status = status;
                request.updated_at = chrono::Utc::now();
                Ok(())
            }
            None => Err(DomainError::RequestNotFound(id)),
        }
    }
}

// ============================================================================
// Message repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryMessageRepo {
    messages: Mutex<Vec<Message>>,
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepo {
    async fn conversation_summaries(&self, member: Uuid) -> RepoResult<Vec<ConversationSummary>> {
        let messages = self.messages.lock().unwrap();

        // Newest-first walk: the first message seen for a partner is the
        // conversation's latest, and partner order is already by recency.
        let mut summaries: Vec<ConversationSummary> = Vec::new();
        for message in messages.iter().rev() {
            let Some(partner) = message.partner_of(member) else {
                continue;
            };

            match summaries.iter().position(|s| s.partner == partner) {
                Some(i) => {
                    if message.is_unread_for(member) {
                        summaries[i].unread_count += 1;
                    }
                }
                None => summaries.push(ConversationSummary {
                    partner,
                    unread_count: i64::from(message.is_unread_for(member)),
                    last_message: message.clone(),
                }),
            }
        }

        Ok(summaries)
    }

    async fn find_thread(&self, member: Uuid, partner: Uuid) -> RepoResult<Vec<Message>> {
        Ok(self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.partner_of(member) == Some(partner))
            .cloned()
            .collect())
    }

    async fn create(&self, message: &Message) -> RepoResult<()> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn mark_read(&self, receiver: Uuid, sender: Uuid) -> RepoResult<u64> {
        let mut messages = self.messages.lock().unwrap();
        let mut changed = 0;
        for message in messages.iter_mut() {
            if message.receiver_id == receiver && message.sender_id == sender && !message.read {
                message.read = true;
                changed += 1;
            }
        }
        Ok(changed)
    }
}

// ============================================================================
// Feed repositories
// ============================================================================

#[derive(Default)]
pub struct InMemoryPostRepo {
    posts: Mutex<Vec<Post>>,
}

#[async_trait]
impl PostRepository for InMemoryPostRepo {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Post>> {
        Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> RepoResult<Vec<Post>> {
        Ok(self.posts.lock().unwrap().iter().rev().cloned().collect())
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.posts.lock().unwrap().push(post.clone());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryLikeRepo {
    likes: Mutex<Vec<PostLike>>,
}

#[async_trait]
impl LikeRepository for InMemoryLikeRepo {
    async fn find(&self, post_id: Uuid, profile_id: Uuid) -> RepoResult<Option<PostLike>> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.post_id == post_id && l.profile_id == profile_id)
            .cloned())
    }

    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<PostLike>> {
        Ok(self
            .likes
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn create(&self, like: &PostLike) -> RepoResult<()> {
        let mut likes = self.likes.lock().unwrap();
        // Composite primary key: a duplicate insert is a no-op.
        if !likes
            .iter()
            .any(|l| l.post_id == like.post_id && l.profile_id == like.profile_id)
        {
            likes.push(like.clone());
        }
        Ok(())
    }

    async fn delete(&self, post_id: Uuid, profile_id: Uuid) -> RepoResult<()> {
        self.likes
            .lock()
            .unwrap()
            .retain(|l| !(l.post_id == post_id && l.profile_id == profile_id));
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCommentRepo {
    comments: Mutex<Vec<PostComment>>,
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepo {
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<PostComment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn create(&self, comment: &PostComment) -> RepoResult<()> {
        self.comments.lock().unwrap().push(comment.clone());
        Ok(())
    }
}

// ============================================================================
// Notification repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryNotificationRepo {
    notifications: Mutex<Vec<Notification>>,
}

impl InMemoryNotificationRepo {
    pub fn all_for(&self, profile_id: Uuid) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.profile_id == profile_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepo {
    async fn find_by_profile(&self, profile_id: Uuid, limit: i64) -> RepoResult<Vec<Notification>> {
        let mut result: Vec<Notification> = self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .rev()
            .filter(|n| n.profile_id == profile_id)
            .cloned()
            .collect();
        result.truncate(usize::try_from(limit.clamp(1, 100)).unwrap());
        Ok(result)
    }

    async fn unread_count(&self, profile_id: Uuid) -> RepoResult<i64> {
        Ok(self
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.profile_id == profile_id && !n.read)
            .count() as i64)
    }

    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        self.notifications.lock().unwrap().push(notification.clone());
        Ok(())
    }

    async fn mark_read(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool> {
        let mut notifications = self.notifications.lock().unwrap();
        match notifications
            .iter_mut()
            .find(|n| n.id == id && n.profile_id == profile_id)
        {
            Some(notification) => {
                notification.read = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn mark_all_read(&self, profile_id: Uuid) -> RepoResult<u64> {
        let mut notifications = self.notifications.lock().unwrap();
        let mut changed = 0;
        for notification in notifications.iter_mut() {
            if notification.profile_id == profile_id && !notification.read {
                notification.read = true;
                changed += 1;
            }
        }
        Ok(changed)
    }
}

// ============================================================================
// Infrastructure ports
// ============================================================================

#[derive(Default)]
pub struct InMemorySessionStore {
    tokens: Mutex<HashMap<String, Uuid>>,
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn store_refresh_token(
        &self,
        profile_id: Uuid,
        token: &str,
        _ttl_secs: i64,
    ) -> Result<(), DomainError> {
        self.tokens
            .lock()
            .unwrap()
            .insert(token.to_string(), profile_id);
        Ok(())
    }

    async fn take_refresh_token(
        &self,
        profile_id: Uuid,
        token: &str,
    ) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.lock().unwrap();
        match tokens.get(token) {
            Some(owner) if *owner == profile_id => {
                tokens.remove(token);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn revoke_all(&self, profile_id: Uuid) -> Result<(), DomainError> {
        self.tokens
            .lock()
            .unwrap()
            .retain(|_, owner| *owner != profile_id);
        Ok(())
    }
}

/// Publisher that records every event instead of hitting Redis
#[derive(Default)]
pub struct RecordingPublisher {
    events: Mutex<Vec<(Uuid, String)>>,
}

impl RecordingPublisher {
    /// Event type names delivered to a profile, in order
    pub fn events_for(&self, profile_id: Uuid) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == profile_id)
            .map(|(_, t)| t.clone())
            .collect()
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish_to_user(
        &self,
        profile_id: Uuid,
        event: &DomainEvent,
    ) -> Result<(), DomainError> {
        self.events
            .lock()
            .unwrap()
            .push((profile_id, event.event_type().to_string()));
        Ok(())
    }
}

// ============================================================================
// Test harness
// ============================================================================

/// Handles onto the fakes backing a test `ServiceContext`
pub struct TestHarness {
    pub ctx: ServiceContext,
    pub profiles: Arc<InMemoryProfileRepo>,
    pub notifications: Arc<InMemoryNotificationRepo>,
    pub publisher: Arc<RecordingPublisher>,
}

/// Build a `ServiceContext` wired entirely to in-memory fakes
pub fn harness() -> TestHarness {
    let profiles = Arc::new(InMemoryProfileRepo::default());
    let notifications = Arc::new(InMemoryNotificationRepo::default());
    let publisher = Arc::new(RecordingPublisher::default());

    let ctx = ServiceContext::builder()
        .profile_repo(profiles.clone())
        .connection_repo(Arc::new(InMemoryConnectionRepo::default()))
        .request_repo(Arc::new(InMemoryRequestRepo::default()))
        .message_repo(Arc::new(InMemoryMessageRepo::default()))
        .post_repo(Arc::new(InMemoryPostRepo::default()))
        .like_repo(Arc::new(InMemoryLikeRepo::default()))
        .comment_repo(Arc::new(InMemoryCommentRepo::default()))
        .notification_repo(notifications.clone())
        .session_store(Arc::new(InMemorySessionStore::default()))
        .publisher(publisher.clone())
        .jwt_service(Arc::new(JwtService::new(
            "test-secret-key-that-is-long-enough",
            900,
            604_800,
        )))
        .password_service(PasswordService::new())
        .build()
        .expect("all fakes provided");

    TestHarness {
        ctx,
        profiles,
        notifications,
        publisher,
    }
}

/// Insert a member directly into the profile store and return their ID
pub async fn seed_member(harness: &TestHarness, name: &str, email: &str) -> Uuid {
    let profile = Profile::new(Uuid::new_v4(), name.to_string(), email.to_string());
    let id = profile.id;
    harness
        .profiles
        .create(&profile, "unused-hash")
        .await
        .expect("seed profile");
    id
}
