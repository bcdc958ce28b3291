//! Service context - dependency container for services
//!
//! Holds every repository and infrastructure port behind a trait object,
//! so services can run against Postgres/Redis in production and in-memory
//! fakes in tests.

use std::sync::Arc;

use uuid::Uuid;

use greek_common::auth::{JwtService, PasswordService};
use greek_core::traits::{
    CommentRepository, ConnectionRepository, ConnectionRequestRepository, EventPublisher,
    LikeRepository, MessageRepository, NotificationRepository, PostRepository, ProfileRepository,
    SessionStore,
};

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Repositories (connection graph, messages, feed, notifications)
/// - The refresh-token session store
/// - The change-notification event publisher
/// - JWT and password services for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    profile_repo: Arc<dyn ProfileRepository>,
    connection_repo: Arc<dyn ConnectionRepository>,
    request_repo: Arc<dyn ConnectionRequestRepository>,
    message_repo: Arc<dyn MessageRepository>,
    post_repo: Arc<dyn PostRepository>,
    like_repo: Arc<dyn LikeRepository>,
    comment_repo: Arc<dyn CommentRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    // Infrastructure ports
    session_store: Arc<dyn SessionStore>,
    publisher: Arc<dyn EventPublisher>,

    // Services
    jwt_service: Arc<JwtService>,
    password_service: PasswordService,
}

impl ServiceContext {
    /// Start building a service context
    #[must_use]
    pub fn builder() -> ServiceContextBuilder {
        ServiceContextBuilder::new()
    }

    // === Repositories ===

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the connection repository
    pub fn connection_repo(&self) -> &dyn ConnectionRepository {
        self.connection_repo.as_ref()
    }

    /// Get the connection request repository
    pub fn request_repo(&self) -> &dyn ConnectionRequestRepository {
        self.request_repo.as_ref()
    }

    /// Get the message repository
    pub fn message_repo(&self) -> &dyn MessageRepository {
        self.message_repo.as_ref()
    }

    /// Get the post repository
    pub fn post_repo(&self) -> &dyn PostRepository {
        self.post_repo.as_ref()
    }

    /// Get the like repository
    pub fn like_repo(&self) -> &dyn LikeRepository {
        self.like_repo.as_ref()
    }

    /// Get the comment repository
    pub fn comment_repo(&self) -> &dyn CommentRepository {
        self.comment_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    // === Infrastructure ports ===

    /// Get the refresh-token session store
    pub fn session_store(&self) -> &dyn SessionStore {
        self.session_store.as_ref()
    }

    /// Get the change-notification publisher
    pub fn publisher(&self) -> &dyn EventPublisher {
        self.publisher.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the password service
    pub fn password_service(&self) -> &PasswordService {
        &self.password_service
    }

    /// Generate a new entity ID
    #[must_use]
    pub fn generate_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("session_store", &"...")
            .field("publisher", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    connection_repo: Option<Arc<dyn ConnectionRepository>>,
    request_repo: Option<Arc<dyn ConnectionRequestRepository>>,
    message_repo: Option<Arc<dyn MessageRepository>>,
    post_repo: Option<Arc<dyn PostRepository>>,
    like_repo: Option<Arc<dyn LikeRepository>>,
    comment_repo: Option<Arc<dyn CommentRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    session_store: Option<Arc<dyn SessionStore>>,
    publisher: Option<Arc<dyn EventPublisher>>,
    jwt_service: Option<Arc<JwtService>>,
    password_service: Option<PasswordService>,
}

impl ServiceContextBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn connection_repo(mut self, repo: Arc<dyn ConnectionRepository>) -> Self {
        self.connection_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn request_repo(mut self, repo: Arc<dyn ConnectionRequestRepository>) -> Self {
        self.request_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn message_repo(mut self, repo: Arc<dyn MessageRepository>) -> Self {
        self.message_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn post_repo(mut self, repo: Arc<dyn PostRepository>) -> Self {
        self.post_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn like_repo(mut self, repo: Arc<dyn LikeRepository>) -> Self {
        self.like_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn comment_repo(mut self, repo: Arc<dyn CommentRepository>) -> Self {
        self.comment_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    #[must_use]
    pub fn session_store(mut self, store: Arc<dyn SessionStore>) -> Self {
        self.session_store = Some(store);
        self
    }

    #[must_use]
    pub fn publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = Some(publisher);
        self
    }

    #[must_use]
    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    #[must_use]
    pub fn password_service(mut self, service: PasswordService) -> Self {
        self.password_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext {
            profile_repo: self
                .profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            connection_repo: self
                .connection_repo
                .ok_or_else(|| ServiceError::validation("connection_repo is required"))?,
            request_repo: self
                .request_repo
                .ok_or_else(|| ServiceError::validation("request_repo is required"))?,
            message_repo: self
                .message_repo
                .ok_or_else(|| ServiceError::validation("message_repo is required"))?,
            post_repo: self
                .post_repo
                .ok_or_else(|| ServiceError::validation("post_repo is required"))?,
            like_repo: self
                .like_repo
                .ok_or_else(|| ServiceError::validation("like_repo is required"))?,
            comment_repo: self
                .comment_repo
                .ok_or_else(|| ServiceError::validation("comment_repo is required"))?,
            notification_repo: self
                .notification_repo
                .ok_or_else(|| ServiceError::validation("notification_repo is required"))?,
            session_store: self
                .session_store
                .ok_or_else(|| ServiceError::validation("session_store is required"))?,
            publisher: self
                .publisher
                .ok_or_else(|| ServiceError::validation("publisher is required"))?,
            jwt_service: self
                .jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            password_service: self.password_service.unwrap_or_default(),
        })
    }
}
