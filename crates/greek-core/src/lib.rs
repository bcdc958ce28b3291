//! # greek-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain events.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Connection, ConnectionRequest, Message, Notification, NotificationKind, NotificationPrefs,
    Post, PostComment, PostLike, PrivacySettings, Profile, Visibility,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use traits::{
    CommentRepository, ConnectionRepository, ConnectionRequestRepository, ConversationSummary,
    EventPublisher, LikeRepository, MessageRepository, NotificationRepository, PostRepository,
    ProfileQuery, ProfileRepository, RepoResult, SessionStore,
};
pub use value_objects::{ConnectionStatus, MemberPair, RequestStatus};
