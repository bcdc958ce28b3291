//! Repository traits and infrastructure ports

mod ports;
mod repositories;

pub use ports::{EventPublisher, SessionStore};
pub use repositories::{
    CommentRepository, ConnectionRepository, ConnectionRequestRepository, ConversationSummary,
    LikeRepository, MessageRepository, NotificationRepository, PostRepository, ProfileQuery,
    ProfileRepository, RepoResult,
};
