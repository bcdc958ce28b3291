//! Service layer - use cases over the domain repositories

mod auth;
mod connection;
mod context;
mod conversation;
mod error;
mod feed;
mod notification;
mod profile;

pub use auth::AuthService;
pub use connection::ConnectionService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use conversation::ConversationService;
pub use error::{ServiceError, ServiceResult};
pub use feed::FeedService;
pub use notification::NotificationService;
pub use profile::ProfileService;
