//! Domain entities - core business objects

mod comment;
mod connection;
mod connection_request;
mod like;
mod message;
mod notification;
mod post;
mod profile;

pub use comment::PostComment;
pub use connection::Connection;
pub use connection_request::ConnectionRequest;
pub use like::PostLike;
pub use message::Message;
pub use notification::{Notification, NotificationKind};
pub use post::Post;
pub use profile::{NotificationPrefs, PrivacySettings, Profile, Visibility};
