//! PostgreSQL repository implementations

mod comment;
mod connection;
mod connection_request;
mod error;
mod like;
mod message;
mod notification;
mod post;
mod profile;

pub use comment::PgCommentRepository;
pub use connection::PgConnectionRepository;
pub use connection_request::PgConnectionRequestRepository;
pub use like::PgLikeRepository;
pub use message::PgMessageRepository;
pub use notification::PgNotificationRepository;
pub use post::PgPostRepository;
pub use profile::PgProfileRepository;
