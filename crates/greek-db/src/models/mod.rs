//! Database models with SQLx `FromRow` derives

mod comment;
mod connection;
mod connection_request;
mod like;
mod message;
mod notification;
mod post;
mod profile;

pub use comment::PostCommentModel;
pub use connection::ConnectionModel;
pub use connection_request::ConnectionRequestModel;
pub use like::PostLikeModel;
pub use message::MessageModel;
pub use notification::NotificationModel;
pub use post::PostModel;
pub use profile::ProfileModel;
