//! # greek-service
//!
//! Application layer: business logic and use cases over the domain
//! repositories. Services are thin stateless wrappers around a shared
//! [`ServiceContext`](services::ServiceContext).

pub mod dto;
pub mod services;

pub use dto::*;
pub use services::{
    AuthService, ConnectionService, ConversationService, FeedService, NotificationService,
    ProfileService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
