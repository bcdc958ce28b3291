//! Request handlers organized by domain

pub mod auth;
pub mod connections;
pub mod conversations;
pub mod feed;
pub mod health;
pub mod notifications;
pub mod profiles;
