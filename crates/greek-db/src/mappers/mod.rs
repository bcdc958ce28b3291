//! Entity <-> model mappers

mod connection;
mod connection_request;
mod feed;
mod message;
mod notification;
mod profile;
