//! Domain events

mod domain_event;

pub use domain_event::{
    ConnectionAcceptedEvent, ConnectionRequestCreatedEvent, DomainEvent, MessageCreatedEvent,
    NotificationCreatedEvent,
};
