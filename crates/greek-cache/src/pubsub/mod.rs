//! Redis Pub/Sub for change-notification channels

mod channels;
mod publisher;

pub use channels::{PubSubChannel, BROADCAST_CHANNEL, USER_CHANNEL_PREFIX};
pub use publisher::{PubSubEvent, Publisher};
