//! # greek-cache
//!
//! Redis caching layer for sessions and change-notification pub/sub.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Refresh token storage with automatic expiration
//! - **Pub/Sub**: Per-member change-notification channels; clients use the
//!   events as re-fetch triggers
//!
//! ## Example
//!
//! ```ignore
//! use greek_cache::{Publisher, RedisPool, RedisPoolConfig, RedisSessionStore};
//!
//! let config = RedisPoolConfig::default();
//! let pool = RedisPool::new(config)?;
//!
//! let sessions = RedisSessionStore::new(pool.clone());
//! let publisher = Publisher::new(pool.clone());
//! ```

pub mod pool;
pub mod pubsub;
pub mod session;

// Re-export pool types
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

// Re-export session types
pub use session::{RedisSessionStore, RefreshTokenData};

// Re-export pubsub types
pub use pubsub::{
    PubSubChannel, PubSubEvent, Publisher, BROADCAST_CHANNEL, USER_CHANNEL_PREFIX,
};
