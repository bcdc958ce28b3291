//! Refresh token storage in Redis.
//!
//! Stores refresh tokens with automatic expiration. Tokens are single-use:
//! consuming one removes it, which is what makes rotation safe.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use greek_core::error::DomainError;
use greek_core::traits::SessionStore;

use crate::pool::{RedisPool, RedisPoolError, RedisResult};

/// Key prefix for refresh tokens
const REFRESH_TOKEN_PREFIX: &str = "refresh_token:";

/// Key prefix for the per-member token set
const USER_TOKENS_PREFIX: &str = "user_tokens:";

/// Stored refresh token data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenData {
    /// Profile this token belongs to
    pub profile_id: Uuid,
    /// Token creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl RefreshTokenData {
    /// Create new refresh token data
    #[must_use]
    pub fn new(profile_id: Uuid) -> Self {
        Self {
            profile_id,
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Redis-backed session store for refresh tokens
#[derive(Clone)]
pub struct RedisSessionStore {
    pool: RedisPool,
}

impl RedisSessionStore {
    /// Create a new session store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Generate Redis key for a refresh token
    fn token_key(token: &str) -> String {
        format!("{REFRESH_TOKEN_PREFIX}{token}")
    }

    /// Generate Redis key for a member's token set
    fn user_set_key(profile_id: Uuid) -> String {
        format!("{USER_TOKENS_PREFIX}{profile_id}")
    }

    async fn store(&self, profile_id: Uuid, token: &str, ttl_secs: i64) -> RedisResult<()> {
        let ttl = u64::try_from(ttl_secs).unwrap_or(0);
        let data = RefreshTokenData::new(profile_id);

        self.pool
            .set(&Self::token_key(token), &data, Some(ttl))
            .await?;

        // Track the token in the member's set so revoke_all can find it
        let set_key = Self::user_set_key(profile_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&set_key, token).await?;
        conn.expire::<_, ()>(&set_key, ttl_secs).await?;

        tracing::debug!(profile_id = %profile_id, "Stored refresh token");

        Ok(())
    }

    async fn take(&self, profile_id: Uuid, token: &str) -> RedisResult<bool> {
        let key = Self::token_key(token);
        let Some(data) = self.pool.get_value::<RefreshTokenData>(&key).await? else {
            return Ok(false);
        };

        // A token presented by the wrong member is as good as unknown
        if data.profile_id != profile_id {
            return Ok(false);
        }

        self.pool.delete(&key).await?;

        let set_key = Self::user_set_key(profile_id);
        let mut conn = self.pool.get().await?;
        conn.srem::<_, _, ()>(&set_key, token).await?;

        tracing::debug!(profile_id = %profile_id, "Consumed refresh token");

        Ok(true)
    }

    async fn revoke_all_tokens(&self, profile_id: Uuid) -> RedisResult<u32> {
        let set_key = Self::user_set_key(profile_id);
        let mut conn = self.pool.get().await?;

        let tokens: Vec<String> = conn.smembers(&set_key).await?;
        let count = u32::try_from(tokens.len()).unwrap_or(u32::MAX);

        if !tokens.is_empty() {
            let keys: Vec<String> = tokens.iter().map(|t| Self::token_key(t)).collect();
            let key_refs: Vec<&str> = keys.iter().map(String::as_str).collect();
            self.pool.delete_many(&key_refs).await?;
        }

        conn.del::<_, ()>(&set_key).await?;

        tracing::info!(
            profile_id = %profile_id,
            count = count,
            "Revoked all refresh tokens"
        );

        Ok(count)
    }
}

fn map_cache_error(e: RedisPoolError) -> DomainError {
    DomainError::CacheError(e.to_string())
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn store_refresh_token(
        &self,
        profile_id: Uuid,
        token: &str,
        ttl_secs: i64,
    ) -> Result<(), DomainError> {
        self.store(profile_id, token, ttl_secs)
            .await
            .map_err(map_cache_error)
    }

    async fn take_refresh_token(
        &self,
        profile_id: Uuid,
        token: &str,
    ) -> Result<bool, DomainError> {
        self.take(profile_id, token).await.map_err(map_cache_error)
    }

    async fn revoke_all(&self, profile_id: Uuid) -> Result<(), DomainError> {
        self.revoke_all_tokens(profile_id)
            .await
            .map(|_| ())
            .map_err(map_cache_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_data_creation() {
        let profile_id = Uuid::new_v4();
        let data = RefreshTokenData::new(profile_id);

        assert_eq!(data.profile_id, profile_id);
        assert!(data.created_at > 0);
    }

    #[test]
    fn test_key_generation() {
        assert_eq!(
            RedisSessionStore::token_key("abc123"),
            "refresh_token:abc123"
        );

        let profile_id = Uuid::nil();
        assert_eq!(
            RedisSessionStore::user_set_key(profile_id),
            format!("user_tokens:{profile_id}")
        );
    }
}
