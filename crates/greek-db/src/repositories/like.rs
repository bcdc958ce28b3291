//! PostgreSQL implementation of LikeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use greek_core::entities::PostLike;
use greek_core::traits::{LikeRepository, RepoResult};

use crate::models::PostLikeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LikeRepository
#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
}

impl PgLikeRepository {
    /// Create a new PgLikeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    #[instrument(skip(self))]
    async fn find(&self, post_id: Uuid, profile_id: Uuid) -> RepoResult<Option<PostLike>> {
        let result = sqlx::query_as::<_, PostLikeModel>(
            r"
            SELECT post_id, profile_id, created_at
            FROM post_likes
            WHERE post_id = $1 AND profile_id = $2
            ",
        )
        .bind(post_id)
        .bind(profile_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PostLike::from))
    }

    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<PostLike>> {
        let results = sqlx::query_as::<_, PostLikeModel>(
            r"
            SELECT post_id, profile_id, created_at
            FROM post_likes
            WHERE post_id = $1
            ORDER BY created_at
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostLike::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, like: &PostLike) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO post_likes (post_id, profile_id, created_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (post_id, profile_id) DO NOTHING
            ",
        )
        .bind(like.post_id)
        .bind(like.profile_id)
        .bind(like.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, post_id: Uuid, profile_id: Uuid) -> RepoResult<()> {
        sqlx::query(
            r"
            DELETE FROM post_likes WHERE post_id = $1 AND profile_id = $2
            ",
        )
        .bind(post_id)
        .bind(profile_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
