//! PostgreSQL implementation of CommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use greek_core::entities::PostComment;
use greek_core::traits::{CommentRepository, RepoResult};

use crate::models::PostCommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CommentRepository
#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
}

impl PgCommentRepository {
    /// Create a new PgCommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    #[instrument(skip(self))]
    async fn find_by_post(&self, post_id: Uuid) -> RepoResult<Vec<PostComment>> {
        let results = sqlx::query_as::<_, PostCommentModel>(
            r"
            SELECT id, post_id, author_id, content, created_at
            FROM post_comments
            WHERE post_id = $1
            ORDER BY created_at ASC
            ",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(PostComment::from).collect())
    }

    #[instrument(skip(self, comment))]
    async fn create(&self, comment: &PostComment) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO post_comments (id, post_id, author_id, content, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(comment.id)
        .bind(comment.post_id)
        .bind(comment.author_id)
        .bind(&comment.content)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
