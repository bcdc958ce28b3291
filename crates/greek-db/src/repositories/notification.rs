//! PostgreSQL implementation of NotificationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use greek_core::entities::Notification;
use greek_core::traits::{NotificationRepository, RepoResult};

use crate::models::NotificationModel;

use super::error::map_db_error;

/// PostgreSQL implementation of NotificationRepository
#[derive(Clone)]
pub struct PgNotificationRepository {
    pool: PgPool,
}

impl PgNotificationRepository {
    /// Create a new PgNotificationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl NotificationRepository for PgNotificationRepository {
    #[instrument(skip(self))]
    async fn find_by_profile(&self, profile_id: Uuid, limit: i64) -> RepoResult<Vec<Notification>> {
        let limit = limit.clamp(1, 100);

        let results = sqlx::query_as::<_, NotificationModel>(
            r"
            SELECT id, profile_id, kind, title, body, data, read, created_at
            FROM notifications
            WHERE profile_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            ",
        )
        .bind(profile_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Notification::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn unread_count(&self, profile_id: Uuid) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*) FROM notifications WHERE profile_id = $1 AND read = FALSE
            ",
        )
        .bind(profile_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self, notification))]
    async fn create(&self, notification: &Notification) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO notifications (id, profile_id, kind, title, body, data, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(notification.id)
        .bind(notification.profile_id)
        .bind(notification.kind.as_str())
        .bind(&notification.title)
        .bind(&notification.body)
        .bind(&notification.data)
        .bind(notification.read)
        .bind(notification.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_read(&self, profile_id: Uuid, id: Uuid) -> RepoResult<bool> {
        let result = sqlx::query(
            r"
            UPDATE notifications
            SET read = TRUE
            WHERE id = $1 AND profile_id = $2
            ",
        )
        .bind(id)
        .bind(profile_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self))]
    async fn mark_all_read(&self, profile_id: Uuid) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE notifications
            SET read = TRUE
            WHERE profile_id = $1 AND read = FALSE
            ",
        )
        .bind(profile_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
