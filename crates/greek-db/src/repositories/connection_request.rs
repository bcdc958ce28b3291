//! PostgreSQL implementation of ConnectionRequestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use greek_core::entities::ConnectionRequest;
use greek_core::error::DomainError;
use greek_core::traits::{ConnectionRequestRepository, RepoResult};
use greek_core::value_objects::RequestStatus;

use crate::models::ConnectionRequestModel;

use super::error::{map_db_error, map_unique_violation, request_not_found};

/// PostgreSQL implementation of ConnectionRequestRepository
#[derive(Clone)]
pub struct PgConnectionRequestRepository {
    pool: PgPool,
}

impl PgConnectionRequestRepository {
    /// Create a new PgConnectionRequestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionRequestRepository for PgConnectionRequestRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<ConnectionRequest>> {
        let result = sqlx::query_as::<_, ConnectionRequestModel>(
            r"
            SELECT id, from_profile, to_profile, status, created_at, updated_at
            FROM connection_requests
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ConnectionRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending(&self, from: Uuid, to: Uuid) -> RepoResult<Option<ConnectionRequest>> {
        let result = sqlx::query_as::<_, ConnectionRequestModel>(
            r"
            SELECT id, from_profile, to_profile, status, created_at, updated_at
            FROM connection_requests
            WHERE from_profile = $1 AND to_profile = $2 AND status = 'pending'
            ",
        )
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ConnectionRequest::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_pending_incoming(&self, to: Uuid) -> RepoResult<Vec<ConnectionRequest>> {
        let results = sqlx::query_as::<_, ConnectionRequestModel>(
            r"
            SELECT id, from_profile, to_profile, status, created_at, updated_at
            FROM connection_requests
            WHERE to_profile = $1 AND status = 'pending'
            ORDER BY created_at DESC
            ",
        )
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results
            .into_iter()
            .map(ConnectionRequest::try_from)
            .collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, request: &ConnectionRequest) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO connection_requests (id, from_profile, to_profile, status, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(request.id)
        .bind(request.from_profile)
        .bind(request.to_profile)
        .bind(request.status.as_str())
        .bind(request.created_at)
        .bind(request.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::AlreadyRequested))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_status(&self, id: Uuid, status: RequestStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE connection_requests
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(request_not_found(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgConnectionRequestRepository>();
    }
}
