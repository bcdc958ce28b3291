//! PostgreSQL implementation of ConnectionRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use greek_core::entities::Connection;
use greek_core::traits::{ConnectionRepository, RepoResult};
use greek_core::value_objects::MemberPair;

use crate::models::ConnectionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ConnectionRepository
#[derive(Clone)]
pub struct PgConnectionRepository {
    pool: PgPool,
}

impl PgConnectionRepository {
    /// Create a new PgConnectionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionRepository for PgConnectionRepository {
    #[instrument(skip(self))]
    async fn find_by_pair(&self, pair: &MemberPair) -> RepoResult<Option<Connection>> {
        let result = sqlx::query_as::<_, ConnectionModel>(
            r"
            SELECT id, profile_a, profile_b, created_at
            FROM connections
            WHERE profile_a = $1 AND profile_b = $2
            ",
        )
        .bind(pair.first())
        .bind(pair.second())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Connection::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_member(&self, member: Uuid) -> RepoResult<Vec<Connection>> {
        let results = sqlx::query_as::<_, ConnectionModel>(
            r"
            SELECT id, profile_a, profile_b, created_at
            FROM connections
            WHERE profile_a = $1 OR profile_b = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(member)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(Connection::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn create(&self, connection: &Connection) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO connections (id, profile_a, profile_b, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (profile_a, profile_b) DO NOTHING
            ",
        )
        .bind(connection.id)
        .bind(connection.pair.first())
        .bind(connection.pair.second())
        .bind(connection.created_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
