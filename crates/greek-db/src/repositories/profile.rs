//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use greek_core::entities::Profile;
use greek_core::error::DomainError;
use greek_core::traits::{ProfileQuery, ProfileRepository, RepoResult};

use crate::models::ProfileModel;

use super::error::{map_db_error, map_unique_violation, profile_not_found};

const PROFILE_COLUMNS: &str = "id, name, email, university, chapter, grad_year, industry, bio, \
     avatar_url, location, major, email_notifications, push_notifications, \
     connection_notifications, message_notifications, profile_visibility, show_email, \
     show_location, created_at, updated_at";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Profile>> {
        let result = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Profile::from))
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM profiles WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, profile: &Profile, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO profiles (
                id, name, email, password_hash, university, chapter, grad_year, industry,
                bio, avatar_url, location, major,
                email_notifications, push_notifications, connection_notifications,
                message_notifications, profile_visibility, show_email, show_location,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12,
                    $13, $14, $15, $16, $17, $18, $19, $20, $21)
            ",
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(password_hash)
        .bind(&profile.university)
        .bind(&profile.chapter)
        .bind(profile.grad_year)
        .bind(&profile.industry)
        .bind(&profile.bio)
        .bind(&profile.avatar_url)
        .bind(&profile.location)
        .bind(&profile.major)
        .bind(profile.notifications.email)
        .bind(profile.notifications.push)
        .bind(profile.notifications.connection)
        .bind(profile.notifications.message)
        .bind(profile.privacy.visibility.as_str())
        .bind(profile.privacy.show_email)
        .bind(profile.privacy.show_location)
        .bind(profile.created_at)
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, profile: &Profile) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE profiles
            SET name = $2, university = $3, chapter = $4, grad_year = $5, industry = $6,
                bio = $7, avatar_url = $8, location = $9, major = $10,
                email_notifications = $11, push_notifications = $12,
                connection_notifications = $13, message_notifications = $14,
                profile_visibility = $15, show_email = $16, show_location = $17,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(profile.id)
        .bind(&profile.name)
        .bind(&profile.university)
        .bind(&profile.chapter)
        .bind(profile.grad_year)
        .bind(&profile.industry)
        .bind(&profile.bio)
        .bind(&profile.avatar_url)
        .bind(&profile.location)
        .bind(&profile.major)
        .bind(profile.notifications.email)
        .bind(profile.notifications.push)
        .bind(profile.notifications.connection)
        .bind(profile.notifications.message)
        .bind(profile.privacy.visibility.as_str())
        .bind(profile.privacy.show_email)
        .bind(profile.privacy.show_location)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(profile.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Uuid) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM profiles WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &ProfileQuery) -> RepoResult<Vec<Profile>> {
        let limit = query.limit.clamp(1, 100);

        let results = sqlx::query_as::<_, ProfileModel>(&format!(
            r"
            SELECT {PROFILE_COLUMNS}
            FROM profiles
            WHERE profile_visibility <> 'private'
              AND ($1::uuid IS NULL OR id <> $1)
              AND ($2::text IS NULL OR name ILIKE '%' || $2 || '%')
              AND ($3::text IS NULL OR university = $3)
              AND ($4::text IS NULL OR chapter = $4)
              AND ($5::text IS NULL OR industry = $5)
            ORDER BY name
            LIMIT $6
            "
        ))
        .bind(query.exclude)
        .bind(&query.text)
        .bind(&query.university)
        .bind(&query.chapter)
        .bind(&query.industry)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Profile::from).collect())
    }
}
