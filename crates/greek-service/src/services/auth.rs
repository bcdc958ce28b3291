//! Authentication service
//!
//! Handles member registration, login, token refresh, and logout.
//! Refresh tokens are single-use: every refresh consumes the presented
//! token and issues a new pair.

use tracing::{info, instrument, warn};
use uuid::Uuid;

use greek_common::auth::validate_password_strength;
use greek_common::AppError;
use greek_core::entities::Profile;
use greek_core::error::DomainError;

use crate::dto::{
    AuthResponse, CurrentProfileResponse, LoginRequest, LogoutRequest, RefreshTokenRequest,
    RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new member
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.profile_repo().email_exists(&request.email).await? {
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self
            .ctx
            .password_service()
            .hash(&request.password)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let profile = Profile::new(self.ctx.generate_id(), request.name, request.email);

        self.ctx
            .profile_repo()
            .create(&profile, &password_hash)
            .await?;

        info!(profile_id = %profile.id, "Member registered");

        self.issue_tokens(&profile).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let profile = self
            .ctx
            .profile_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .profile_repo()
            .get_password_hash(profile.id)
            .await?
            .ok_or_else(|| {
                warn!(profile_id = %profile.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .map_err(|e| {
                warn!(profile_id = %profile.id, "Login failed: invalid password");
                ServiceError::App(e)
            })?;

        info!(profile_id = %profile.id, "Member logged in");

        self.issue_tokens(&profile).await
    }

    /// Rotate tokens using a refresh token
    ///
    /// The presented token is consumed; a token that was already used
    /// (or never issued) is rejected.
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(
        &self,
        request: RefreshTokenRequest,
    ) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;
        let profile_id = claims.profile_id().map_err(ServiceError::from)?;

        let consumed = self
            .ctx
            .session_store()
            .take_refresh_token(profile_id, &request.refresh_token)
            .await?;

        if !consumed {
            warn!(profile_id = %profile_id, "Refresh rejected: token not in session store");
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        let profile = self
            .ctx
            .profile_repo()
            .find_by_id(profile_id)
            .await?
            .ok_or(DomainError::ProfileNotFound(profile_id))?;

        info!(profile_id = %profile.id, "Tokens refreshed");

        self.issue_tokens(&profile).await
    }

    /// Logout by revoking refresh tokens
    ///
    /// With a specific token, only that session ends; without one, every
    /// session for the member is revoked.
    #[instrument(skip(self, request))]
    pub async fn logout(&self, profile_id: Uuid, request: LogoutRequest) -> ServiceResult<()> {
        match request.refresh_token {
            Some(token) => {
                self.ctx
                    .session_store()
                    .take_refresh_token(profile_id, &token)
                    .await?;
            }
            None => {
                self.ctx.session_store().revoke_all(profile_id).await?;
            }
        }

        info!(profile_id = %profile_id, "Member logged out");
        Ok(())
    }

    /// Validate an access token and return the profile ID
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<Uuid> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.profile_id().map_err(ServiceError::from)
    }

    async fn issue_tokens(&self, profile: &Profile) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(profile.id)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx
            .session_store()
            .store_refresh_token(
                profile.id,
                &token_pair.refresh_token,
                self.ctx.jwt_service().refresh_token_expiry(),
            )
            .await?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentProfileResponse::from(profile),
        ))
    }
}
