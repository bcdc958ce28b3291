//! Profile service
//!
//! Profile reads, updates, settings, and directory search.

use tracing::{info, instrument};
use uuid::Uuid;

use greek_core::entities::{Profile, Visibility};
use greek_core::error::DomainError;
use greek_core::traits::ProfileQuery;
use greek_core::value_objects::MemberPair;

use crate::dto::{
    CurrentProfileResponse, ProfileResponse, SearchProfilesRequest, UpdateProfileRequest,
    UpdateSettingsRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

const DEFAULT_SEARCH_LIMIT: i64 = 50;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the authenticated member's own profile
    #[instrument(skip(self))]
    pub async fn get_current(&self, actor: Uuid) -> ServiceResult<CurrentProfileResponse> {
        let profile = self.require_profile(actor).await?;
        Ok(CurrentProfileResponse::from(&profile))
    }

    /// Get another member's profile as visible to the actor
    ///
    /// A private profile, or a connections-only profile the actor is not
    /// connected to, is indistinguishable from a missing one.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, actor: Uuid, id: Uuid) -> ServiceResult<ProfileResponse> {
        let profile = self.require_profile(id).await?;

        if id != actor {
            match profile.privacy.visibility {
                Visibility::Private => return Err(DomainError::ProfileNotFound(id).into()),
                Visibility::ConnectionsOnly => {
                    let pair = MemberPair::new(actor, id)?;
                    if self.ctx.connection_repo().find_by_pair(&pair).await?.is_none() {
                        return Err(DomainError::ProfileNotFound(id).into());
                    }
                }
                Visibility::Public => {}
            }
        }

        Ok(ProfileResponse::public_view(&profile))
    }

    /// Update the authenticated member's profile fields
    #[instrument(skip(self, request))]
    pub async fn update_profile(
        &self,
        actor: Uuid,
        request: UpdateProfileRequest,
    ) -> ServiceResult<CurrentProfileResponse> {
        let mut profile = self.require_profile(actor).await?;

        if let Some(name) = request.name {
            profile.name = name;
        }
        if let Some(university) = request.university {
            profile.university = Some(university);
        }
        if let Some(chapter) = request.chapter {
            profile.chapter = Some(chapter);
        }
        if let Some(grad_year) = request.grad_year {
            profile.grad_year = Some(grad_year);
        }
        if let Some(industry) = request.industry {
            profile.industry = Some(industry);
        }
        if let Some(bio) = request.bio {
            profile.bio = Some(bio);
        }
        if let Some(avatar_url) = request.avatar_url {
            profile.avatar_url = Some(avatar_url);
        }
        if let Some(location) = request.location {
            profile.location = Some(location);
        }
        if let Some(major) = request.major {
            profile.major = Some(major);
        }

        profile.touch();
        self.ctx.profile_repo().update(&profile).await?;

        info!(profile_id = %actor, "Profile updated");

        Ok(CurrentProfileResponse::from(&profile))
    }

    /// Update the authenticated member's notification and privacy settings
    #[instrument(skip(self, request))]
    pub async fn update_settings(
        &self,
        actor: Uuid,
        request: UpdateSettingsRequest,
    ) -> ServiceResult<CurrentProfileResponse> {
        let mut profile = self.require_profile(actor).await?;

        if let Some(prefs) = request.notifications {
            if let Some(email) = prefs.email {
                profile.notifications.email = email;
            }
            if let Some(push) = prefs.push {
                profile.notifications.push = push;
            }
            if let Some(connection) = prefs.connection {
                profile.notifications.connection = connection;
            }
            if let Some(message) = prefs.message {
                profile.notifications.message = message;
            }
        }

        if let Some(privacy) = request.privacy {
            if let Some(visibility) = privacy.visibility {
                profile.privacy.visibility = Visibility::parse_or_default(&visibility);
            }
            if let Some(show_email) = privacy.show_email {
                profile.privacy.show_email = show_email;
            }
            if let Some(show_location) = privacy.show_location {
                profile.privacy.show_location = show_location;
            }
        }

        profile.touch();
        self.ctx.profile_repo().update(&profile).await?;

        info!(profile_id = %actor, "Settings updated");

        Ok(CurrentProfileResponse::from(&profile))
    }

    /// Search the member directory
    ///
    /// Private profiles and the searcher's own profile never appear.
    #[instrument(skip(self, request))]
    pub async fn search(
        &self,
        actor: Uuid,
        request: SearchProfilesRequest,
    ) -> ServiceResult<Vec<ProfileResponse>> {
        let query = ProfileQuery {
            text: request.q.filter(|q| !q.trim().is_empty()),
            university: request.university,
            chapter: request.chapter,
            industry: request.industry,
            exclude: Some(actor),
            limit: request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT),
        };

        let profiles = self.ctx.profile_repo().search(&query).await?;

        Ok(profiles.iter().map(ProfileResponse::public_view).collect())
    }

    async fn require_profile(&self, id: Uuid) -> ServiceResult<Profile> {
        Ok(self
            .ctx
            .profile_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProfileNotFound(id))?)
    }
}
