//! Entity-to-response mappers
//!
//! Public profile views apply the owner's privacy settings here, so no
//! handler can accidentally leak a hidden field.

use greek_core::entities::{Message, Notification, PostLike, Profile};

use super::responses::{
    CurrentProfileResponse, MessageResponse, NotificationPrefsResponse, NotificationResponse,
    PostLikeResponse, PrivacyResponse, ProfileResponse,
};

impl ProfileResponse {
    /// Build the public view of a profile, honoring its privacy settings
    #[must_use]
    pub fn public_view(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            email: profile
                .privacy
                .show_email
                .then(|| profile.email.clone()),
            university: profile.university.clone(),
            chapter: profile.chapter.clone(),
            grad_year: profile.grad_year,
            industry: profile.industry.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
            location: profile
                .privacy
                .show_location
                .then(|| profile.location.clone())
                .flatten(),
            major: profile.major.clone(),
            created_at: profile.created_at,
        }
    }
}

impl From<&Profile> for CurrentProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            name: profile.name.clone(),
            email: profile.email.clone(),
            university: profile.university.clone(),
            chapter: profile.chapter.clone(),
            grad_year: profile.grad_year,
            industry: profile.industry.clone(),
            bio: profile.bio.clone(),
            avatar_url: profile.avatar_url.clone(),
            location: profile.location.clone(),
            major: profile.major.clone(),
            notifications: NotificationPrefsResponse {
                email: profile.notifications.email,
                push: profile.notifications.push,
                connection: profile.notifications.connection,
                message: profile.notifications.message,
            },
            privacy: PrivacyResponse {
                visibility: profile.privacy.visibility.as_str().to_string(),
                show_email: profile.privacy.show_email,
                show_location: profile.privacy.show_location,
            },
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

impl From<&Message> for MessageResponse {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            sender_id: message.sender_id,
            receiver_id: message.receiver_id,
            content: message.content.clone(),
            read: message.read,
            created_at: message.created_at,
        }
    }
}

impl From<&PostLike> for PostLikeResponse {
    fn from(like: &PostLike) -> Self {
        Self {
            profile_id: like.profile_id,
            created_at: like.created_at,
        }
    }
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind.as_str().to_string(),
            title: notification.title.clone(),
            body: notification.body.clone(),
            data: notification.data.clone(),
            read: notification.read,
            created_at: notification.created_at,
        }
    }
}
