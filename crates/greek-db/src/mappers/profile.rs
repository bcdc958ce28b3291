//! Profile entity <-> model mapper

use greek_core::entities::{NotificationPrefs, PrivacySettings, Profile, Visibility};

use crate::models::ProfileModel;

impl From<ProfileModel> for Profile {
    fn from(model: ProfileModel) -> Self {
        Profile {
            id: model.id,
            name: model.name,
            email: model.email,
            university: model.university,
            chapter: model.chapter,
            grad_year: model.grad_year,
            industry: model.industry,
            bio: model.bio,
            avatar_url: model.avatar_url,
            location: model.location,
            major: model.major,
            notifications: NotificationPrefs {
                email: model.email_notifications,
                push: model.push_notifications,
                connection: model.connection_notifications,
                message: model.message_notifications,
            },
            privacy: PrivacySettings {
                visibility: Visibility::parse_or_default(&model.profile_visibility),
                show_email: model.show_email,
                show_location: model.show_location,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
