//! Profile entity - represents a registered member

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Who can see a profile in search and public lookups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    ConnectionsOnly,
    Private,
}

impl Visibility {
    /// String form matching the database column values
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::ConnectionsOnly => "connections",
            Self::Private => "private",
        }
    }

    /// Parse from the database column value, defaulting unknown values to public
    #[must_use]
    pub fn parse_or_default(s: &str) -> Self {
        match s {
            "connections" => Self::ConnectionsOnly,
            "private" => Self::Private,
            _ => Self::Public,
        }
    }
}

/// Per-member notification preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub email: bool,
    pub push: bool,
    pub connection: bool,
    pub message: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            email: true,
            push: true,
            connection: true,
            message: true,
        }
    }
}

/// Privacy settings controlling public profile exposure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivacySettings {
    pub visibility: Visibility,
    pub show_email: bool,
    pub show_location: bool,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            visibility: Visibility::Public,
            show_email: false,
            show_location: true,
        }
    }
}

/// Profile entity representing a member of the network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub university: Option<String>,
    pub chapter: Option<String>,
    pub grad_year: Option<i32>,
    pub industry: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub location: Option<String>,
    pub major: Option<String>,
    pub notifications: NotificationPrefs,
    pub privacy: PrivacySettings,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new Profile with required fields
    pub fn new(id: Uuid, name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            email,
            university: None,
            chapter: None,
            grad_year: None,
            industry: None,
            bio: None,
            avatar_url: None,
            location: None,
            major: None,
            notifications: NotificationPrefs::default(),
            privacy: PrivacySettings::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this profile should appear in search results
    #[inline]
    pub fn is_searchable(&self) -> bool {
        !matches!(self.privacy.visibility, Visibility::Private)
    }

    /// Record a mutation time
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
