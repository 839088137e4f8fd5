use serde::{Deserialize, Serialize};

use crate::models::{CharacterId, UserId};

/// Caller-facing selection of which profile to fetch. The default selector
/// (both fields empty) means the session's own profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchSelector {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub char_id: Option<CharacterId>,
}

impl FetchSelector {
    pub fn own() -> Self {
        Self::default()
    }

    pub fn user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            char_id: None,
        }
    }

    pub fn user_character(user_id: UserId, char_id: CharacterId) -> Self {
        Self {
            user_id: Some(user_id),
            char_id: Some(char_id),
        }
    }
}

/// A fully resolved request target, one variant per profile endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    /// The session's own profile.
    OwnProfile,
    /// Another user's profile (privileged inspect).
    UserProfile { user_id: UserId },
    /// A single character of another user (privileged inspect).
    UserCharacter {
        user_id: UserId,
        char_id: CharacterId,
    },
}

impl From<FetchSelector> for FetchTarget {
    /// A `char_id` is only meaningful together with a `user_id`; on its own
    /// it is dropped and the selector resolves to the own-profile endpoint.
    fn from(selector: FetchSelector) -> Self {
        match (selector.user_id, selector.char_id) {
            (None, None) => Self::OwnProfile,
            (None, Some(char_id)) => {
                tracing::debug!("Ignoring char_id {char_id} without a user_id");
                Self::OwnProfile
            }
            (Some(user_id), None) => Self::UserProfile { user_id },
            (Some(user_id), Some(char_id)) => Self::UserCharacter { user_id, char_id },
        }
    }
}

impl FetchTarget {
    /// Request path for this target. The backend expects trailing slashes.
    pub fn path(&self) -> String {
        match self {
            Self::OwnProfile => "/api/profile/".to_string(),
            Self::UserProfile { user_id } => {
                format!("/api/management/users/{user_id}/inspect/")
            }
            Self::UserCharacter { user_id, char_id } => {
                format!("/api/management/users/{user_id}/inspect/{char_id}/")
            }
        }
    }
}
