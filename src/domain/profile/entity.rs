use super::value_objects::{ProfileId, Username};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: ProfileId,
    pub user_id: Option<UserId>,
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl Profile {
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user_id == Some(user)
    }
}

/// Full profile edit, written as an upsert keyed on `user_id`.
#[derive(Debug, Clone)]
pub struct ProfileUpdate {
    pub user_id: UserId,
    pub username: Username,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// First-time username claim, written as an upsert keyed on the profile id.
#[derive(Debug, Clone)]
pub struct UsernameClaim {
    pub profile_id: ProfileId,
    pub username: Username,
    pub updated_at: DateTime<Utc>,
}
