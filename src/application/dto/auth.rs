use crate::domain::{profile::ProfileId, user::UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity established by the session gate for the current request.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: Option<String>,
    pub email_confirmed: bool,
}

impl AuthenticatedUser {
    pub fn profile_id(&self) -> ProfileId {
        ProfileId::from(self.id)
    }

    /// True when the session belongs to `email` and that address is confirmed.
    pub fn has_verified_email(&self, email: &str) -> bool {
        self.email_confirmed
            && self
                .email
                .as_deref()
                .is_some_and(|own| own.eq_ignore_ascii_case(email.trim()))
    }
}

/// Access/refresh token pair carried in the session cookies.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredentials {
    pub access_token: String,
    pub refresh_token: String,
}

impl SessionCredentials {
    /// `None` unless both tokens are present and non-empty.
    pub fn from_parts(access_token: Option<&str>, refresh_token: Option<&str>) -> Option<Self> {
        let access_token = access_token.filter(|t| !t.is_empty())?;
        let refresh_token = refresh_token.filter(|t| !t.is_empty())?;
        Some(Self {
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
        })
    }
}

impl fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionUserDto {
    pub id: Uuid,
    pub email: Option<String>,
    pub email_confirmed: bool,
}

impl From<&AuthenticatedUser> for SessionUserDto {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: user.id.0,
            email: user.email.clone(),
            email_confirmed: user.email_confirmed,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CurrentUserDto {
    pub user: SessionUserDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerificationDto {
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JoinedMemberDto {
    pub name: String,
    pub email: String,
    pub username: String,
}
