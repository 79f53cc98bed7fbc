//! The session gate: turns the two session cookies into an identity.
//!
//! Every protected endpoint runs the same steps: read the access and refresh
//! tokens, exchange them with the auth service, reject on anything short of a
//! confirmed identity. Nothing is cached between requests.

use std::{collections::HashMap, hash::BuildHasher, sync::Arc};

use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedUser, SessionCredentials},
    error::ApplicationError,
    ports::identity::IdentityProvider,
};

pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";
pub const REFRESH_TOKEN_COOKIE: &str = "sb-refresh-token";

const UNAUTHORIZED: &str = "Unauthorized";

/// Read access to the cookies of the current request.
pub trait CookieSource {
    fn cookie(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> CookieSource for HashMap<String, String, S> {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

pub struct SessionGate {
    identity: Arc<dyn IdentityProvider>,
}

impl SessionGate {
    pub fn new(identity: Arc<dyn IdentityProvider>) -> Self {
        Self { identity }
    }

    pub fn credentials<C>(cookies: &C) -> Option<SessionCredentials>
    where
        C: CookieSource + ?Sized,
    {
        SessionCredentials::from_parts(
            cookies.cookie(ACCESS_TOKEN_COOKIE),
            cookies.cookie(REFRESH_TOKEN_COOKIE),
        )
    }

    /// Establish the caller's identity or fail with `Unauthorized`.
    ///
    /// Missing cookies are rejected before any remote call is made.
    pub async fn authenticate<C>(&self, cookies: &C) -> ApplicationResult<AuthenticatedUser>
    where
        C: CookieSource + Sync + ?Sized,
    {
        let credentials = Self::credentials(cookies)
            .ok_or_else(|| ApplicationError::unauthorized(UNAUTHORIZED))?;
        self.exchange(&credentials)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(UNAUTHORIZED))
    }

    /// Like [`Self::authenticate`] but an absent or rejected session is `None`.
    pub async fn authenticate_optional<C>(
        &self,
        cookies: &C,
    ) -> ApplicationResult<Option<AuthenticatedUser>>
    where
        C: CookieSource + Sync + ?Sized,
    {
        match Self::credentials(cookies) {
            Some(credentials) => self.exchange(&credentials).await,
            None => Ok(None),
        }
    }

    async fn exchange(
        &self,
        credentials: &SessionCredentials,
    ) -> ApplicationResult<Option<AuthenticatedUser>> {
        match self.identity.exchange_session(credentials).await {
            Ok(user) => Ok(user),
            Err(err) => {
                tracing::debug!(error = %err, "session exchange failed");
                Ok(None)
            }
        }
    }
}
