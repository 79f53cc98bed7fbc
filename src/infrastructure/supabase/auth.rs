//! GoTrue adapter behind the `IdentityProvider` port.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::client::{ApiKey, RemoteError, SupabaseClient, send_empty, send_json};
use crate::{
    application::{
        ApplicationResult,
        dto::{AuthenticatedUser, SessionCredentials},
        error::ApplicationError,
        ports::identity::{IdentityProvider, MagicLinkRequest},
    },
    domain::user::{EmailAddress, UserId},
};

const ADMIN_PAGE_SIZE: usize = 200;

#[derive(Debug, Deserialize)]
struct UserRecord {
    id: Uuid,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    email_confirmed_at: Option<String>,
}

impl UserRecord {
    fn into_identity(self) -> Option<AuthenticatedUser> {
        Some(AuthenticatedUser {
            id: UserId::new(self.id).ok()?,
            email: self.email.filter(|e| !e.is_empty()),
            email_confirmed: self.email_confirmed_at.is_some_and(|at| !at.is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct RefreshedSession {
    user: UserRecord,
}

#[derive(Debug, Deserialize)]
struct AdminUserPage {
    #[serde(default)]
    users: Vec<UserRecord>,
}

pub struct SupabaseIdentityProvider {
    client: Arc<SupabaseClient>,
}

impl SupabaseIdentityProvider {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    async fn current_user(&self, access_token: &str) -> Result<Option<UserRecord>, RemoteError> {
        let url = self.client.endpoint("auth/v1/user")?;
        let request = self.client.user_request(Method::GET, url, access_token);
        match send_json::<UserRecord>(request).await {
            Ok(user) => Ok(Some(user)),
            Err(err) if is_rejection(&err) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Refreshed tokens are not handed back to the browser; the next request
    /// refreshes again until the client stores a new pair.
    async fn refreshed_user(&self, refresh_token: &str) -> Result<Option<UserRecord>, RemoteError> {
        let mut url = self.client.endpoint("auth/v1/token")?;
        url.set_query(Some("grant_type=refresh_token"));
        let request = self
            .client
            .request(Method::POST, url, ApiKey::Anon)
            .json(&json!({ "refresh_token": refresh_token }));

        match send_json::<RefreshedSession>(request).await {
            Ok(session) => Ok(Some(session.user)),
            Err(err) if is_rejection(&err) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

/// 4xx answers mean the token was looked at and refused.
fn is_rejection(err: &RemoteError) -> bool {
    err.status().is_some_and(|status| status.is_client_error())
}

#[async_trait]
impl IdentityProvider for SupabaseIdentityProvider {
    async fn exchange_session(
        &self,
        credentials: &SessionCredentials,
    ) -> ApplicationResult<Option<AuthenticatedUser>> {
        let user = match self.current_user(&credentials.access_token).await? {
            Some(user) => Some(user),
            None => {
                tracing::debug!("access token rejected, trying refresh token");
                self.refreshed_user(&credentials.refresh_token).await?
            }
        };

        Ok(user.and_then(UserRecord::into_identity))
    }

    async fn send_magic_link(&self, request: MagicLinkRequest) -> ApplicationResult<()> {
        let mut url = self.client.endpoint("auth/v1/otp")?;
        if let Some(redirect_to) = &request.redirect_to {
            url.query_pairs_mut().append_pair("redirect_to", redirect_to);
        }

        let body = json!({
            "email": request.email.as_str(),
            "create_user": request.create_user,
        });
        send_empty(self.client.request(Method::POST, url, ApiKey::Anon).json(&body)).await?;

        tracing::info!(create_user = request.create_user, "magic link sent");
        Ok(())
    }

    async fn verify_email_token(&self, token_hash: &str, kind: &str) -> ApplicationResult<()> {
        let url = self.client.endpoint("auth/v1/verify")?;
        let body = json!({ "type": kind, "token_hash": token_hash });
        send_empty(self.client.request(Method::POST, url, ApiKey::Anon).json(&body)).await?;
        Ok(())
    }

    /// Walks every admin user page; the listing is paged and a single page
    /// misses accounts once the project grows.
    async fn user_exists(&self, email: &EmailAddress) -> ApplicationResult<bool> {
        for page in 1.. {
            let mut url = self.client.endpoint("auth/v1/admin/users")?;
            url.query_pairs_mut()
                .append_pair("page", &page.to_string())
                .append_pair("per_page", &ADMIN_PAGE_SIZE.to_string());

            let request = self.client.request(Method::GET, url, ApiKey::ServiceRole);
            let listing: AdminUserPage = send_json(request).await?;

            if listing
                .users
                .iter()
                .filter_map(|user| user.email.as_deref())
                .any(|candidate| email.matches(candidate))
            {
                return Ok(true);
            }
            if listing.users.len() < ADMIN_PAGE_SIZE {
                break;
            }
        }
        Ok(false)
    }

    fn oauth_authorize_url(&self, provider: &str, redirect_to: &str) -> ApplicationResult<String> {
        if provider.is_empty()
            || !provider
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ApplicationError::validation(format!(
                "Unsupported provider: {provider}"
            )));
        }

        let mut url = self.client.endpoint("auth/v1/authorize")?;
        url.query_pairs_mut()
            .append_pair("provider", provider)
            .append_pair("redirect_to", redirect_to);
        Ok(url.into())
    }
}
