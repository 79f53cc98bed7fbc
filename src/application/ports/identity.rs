// src/application/ports/identity.rs
use crate::application::{
    ApplicationResult,
    dto::{AuthenticatedUser, SessionCredentials},
};
use crate::domain::user::EmailAddress;
use async_trait::async_trait;

/// One-time sign-in link request sent through the auth service.
#[derive(Debug, Clone)]
pub struct MagicLinkRequest {
    pub email: EmailAddress,
    /// Whether the auth service may create the account if it does not exist.
    pub create_user: bool,
    pub redirect_to: Option<String>,
}

/// The hosted auth service. It issues, refreshes and verifies sessions; this
/// crate only forwards tokens to it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Exchange a token pair for the user it belongs to. `Ok(None)` means the
    /// service answered but did not recognise the session.
    async fn exchange_session(
        &self,
        credentials: &SessionCredentials,
    ) -> ApplicationResult<Option<AuthenticatedUser>>;

    async fn send_magic_link(&self, request: MagicLinkRequest) -> ApplicationResult<()>;

    /// Confirm an emailed one-time token (`token_hash` plus its `kind`, e.g.
    /// `email` or `signup`).
    async fn verify_email_token(&self, token_hash: &str, kind: &str) -> ApplicationResult<()>;

    /// Admin lookup: whether any account is registered under `email`.
    async fn user_exists(&self, email: &EmailAddress) -> ApplicationResult<bool>;

    /// Where to send the browser to start an OAuth sign-in with `provider`.
    fn oauth_authorize_url(&self, provider: &str, redirect_to: &str) -> ApplicationResult<String>;
}
