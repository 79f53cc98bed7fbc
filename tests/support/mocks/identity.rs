// tests/support/mocks/identity.rs
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use builders_api::application::{
    ApplicationResult,
    dto::{AuthenticatedUser, SessionCredentials},
    error::ApplicationError,
    ports::identity::{IdentityProvider, MagicLinkRequest},
};
use builders_api::domain::user::{EmailAddress, UserId};
use once_cell::sync::Lazy;
use uuid::Uuid;

pub const VALID_ACCESS: &str = "valid-access";
pub const VALID_REFRESH: &str = "valid-refresh";
/// 認証サービス自体が失敗するアクセストークン
pub const BROKEN_ACCESS: &str = "broken-access";
pub const TEST_EMAIL: &str = "ada@example.com";

pub static TEST_USER_ID: Lazy<Uuid> = Lazy::new(|| {
    Uuid::parse_str("7d4f4c1e-2b1a-4c55-9a43-3f1f0f6f8a01").expect("valid uuid")
});
pub static OTHER_USER_ID: Lazy<Uuid> = Lazy::new(|| {
    Uuid::parse_str("0b9e2f3a-5c6d-4e7f-8a9b-0c1d2e3f4a5b").expect("valid uuid")
});

pub fn test_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId(*TEST_USER_ID),
        email: Some(TEST_EMAIL.into()),
        email_confirmed: true,
    }
}

pub fn other_user() -> AuthenticatedUser {
    AuthenticatedUser {
        id: UserId(*OTHER_USER_ID),
        email: Some("bob@example.com".into()),
        email_confirmed: true,
    }
}

/// 呼び出しを記録する認証サービスのモック
///
/// `VALID_ACCESS` / `VALID_REFRESH` の組だけを有効なセッションとして扱う。
pub struct RecordingIdentity {
    pub user: AuthenticatedUser,
    pub known_emails: Vec<String>,
    pub exchanges: AtomicUsize,
    pub magic_links: Mutex<Vec<MagicLinkRequest>>,
    pub verified_tokens: Mutex<Vec<(String, String)>>,
}

impl Default for RecordingIdentity {
    fn default() -> Self {
        Self {
            user: test_user(),
            known_emails: vec![TEST_EMAIL.into()],
            exchanges: AtomicUsize::new(0),
            magic_links: Mutex::new(Vec::new()),
            verified_tokens: Mutex::new(Vec::new()),
        }
    }
}

impl RecordingIdentity {
    pub fn with_user(user: AuthenticatedUser) -> Self {
        Self {
            user,
            ..Self::default()
        }
    }

    pub fn exchange_count(&self) -> usize {
        self.exchanges.load(Ordering::SeqCst)
    }

    pub fn sent_links(&self) -> Vec<MagicLinkRequest> {
        self.magic_links.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for RecordingIdentity {
    async fn exchange_session(
        &self,
        credentials: &SessionCredentials,
    ) -> ApplicationResult<Option<AuthenticatedUser>> {
        self.exchanges.fetch_add(1, Ordering::SeqCst);
        if credentials.access_token == BROKEN_ACCESS {
            return Err(ApplicationError::remote("auth service unavailable"));
        }
        if credentials.access_token == VALID_ACCESS && credentials.refresh_token == VALID_REFRESH
        {
            return Ok(Some(self.user.clone()));
        }
        Ok(None)
    }

    async fn send_magic_link(&self, request: MagicLinkRequest) -> ApplicationResult<()> {
        self.magic_links.lock().unwrap().push(request);
        Ok(())
    }

    async fn verify_email_token(&self, token_hash: &str, kind: &str) -> ApplicationResult<()> {
        if token_hash == "expired" {
            return Err(ApplicationError::remote("Email link is invalid or has expired"));
        }
        self.verified_tokens
            .lock()
            .unwrap()
            .push((token_hash.to_string(), kind.to_string()));
        Ok(())
    }

    async fn user_exists(&self, email: &EmailAddress) -> ApplicationResult<bool> {
        Ok(self.known_emails.iter().any(|known| email.matches(known)))
    }

    fn oauth_authorize_url(&self, provider: &str, redirect_to: &str) -> ApplicationResult<String> {
        Ok(format!(
            "https://auth.example.test/authorize?provider={provider}&redirect_to={redirect_to}"
        ))
    }
}
