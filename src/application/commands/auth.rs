use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, JoinedMemberDto, SessionCredentials},
        error::{ApplicationError, ApplicationResult, FieldErrors},
        ports::{
            identity::{IdentityProvider, MagicLinkRequest},
            workspace::{JoinApplication, WorkspaceDirectory},
        },
    },
    domain::user::EmailAddress,
};

const UNKNOWN_ACCOUNT: &str =
    "No account associated with this email. Please use the link below to join the community...";
const JOIN_FAILED: &str = "Something went wrong. Please try again...";

pub struct SignInCommand {
    pub email: Option<String>,
    pub provider: Option<String>,
}

/// Where the browser goes after a successful sign-in request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignInOutcome {
    /// Continue at the OAuth provider.
    Provider(String),
    /// A one-time link was emailed.
    LinkSent,
}

pub struct ConfirmSessionCommand {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

pub struct VerifyEmailCommand {
    pub token_hash: Option<String>,
    pub kind: Option<String>,
}

pub struct JoinCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub reason: Option<String>,
    pub username: Option<String>,
}

pub struct AuthCommandService {
    identity: Arc<dyn IdentityProvider>,
    workspace: Arc<dyn WorkspaceDirectory>,
    redirect_url: String,
}

impl AuthCommandService {
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        workspace: Arc<dyn WorkspaceDirectory>,
        redirect_url: impl Into<String>,
    ) -> Self {
        Self {
            identity,
            workspace,
            redirect_url: redirect_url.into(),
        }
    }

    pub async fn sign_in(&self, command: SignInCommand) -> ApplicationResult<SignInOutcome> {
        if let Some(provider) = command.provider.filter(|p| !p.trim().is_empty()) {
            let url = self
                .identity
                .oauth_authorize_url(provider.trim(), &self.redirect_url)?;
            return Ok(SignInOutcome::Provider(url));
        }

        let email = command
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ApplicationError::validation("Email is required!"))?;
        let email = EmailAddress::parse(&email)?;

        if !self.identity.user_exists(&email).await? {
            return Err(ApplicationError::validation(UNKNOWN_ACCOUNT));
        }

        self.identity
            .send_magic_link(MagicLinkRequest {
                email,
                create_user: false,
                redirect_to: Some(self.redirect_url.clone()),
            })
            .await?;

        Ok(SignInOutcome::LinkSent)
    }

    /// Validate a token pair handed over by the browser so it can be stored
    /// in the session cookies.
    pub async fn confirm_session(
        &self,
        command: ConfirmSessionCommand,
    ) -> ApplicationResult<(SessionCredentials, AuthenticatedUser)> {
        let credentials = SessionCredentials::from_parts(
            command.access_token.as_deref(),
            command.refresh_token.as_deref(),
        )
        .ok_or_else(|| ApplicationError::validation("Invalid authentication credentials"))?;

        let user = self
            .identity
            .exchange_session(&credentials)
            .await?
            .ok_or_else(|| ApplicationError::remote("Failed to authenticate"))?;

        tracing::info!(user_id = %user.id, "session confirmed");
        Ok((credentials, user))
    }

    pub async fn verify_email(&self, command: VerifyEmailCommand) -> ApplicationResult<()> {
        let (Some(token_hash), Some(kind)) = (
            command.token_hash.filter(|t| !t.is_empty()),
            command.kind.filter(|k| !k.is_empty()),
        ) else {
            return Err(ApplicationError::validation("Invalid confirmation link"));
        };

        self.identity.verify_email_token(&token_hash, &kind).await
    }

    /// Record a join application in the workspace, then send the account
    /// creation link. The workspace entry stays when the second step fails.
    pub async fn join(&self, command: JoinCommand) -> ApplicationResult<JoinedMemberDto> {
        let application = validate_join(command)?;

        if let Err(err) = self.workspace.record_application(&application).await {
            tracing::error!(error = %err, "failed to record join application");
            return Err(ApplicationError::remote(JOIN_FAILED));
        }

        self.identity
            .send_magic_link(MagicLinkRequest {
                email: EmailAddress::parse(&application.email)?,
                create_user: true,
                redirect_to: None,
            })
            .await?;

        Ok(JoinedMemberDto {
            name: application.name,
            email: application.email,
            username: application.username,
        })
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

fn validate_join(command: JoinCommand) -> ApplicationResult<JoinApplication> {
    let name = trimmed(command.name);
    let email = trimmed(command.email);
    let reason = trimmed(command.reason);
    let username = trimmed(command.username);

    let mut errors = FieldErrors::new();

    if name.is_empty() {
        errors.insert("name".into(), "Please tell us your name".into());
    } else if name.chars().count() < 2 {
        errors.insert("name".into(), "Name must be at least 2 characters".into());
    }

    if let Err(err) = EmailAddress::parse(&email) {
        errors.insert("email".into(), err.message().to_string());
    }

    if reason.is_empty() {
        errors.insert(
            "reason".into(),
            "Please share what excites you about the program".into(),
        );
    } else if reason.chars().count() < 10 {
        errors.insert(
            "reason".into(),
            "Please provide a bit more detail (at least 10 characters)".into(),
        );
    }

    if username.is_empty() {
        errors.insert("username".into(), "Username is required".into());
    }

    if !errors.is_empty() {
        return Err(ApplicationError::InvalidFields(errors));
    }

    Ok(JoinApplication {
        name,
        email,
        reason,
        username,
    })
}
