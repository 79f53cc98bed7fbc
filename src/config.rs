// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;
use url::Url;

#[derive(Clone, Debug)]
pub struct AppConfig {
    listen_addr: String,
    supabase_url: Url,
    supabase_anon_key: String,
    supabase_service_role_key: String,
    notion_token: String,
    notion_database_id: String,
    auth_redirect_url: String,
    allowed_origins: Vec<String>,
    http_timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_NOTION_DATABASE_ID: &str = "1723f8eda070805daf58f1a9ce5a5982";
const DEFAULT_AUTH_REDIRECT_URL: &str = "http://localhost:1234/api/auth/callback";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:1234";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

impl AppConfig {
    /// Build configuration from environment variables, after loading a
    /// `.env` file when one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| optional(key).ok_or(ConfigError::Missing(key));

        let supabase_url = required("SUPABASE_URL")?;
        let supabase_url = Url::parse(supabase_url.trim())
            .map_err(|err| ConfigError::Invalid(format!("SUPABASE_URL: {err}")))?;
        if supabase_url.cannot_be_a_base() {
            return Err(ConfigError::Invalid(
                "SUPABASE_URL must be an absolute http(s) URL".into(),
            ));
        }

        let http_timeout_secs = match optional("HTTP_TIMEOUT_SECONDS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "HTTP_TIMEOUT_SECONDS must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_HTTP_TIMEOUT_SECS,
        };

        let allowed_origins: Vec<String> = optional("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.into())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Ok(Self {
            listen_addr: optional("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.into()),
            supabase_url,
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            supabase_service_role_key: required("SUPABASE_SERVICE_ROLE_KEY")?,
            notion_token: required("NOTION_TOKEN")?,
            notion_database_id: optional("NOTION_DATABASE_ID")
                .unwrap_or_else(|| DEFAULT_NOTION_DATABASE_ID.into()),
            auth_redirect_url: optional("AUTH_REDIRECT_URL")
                .unwrap_or_else(|| DEFAULT_AUTH_REDIRECT_URL.into()),
            allowed_origins,
            http_timeout: Duration::from_secs(http_timeout_secs),
        })
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub const fn supabase_url(&self) -> &Url {
        &self.supabase_url
    }

    pub fn supabase_anon_key(&self) -> &str {
        &self.supabase_anon_key
    }

    pub fn supabase_service_role_key(&self) -> &str {
        &self.supabase_service_role_key
    }

    pub fn notion_token(&self) -> &str {
        &self.notion_token
    }

    pub fn notion_database_id(&self) -> &str {
        &self.notion_database_id
    }

    /// Where magic links and OAuth flows send the browser back to.
    pub fn auth_redirect_url(&self) -> &str {
        &self.auth_redirect_url
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub const fn http_timeout(&self) -> Duration {
        self.http_timeout
    }
}
