//! Shared HTTP plumbing for the hosted Supabase project.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::application::error::ApplicationError;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("base url cannot carry path segments")]
    OpaqueBase,

    /// Non-success answer. `code` is the PostgREST / GoTrue error code when
    /// the body carried one.
    #[error("{message}")]
    Status {
        status: StatusCode,
        code: Option<String>,
        message: String,
    },
}

impl RemoteError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::Endpoint(_) | Self::OpaqueBase => None,
        }
    }

    /// Message suitable for a client-facing error body.
    pub fn message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<RemoteError> for ApplicationError {
    fn from(err: RemoteError) -> Self {
        Self::RemoteService(err.message())
    }
}

/// Which key a request is signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKey {
    /// Public anon key; used for end-user auth flows.
    Anon,
    /// Service role key; bypasses row level security. Callers must scope
    /// every query to the authenticated user themselves.
    ServiceRole,
}

pub struct SupabaseClient {
    http: Client,
    base_url: Url,
    anon_key: String,
    service_role_key: String,
}

impl SupabaseClient {
    pub fn new(
        base_url: &Url,
        anon_key: impl Into<String>,
        service_role_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_http(http, base_url, anon_key, service_role_key))
    }

    pub fn with_http(
        http: Client,
        base_url: &Url,
        anon_key: impl Into<String>,
        service_role_key: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Self {
            http,
            base_url,
            anon_key: anon_key.into(),
            service_role_key: service_role_key.into(),
        }
    }

    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, RemoteError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }

    /// Base URL extended by `segments`, each percent-encoded on its own so
    /// that `/`, `%` or dot segments inside a value cannot move the path.
    pub fn segment_endpoint<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, RemoteError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| RemoteError::OpaqueBase)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// A request authorised by `key` alone.
    pub fn request(&self, method: Method, url: Url, key: ApiKey) -> RequestBuilder {
        let key = self.key(key);
        self.http
            .request(method, url)
            .header("apikey", key)
            .bearer_auth(key)
    }

    /// A request made on behalf of a user holding `access_token`.
    pub fn user_request(&self, method: Method, url: Url, access_token: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
    }

    fn key(&self, key: ApiKey) -> &str {
        match key {
            ApiKey::Anon => &self.anon_key,
            ApiKey::ServiceRole => &self.service_role_key,
        }
    }
}

/// Send `request` and decode a JSON body.
pub async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, RemoteError> {
    let response = send(request).await?;
    Ok(response.json::<T>().await?)
}

/// Send `request`, discarding any body on success.
pub async fn send_empty(request: RequestBuilder) -> Result<(), RemoteError> {
    send(request).await.map(drop)
}

pub async fn send(request: RequestBuilder) -> Result<Response, RemoteError> {
    let response = request.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let (code, message) = error_details(status, &body);
    tracing::error!(status = status.as_u16(), code = ?code, message, "remote call failed");
    Err(RemoteError::Status {
        status,
        code,
        message,
    })
}

/// Pull the error code and message out of an error body. Auth, PostgREST and
/// Storage each use different field names for the same thing.
pub fn error_details(status: StatusCode, body: &str) -> (Option<String>, String) {
    let parsed = serde_json::from_str::<Value>(body).ok();

    let field = |names: &[&str]| -> Option<String> {
        let object = parsed.as_ref()?.as_object()?;
        names.iter().find_map(|name| match object.get(*name)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    };

    let code = field(&["code", "error_code", "statusCode"]);
    let message = field(&["message", "msg", "error_description", "error"])
        .or_else(|| (!body.trim().is_empty()).then(|| body.trim().to_string()))
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("remote service error")
                .to_string()
        });

    (code, message)
}
