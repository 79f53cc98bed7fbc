// src/presentation/http/extractors.rs
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::ApplicationError,
        services::{CookieSource, SessionGate},
    },
    presentation::http::state::HttpState,
};
use axum::{
    Extension, Form, Json,
    extract::{FromRequest, FromRequestParts, Query},
    http::request::Parts,
};
use axum_extra::extract::cookie::{Cookie, CookieJar};

use super::error::{HttpError, IntoHttpResult};

impl CookieSource for CookieJar {
    fn cookie(&self, name: &str) -> Option<&str> {
        self.get(name).map(Cookie::value)
    }
}

/// Caller identity established by the session gate; rejects with 401.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthenticatedUser);

/// Like [`Authenticated`], but a missing or rejected session yields `None`.
#[derive(Debug, Clone)]
pub struct MaybeAuthenticated(pub Option<AuthenticatedUser>);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| {
            HttpError::from_error(ApplicationError::infrastructure(
                "application state missing",
            ))
        })?;
    Ok(app_state)
}

fn gate(state: &HttpState) -> &SessionGate {
    &state.services.session_gate
}

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let cookies = CookieJar::from_headers(&parts.headers);
        let user = gate(&app_state).authenticate(&cookies).await.into_http()?;
        Ok(Self(user))
    }
}

impl<S> FromRequestParts<S> for MaybeAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let cookies = CookieJar::from_headers(&parts.headers);
        let user = gate(&app_state)
            .authenticate_optional(&cookies)
            .await
            .into_http()?;
        Ok(Self(user))
    }
}

/// JSON body whose rejections use the standard error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(HttpError))]
pub struct JsonBody<T>(pub T);

/// URL-encoded form body with the standard error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(Form), rejection(HttpError))]
pub struct FormBody<T>(pub T);

#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(HttpError))]
pub struct QueryParams<T>(pub T);
