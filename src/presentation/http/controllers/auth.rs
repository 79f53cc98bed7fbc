// src/presentation/http/controllers/auth.rs
use crate::application::{
    commands::{
        ConfirmSessionCommand, JoinCommand, SignInCommand, SignInOutcome, VerifyEmailCommand,
    },
    dto::{CurrentUserDto, JoinedMemberDto, SessionUserDto},
    services::{ACCESS_TOKEN_COOKIE, REFRESH_TOKEN_COOKIE},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{
    Authenticated, FormBody, JsonBody, MaybeAuthenticated, QueryParams,
};
use crate::presentation::http::response::{
    ApiResponse, SIGNIN_PAGE, SuccessResponse, VerificationResponse, found, signin_with,
};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, response::Response};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const DEFAULT_NEXT: &str = "/profile";

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckVerificationRequest {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ConfirmSessionRequest {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ConfirmEmailParams {
    pub token_hash: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInForm {
    pub email: Option<String>,
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct JoinForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub reason: Option<String>,
    pub username: Option<String>,
}

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .secure(true)
        .http_only(true)
        .build()
}

fn expired_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = session_cookie(name, String::new());
    cookie.make_removal();
    cookie
}

/// Local path to continue at after email confirmation. Anything that is not
/// a same-origin absolute path falls back to the profile page.
fn after_verification(next: Option<&str>) -> String {
    let next = next
        .filter(|n| n.starts_with('/') && !n.starts_with("//") && !n.starts_with("/\\"))
        .unwrap_or(DEFAULT_NEXT);
    let separator = if next.contains('?') { '&' } else { '?' };
    format!("{next}{separator}verified=true")
}

#[utoipa::path(
    get,
    path = "/api/auth/check",
    responses(
        (status = 200, description = "Identity of the current session", body = ApiResponse<CurrentUserDto>),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Auth"
)]
pub async fn check(Authenticated(user): Authenticated) -> Json<ApiResponse<CurrentUserDto>> {
    Json(ApiResponse::ok(CurrentUserDto {
        user: SessionUserDto::from(&user),
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/check-verification",
    request_body = CheckVerificationRequest,
    responses(
        (status = 200, description = "Whether the session owns a confirmed address", body = VerificationResponse)
    ),
    tag = "Auth"
)]
pub async fn check_verification(
    MaybeAuthenticated(user): MaybeAuthenticated,
    JsonBody(payload): JsonBody<CheckVerificationRequest>,
) -> Json<VerificationResponse> {
    let verified = match (user, payload.email.as_deref()) {
        (Some(user), Some(email)) => user.has_verified_email(email),
        _ => false,
    };

    Json(VerificationResponse {
        success: true,
        verified,
    })
}

#[utoipa::path(
    post,
    path = "/api/auth/confirm",
    request_body = ConfirmSessionRequest,
    responses(
        (status = 200, description = "Session cookies set", body = SuccessResponse),
        (status = 400, description = "Token pair incomplete", body = ErrorResponse),
        (status = 500, description = "Auth service rejected the tokens", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn confirm_session(
    Extension(state): Extension<HttpState>,
    jar: CookieJar,
    JsonBody(payload): JsonBody<ConfirmSessionRequest>,
) -> HttpResult<(CookieJar, Json<SuccessResponse>)> {
    let (credentials, _user) = state
        .services
        .auth_commands
        .confirm_session(ConfirmSessionCommand {
            access_token: payload.access_token,
            refresh_token: payload.refresh_token,
        })
        .await
        .into_http()?;

    let jar = jar
        .add(session_cookie(ACCESS_TOKEN_COOKIE, credentials.access_token))
        .add(session_cookie(REFRESH_TOKEN_COOKIE, credentials.refresh_token));

    Ok((jar, Json(SuccessResponse::ok())))
}

#[utoipa::path(
    get,
    path = "/api/auth/confirm",
    params(ConfirmEmailParams),
    responses(
        (status = 302, description = "To `next` with `verified=true`, or to the sign-in page with an `error`")
    ),
    tag = "Auth"
)]
pub async fn confirm_email(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ConfirmEmailParams>,
) -> Response {
    let result = state
        .services
        .auth_commands
        .verify_email(VerifyEmailCommand {
            token_hash: params.token_hash,
            kind: params.kind,
        })
        .await;

    match result {
        Ok(()) => found(after_verification(params.next.as_deref())),
        Err(err) => found(signin_with("error", &err.message())),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/signin",
    request_body(content = SignInForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 302, description = "To the OAuth provider, or back to the sign-in page with `success` or `error`")
    ),
    tag = "Auth"
)]
pub async fn sign_in(
    Extension(state): Extension<HttpState>,
    FormBody(form): FormBody<SignInForm>,
) -> Response {
    let result = state
        .services
        .auth_commands
        .sign_in(SignInCommand {
            email: form.email,
            provider: form.provider,
        })
        .await;

    match result {
        Ok(SignInOutcome::Provider(url)) => found(url),
        Ok(SignInOutcome::LinkSent) => found(signin_with("success", "true")),
        Err(err) => found(signin_with("error", &err.message())),
    }
}

#[utoipa::path(
    post,
    path = "/api/auth/signout",
    responses(
        (status = 302, description = "Session cookies cleared; to the sign-in page")
    ),
    tag = "Auth"
)]
pub async fn sign_out(jar: CookieJar) -> (CookieJar, Response) {
    let jar = jar
        .add(expired_cookie(ACCESS_TOKEN_COOKIE))
        .add(expired_cookie(REFRESH_TOKEN_COOKIE));
    (jar, found(SIGNIN_PAGE))
}

#[utoipa::path(
    post,
    path = "/api/join",
    request_body(content = JoinForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Application recorded and sign-in link sent", body = ApiResponse<JoinedMemberDto>),
        (status = 400, description = "Field validation failed", body = ErrorResponse),
        (status = 500, description = "Workspace or auth service failure", body = ErrorResponse)
    ),
    tag = "Auth"
)]
pub async fn join(
    Extension(state): Extension<HttpState>,
    FormBody(form): FormBody<JoinForm>,
) -> HttpResult<Json<ApiResponse<JoinedMemberDto>>> {
    state
        .services
        .auth_commands
        .join(JoinCommand {
            name: form.name,
            email: form.email,
            reason: form.reason,
            username: form.username,
        })
        .await
        .into_http()
        .map(|member| Json(ApiResponse::ok(member)))
}
