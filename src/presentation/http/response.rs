//! Success envelopes and browser redirects.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// `{ "success": true }` for operations without a payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub const fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VerificationResponse {
    pub success: bool,
    pub verified: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

pub const SIGNIN_PAGE: &str = "/signin";

/// 302 to `location`.
pub fn found(location: impl Into<String>) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.into())]).into_response()
}

/// 301 to `location`.
pub fn moved_permanently(location: impl Into<String>) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, location.into())],
    )
        .into_response()
}

/// Sign-in page carrying one URL-encoded query parameter, e.g.
/// `/signin?error=No%20account...`.
pub fn signin_with(key: &str, value: &str) -> String {
    let query = serde_urlencoded::to_string([(key, value)]).unwrap_or_default();
    format!("{SIGNIN_PAGE}?{query}")
}
