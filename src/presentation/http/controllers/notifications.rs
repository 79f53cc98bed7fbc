// src/presentation/http/controllers/notifications.rs
use crate::application::dto::NotificationListDto;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::response::{ApiResponse, SuccessResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};

#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Latest notifications of the caller", body = ApiResponse<NotificationListDto>),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<ApiResponse<NotificationListDto>>> {
    state
        .services
        .notification_queries
        .recent_for(&user)
        .await
        .into_http()
        .map(|list| Json(ApiResponse::ok(list)))
}

#[utoipa::path(
    post,
    path = "/api/notifications/mark-read",
    responses(
        (status = 200, description = "All unread notifications marked read", body = SuccessResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Notifications"
)]
pub async fn mark_read(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<SuccessResponse>> {
    state
        .services
        .notification_commands
        .mark_all_read(&user)
        .await
        .into_http()?;
    Ok(Json(SuccessResponse::ok()))
}
