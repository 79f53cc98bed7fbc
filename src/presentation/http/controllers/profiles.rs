// src/presentation/http/controllers/profiles.rs
use super::MultipartForm;
use crate::application::{
    commands::{ClaimUsernameCommand, SocialLinkInput, UpdateProfileCommand, UploadAvatarCommand},
    dto::{AvatarDto, ClaimedUsernameDto},
    error::ApplicationError,
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, MaybeAuthenticated};
use crate::presentation::http::response::{ApiResponse, SuccessResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Multipart};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SocialLinkRequest {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub username: Option<String>,
    pub full_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub social_links: Option<Vec<SocialLinkRequest>>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ClaimUsernameRequest {
    pub username: Option<String>,
}

/// Multipart body of an avatar upload.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct AvatarUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub avatar: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/profile",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile saved", body = SuccessResponse),
        (status = 400, description = "Username missing or taken", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Profiles"
)]
pub async fn update_profile(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<UpdateProfileRequest>,
) -> HttpResult<Json<SuccessResponse>> {
    let social_links = payload.social_links.map(|links| {
        links
            .into_iter()
            .map(|link| SocialLinkInput {
                platform: link.platform,
                url: link.url,
            })
            .collect()
    });

    state
        .services
        .profile_commands
        .update_profile(
            &user,
            UpdateProfileCommand {
                username: payload.username,
                full_name: payload.full_name,
                bio: payload.bio,
                avatar_url: payload.avatar_url,
                social_links,
            },
        )
        .await
        .into_http()?;
    Ok(Json(SuccessResponse::ok()))
}

#[utoipa::path(
    post,
    path = "/api/profile/claim",
    request_body = ClaimUsernameRequest,
    responses(
        (status = 200, description = "Username claimed", body = ApiResponse<ClaimedUsernameDto>),
        (status = 400, description = "Username missing or taken", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Profiles"
)]
pub async fn claim_username(
    Extension(state): Extension<HttpState>,
    MaybeAuthenticated(user): MaybeAuthenticated,
    JsonBody(payload): JsonBody<ClaimUsernameRequest>,
) -> HttpResult<Json<ApiResponse<ClaimedUsernameDto>>> {
    let user = user.ok_or_else(|| {
        HttpError::from_error(ApplicationError::unauthorized(
            "You must be logged in to claim a username",
        ))
    })?;

    state
        .services
        .profile_commands
        .claim_username(
            &user,
            ClaimUsernameCommand {
                username: payload.username,
            },
        )
        .await
        .into_http()
        .map(|claimed| Json(ApiResponse::ok(claimed)))
}

#[utoipa::path(
    post,
    path = "/api/profile/upload-avatar",
    request_body(content = AvatarUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Avatar stored and profile updated", body = ApiResponse<AvatarDto>),
        (status = 400, description = "No file, not an image, or larger than 2MB", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Profiles"
)]
pub async fn upload_avatar(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<Json<ApiResponse<AvatarDto>>> {
    let mut form = MultipartForm::read(multipart).await?;

    state
        .services
        .profile_commands
        .upload_avatar(
            &user,
            UploadAvatarCommand {
                file: form.take_file("avatar"),
            },
        )
        .await
        .into_http()
        .map(|avatar| Json(ApiResponse::ok(avatar)))
}
