// src/presentation/http/controllers/projects.rs
use super::MultipartForm;
use crate::application::{
    commands::{UpdateProjectCommand, UploadThumbnailCommand},
    dto::{ProjectDto, ThumbnailDto},
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody};
use crate::presentation::http::response::ApiResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Multipart, Path},
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub github_url: Option<String>,
    pub demo_url: Option<String>,
    /// Anything other than an array of strings is stored as an empty list.
    #[schema(value_type = Option<Vec<String>>)]
    pub tech_stack: Option<Value>,
    pub lessons_learned: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// Multipart body of a thumbnail upload.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
#[schema(rename_all = "camelCase")]
pub struct ThumbnailUploadForm {
    #[schema(value_type = String, format = Binary)]
    pub thumbnail: Vec<u8>,
    pub project_id: Option<String>,
}

fn tech_stack(value: Option<Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

#[utoipa::path(
    put,
    path = "/api/projects/{id}",
    params(("id" = String, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated", body = ApiResponse<ProjectDto>),
        (status = 400, description = "Malformed id or title", body = ErrorResponse),
        (status = 401, description = "No valid session, or not the owner", body = ErrorResponse),
        (status = 404, description = "Project or owning profile not found", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Projects"
)]
pub async fn update_project(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<UpdateProjectRequest>,
) -> HttpResult<Json<ApiResponse<ProjectDto>>> {
    state
        .services
        .project_commands
        .update_project(
            &user,
            UpdateProjectCommand {
                id,
                title: payload.title,
                description: payload.description,
                status: payload.status,
                github_url: payload.github_url,
                demo_url: payload.demo_url,
                tech_stack: tech_stack(payload.tech_stack),
                lessons_learned: payload.lessons_learned,
                thumbnail_url: payload.thumbnail_url,
            },
        )
        .await
        .into_http()
        .map(|project| Json(ApiResponse::ok(project)))
}

#[utoipa::path(
    post,
    path = "/api/projects/upload-thumbnail",
    request_body(content = ThumbnailUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Thumbnail stored", body = ApiResponse<ThumbnailDto>),
        (status = 400, description = "No file, not an image, or larger than 10MB", body = ErrorResponse),
        (status = 401, description = "No valid session, or not the project owner", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Projects"
)]
pub async fn upload_thumbnail(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    multipart: Multipart,
) -> HttpResult<Json<ApiResponse<ThumbnailDto>>> {
    let mut form = MultipartForm::read(multipart).await?;

    state
        .services
        .project_commands
        .upload_thumbnail(
            &user,
            UploadThumbnailCommand {
                file: form.take_file("thumbnail"),
                project_id: form.take_field("projectId"),
            },
        )
        .await
        .into_http()
        .map(|thumbnail| Json(ApiResponse::ok(thumbnail)))
}
