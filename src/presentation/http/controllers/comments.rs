// src/presentation/http/controllers/comments.rs
use super::{RawId, raw_id};
use crate::application::{
    commands::{CreateCommentCommand, DeleteCommentCommand, EditCommentCommand},
    dto::CommentDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, JsonBody, QueryParams};
use crate::presentation::http::response::{ApiResponse, SuccessResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsParams {
    pub product_id: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentRequest {
    #[schema(value_type = Option<i64>)]
    pub product_id: Option<RawId>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EditCommentRequest {
    #[schema(value_type = Option<i64>)]
    pub comment_id: Option<RawId>,
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCommentParams {
    pub comment_id: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/comments",
    params(ListCommentsParams),
    responses(
        (status = 200, description = "Comments on the project, newest first", body = ApiResponse<Vec<CommentDto>>),
        (status = 400, description = "Missing or malformed product id", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    QueryParams(params): QueryParams<ListCommentsParams>,
) -> HttpResult<Json<ApiResponse<Vec<CommentDto>>>> {
    state
        .services
        .comment_queries
        .list_for_project(params.product_id.as_deref())
        .await
        .into_http()
        .map(|comments| Json(ApiResponse::ok(comments)))
}

#[utoipa::path(
    post,
    path = "/api/comments",
    request_body = CreateCommentRequest,
    responses(
        (status = 200, description = "Comment created", body = ApiResponse<CommentDto>),
        (status = 400, description = "Missing product id or content", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<CreateCommentRequest>,
) -> HttpResult<Json<ApiResponse<CommentDto>>> {
    state
        .services
        .comment_commands
        .create_comment(
            &user,
            CreateCommentCommand {
                product_id: raw_id(payload.product_id),
                content: payload.content,
            },
        )
        .await
        .into_http()
        .map(|comment| Json(ApiResponse::ok(comment)))
}

#[utoipa::path(
    patch,
    path = "/api/comments",
    request_body = EditCommentRequest,
    responses(
        (status = 200, description = "Comment updated", body = ApiResponse<CommentDto>),
        (status = 400, description = "Missing comment id or content", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse),
        (status = 404, description = "No such comment owned by the caller", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Comments"
)]
pub async fn edit_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    JsonBody(payload): JsonBody<EditCommentRequest>,
) -> HttpResult<Json<ApiResponse<CommentDto>>> {
    state
        .services
        .comment_commands
        .edit_comment(
            &user,
            EditCommentCommand {
                comment_id: raw_id(payload.comment_id),
                content: payload.content,
            },
        )
        .await
        .into_http()
        .map(|comment| Json(ApiResponse::ok(comment)))
}

#[utoipa::path(
    delete,
    path = "/api/comments",
    params(DeleteCommentParams),
    responses(
        (status = 200, description = "Comment deleted if the caller owned it", body = SuccessResponse),
        (status = 400, description = "Missing comment id", body = ErrorResponse),
        (status = 401, description = "No valid session", body = ErrorResponse)
    ),
    security(("sessionCookie" = [])),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    QueryParams(params): QueryParams<DeleteCommentParams>,
) -> HttpResult<Json<SuccessResponse>> {
    state
        .services
        .comment_commands
        .delete_comment(
            &user,
            DeleteCommentCommand {
                comment_id: params.comment_id,
            },
        )
        .await
        .into_http()?;
    Ok(Json(SuccessResponse::ok()))
}
