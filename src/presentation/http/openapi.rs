// src/presentation/http/openapi.rs
use crate::application::services::ACCESS_TOKEN_COOKIE;
use axum::{Router, response::Redirect, routing::get};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::auth::check,
        crate::presentation::http::controllers::auth::check_verification,
        crate::presentation::http::controllers::auth::confirm_session,
        crate::presentation::http::controllers::auth::confirm_email,
        crate::presentation::http::controllers::auth::sign_in,
        crate::presentation::http::controllers::auth::sign_out,
        crate::presentation::http::controllers::auth::join,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::edit_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::notifications::list_notifications,
        crate::presentation::http::controllers::notifications::mark_read,
        crate::presentation::http::controllers::profiles::update_profile,
        crate::presentation::http::controllers::profiles::claim_username,
        crate::presentation::http::controllers::profiles::upload_avatar,
        crate::presentation::http::controllers::projects::update_project,
        crate::presentation::http::controllers::projects::upload_thumbnail,
        super::routes::health
    ),
    components(
        schemas(
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::response::SuccessResponse,
            crate::presentation::http::response::VerificationResponse,
            crate::presentation::http::response::StatusResponse,
            crate::application::dto::SessionUserDto,
            crate::application::dto::CommentDto,
            crate::application::dto::CommentAuthorDto,
            crate::application::dto::NotificationDto,
            crate::application::dto::ProjectDto
        )
    ),
    tags(
        (name = "Auth", description = "Sessions, sign-in and joining the community"),
        (name = "Comments", description = "Project comments"),
        (name = "Notifications", description = "Comment notifications of the caller"),
        (name = "Profiles", description = "Profile editing, usernames and avatars"),
        (name = "Projects", description = "Project editing and thumbnails"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&SessionCookieScheme),
    info(
        title = "Builders API",
        description = "Backend of the builders community site",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Protected endpoints authenticate with the session cookies.
struct SessionCookieScheme;

impl Modify for SessionCookieScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "sessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                ACCESS_TOKEN_COOKIE,
                "Access token cookie; `sb-refresh-token` must be sent alongside it",
            ))),
        );
    }
}

/// Swagger UI at `/docs`, Redoc at `/redoc` and the raw document at
/// `/openapi.json`.
pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
