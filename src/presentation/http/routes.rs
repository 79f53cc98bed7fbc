// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{auth, comments, notifications, profiles, projects},
    openapi,
    response::{SIGNIN_PAGE, StatusResponse, moved_permanently},
};
use axum::{
    Extension, Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, header},
    response::Response,
    routing::{get, post, put},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Largest accepted request body: the 10MB thumbnail limit plus multipart
/// framing.
pub const MAX_BODY_BYTES: usize = 11 * 1024 * 1024;

const LEGACY_PAGES: [&str; 4] = ["/login", "/register", "/forgot-password", "/forgot"];

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    let mut router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/auth/check", get(auth::check))
        .route("/api/auth/check-verification", post(auth::check_verification))
        .route(
            "/api/auth/confirm",
            get(auth::confirm_email).post(auth::confirm_session),
        )
        .route("/api/auth/signin", post(auth::sign_in))
        .route("/api/auth/signout", post(auth::sign_out))
        .route("/api/join", post(auth::join))
        .route(
            "/api/comments",
            get(comments::list_comments)
                .post(comments::create_comment)
                .patch(comments::edit_comment)
                .delete(comments::delete_comment),
        )
        .route("/api/notifications", get(notifications::list_notifications))
        .route("/api/notifications/mark-read", post(notifications::mark_read))
        .route("/api/profile", post(profiles::update_profile))
        .route("/api/profile/claim", post(profiles::claim_username))
        .route("/api/profile/upload-avatar", post(profiles::upload_avatar))
        .route("/api/projects/upload-thumbnail", post(projects::upload_thumbnail))
        .route("/api/projects/{id}", put(projects::update_project));

    for page in LEGACY_PAGES {
        router = router.route(page, get(to_signin));
    }

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

/// Credentialed CORS for the configured site origins. A wildcard cannot be
/// combined with credentials, so `*` is skipped like any invalid origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::COOKIE])
        .max_age(Duration::from_secs(3600))
}

async fn to_signin() -> Response {
    moved_permanently(SIGNIN_PAGE)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
