// tests/support/helpers.rs
use std::sync::Arc;

use axum::{
    Router,
    body::{self, Body},
    http::{HeaderMap, Method, Request, StatusCode, header},
    response::Response,
};
use builders_api::application::services::{
    ACCESS_TOKEN_COOKIE, ApplicationServices, REFRESH_TOKEN_COOKIE,
};
use builders_api::infrastructure::util::DefaultSlugGenerator;
use builders_api::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;

use super::mocks::{
    BROKEN_ACCESS, CapturingStorage, CapturingWorkspace, FixedClock, InMemoryComments,
    InMemoryNotifications, InMemoryProfiles, InMemoryProjects, RecordingIdentity, VALID_ACCESS,
    VALID_REFRESH,
};

pub const SITE_ORIGIN: &str = "http://localhost:1234";
pub const REDIRECT_URL: &str = "http://localhost:1234/api/auth/callback";

/// ルーターと、検証用に共有されたモック群
pub struct TestApp {
    pub router: Router,
    pub identity: Arc<RecordingIdentity>,
    pub workspace: Arc<CapturingWorkspace>,
    pub storage: Arc<CapturingStorage>,
    pub profiles: Arc<InMemoryProfiles>,
    pub projects: Arc<InMemoryProjects>,
    pub comments: Arc<InMemoryComments>,
    pub notifications: Arc<InMemoryNotifications>,
}

#[derive(Default)]
pub struct TestAppBuilder {
    identity: Option<RecordingIdentity>,
    workspace: Option<CapturingWorkspace>,
    profiles: Option<InMemoryProfiles>,
    projects: Option<InMemoryProjects>,
    notifications: Option<InMemoryNotifications>,
}

impl TestAppBuilder {
    pub fn identity(mut self, identity: RecordingIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    pub fn workspace(mut self, workspace: CapturingWorkspace) -> Self {
        self.workspace = Some(workspace);
        self
    }

    pub fn profiles(mut self, profiles: InMemoryProfiles) -> Self {
        self.profiles = Some(profiles);
        self
    }

    pub fn projects(mut self, projects: InMemoryProjects) -> Self {
        self.projects = Some(projects);
        self
    }

    pub fn notifications(mut self, notifications: InMemoryNotifications) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub fn build(self) -> TestApp {
        let identity = Arc::new(self.identity.unwrap_or_default());
        let workspace = Arc::new(self.workspace.unwrap_or_default());
        let storage = Arc::new(CapturingStorage::default());
        let profiles = Arc::new(self.profiles.unwrap_or_default());
        let projects = Arc::new(self.projects.unwrap_or_default());
        let comments = Arc::new(InMemoryComments::default());
        let notifications = Arc::new(self.notifications.unwrap_or_default());

        let services = Arc::new(ApplicationServices::new(
            identity.clone(),
            workspace.clone(),
            storage.clone(),
            profiles.clone(),
            projects.clone(),
            comments.clone(),
            notifications.clone(),
            Arc::new(FixedClock),
            Arc::new(DefaultSlugGenerator),
            REDIRECT_URL,
        ));

        let router = build_router(HttpState { services }, &[SITE_ORIGIN.to_string()]);

        TestApp {
            router,
            identity,
            workspace,
            storage,
            profiles,
            projects,
            comments,
            notifications,
        }
    }
}

pub fn test_app() -> TestApp {
    TestAppBuilder::default().build()
}

/// 有効なセッションクッキー
pub fn session_cookie() -> String {
    format!("{ACCESS_TOKEN_COOKIE}={VALID_ACCESS}; {REFRESH_TOKEN_COOKIE}={VALID_REFRESH}")
}

/// 認証サービスが認識しないセッションクッキー
pub fn unknown_session_cookie() -> String {
    format!("{ACCESS_TOKEN_COOKIE}=stale-access; {REFRESH_TOKEN_COOKIE}=stale-refresh")
}

/// 認証サービスへの問い合わせ自体が失敗するセッションクッキー
pub fn broken_session_cookie() -> String {
    format!("{ACCESS_TOKEN_COOKIE}={BROKEN_ACCESS}; {REFRESH_TOKEN_COOKIE}={VALID_REFRESH}")
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, cookie, None, Body::empty())
}

pub fn json_request(method: Method, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
    request(
        method,
        uri,
        cookie,
        Some("application/json"),
        Body::from(body.to_string()),
    )
}

pub fn form_request(uri: &str, cookie: Option<&str>, pairs: &[(&str, &str)]) -> Request<Body> {
    let encoded = serde_urlencoded::to_string(pairs).unwrap();
    request(
        Method::POST,
        uri,
        cookie,
        Some("application/x-www-form-urlencoded"),
        Body::from(encoded),
    )
}

pub fn request(
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    content_type: Option<&str>,
    body: Body,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    builder.body(body).unwrap()
}

/// multipart/form-data 本文を組み立てる
pub struct MultipartBody {
    boundary: &'static str,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "builders-test-boundary",
            body: Vec::new(),
        }
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n",
                self.boundary
            )
            .as_bytes(),
        );
        self
    }

    pub fn into_request(mut self, uri: &str, cookie: Option<&str>) -> Request<Body> {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        let content_type = format!("multipart/form-data; boundary={}", self.boundary);
        request(
            Method::POST,
            uri,
            cookie,
            Some(&content_type),
            Body::from(self.body),
        )
    }
}

pub async fn to_json(resp: Response) -> (StatusCode, HeaderMap, Value) {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected valid json body")
    };
    (parts.status, parts.headers, json)
}

/// ErrorResponse 形式 (`success: false`, `error`) のレスポンスを検証する
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");

    let (_, _, json) = to_json(resp).await;
    assert_eq!(json["success"], Value::Bool(false));
    assert_eq!(
        json["error"].as_str(),
        Some(expected_error),
        "unexpected error body: {json}"
    );
    json
}

pub fn location(resp: &Response) -> String {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

pub fn set_cookies(resp: &Response) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect()
}
