use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{
    RecordingIdentity, TEST_EMAIL, TEST_USER_ID, TestAppBuilder, assert_error_response,
    broken_session_cookie, get, json_request, session_cookie, test_app, to_json,
    unknown_session_cookie,
};

/// クッキーが無い場合は認証サービスを呼ばずに 401 を返すことを確認する
#[tokio::test]
async fn missing_cookies_are_rejected_without_remote_call() {
    let app = test_app();

    let resp = app
        .router
        .clone()
        .oneshot(get("/api/auth/check", None))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    let only_access = "sb-access-token=valid-access";
    let resp = app
        .router
        .clone()
        .oneshot(get("/api/auth/check", Some(only_access)))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    assert_eq!(app.identity.exchange_count(), 0);
}

/// 認識されないセッションは 401 で、本文に利用者情報を含まない
#[tokio::test]
async fn unknown_session_is_unauthorized_and_leaks_nothing() {
    let app = test_app();
    let cookie = unknown_session_cookie();

    let resp = app
        .router
        .clone()
        .oneshot(get("/api/auth/check", Some(&cookie)))
        .await
        .unwrap();
    let body = assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;

    assert!(body.get("data").is_none());
    assert!(!body.to_string().contains(TEST_EMAIL));
    assert_eq!(app.identity.exchange_count(), 1);
}

/// 認証サービスの障害も 401 として扱う
#[tokio::test]
async fn failing_auth_service_is_unauthorized() {
    let app = test_app();
    let cookie = broken_session_cookie();

    let resp = app
        .router
        .oneshot(get("/api/notifications", Some(&cookie)))
        .await
        .unwrap();
    assert_error_response(resp, StatusCode::UNAUTHORIZED, "Unauthorized").await;
}

#[tokio::test]
async fn valid_session_returns_current_user() {
    let app = test_app();
    let cookie = session_cookie();

    let resp = app
        .router
        .oneshot(get("/api/auth/check", Some(&cookie)))
        .await
        .unwrap();
    let (status, _, json) = to_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["user"]["id"], TEST_USER_ID.to_string());
    assert_eq!(json["data"]["user"]["email"], TEST_EMAIL);
    assert_eq!(app.identity.exchange_count(), 1);
}

/// 保護されたエンドポイントはすべてセッションを要求する
#[tokio::test]
async fn protected_endpoints_require_a_session() {
    let app = test_app();

    let requests = vec![
        get("/api/notifications", None),
        json_request(Method::POST, "/api/notifications/mark-read", None, json!({})),
        json_request(
            Method::POST,
            "/api/comments",
            None,
            json!({ "productId": 1, "content": "hi" }),
        ),
        json_request(
            Method::PATCH,
            "/api/comments",
            None,
            json!({ "commentId": 1, "content": "hi" }),
        ),
        support::request(
            Method::DELETE,
            "/api/comments?commentId=1",
            None,
            None,
            axum::body::Body::empty(),
        ),
        json_request(Method::POST, "/api/profile", None, json!({ "username": "ada" })),
        json_request(Method::PUT, "/api/projects/1", None, json!({ "title": "x" })),
    ];

    for req in requests {
        let target = format!("{} {}", req.method(), req.uri());
        let resp = app.router.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{target}");
    }

    assert_eq!(app.identity.exchange_count(), 0);
}

/// セッションは毎回認証サービスで確認され、キャッシュされない
#[tokio::test]
async fn every_request_exchanges_the_session() {
    let app = TestAppBuilder::default()
        .identity(RecordingIdentity::default())
        .build();
    let cookie = session_cookie();

    for _ in 0..3 {
        let resp = app
            .router
            .clone()
            .oneshot(get("/api/auth/check", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }
    assert_eq!(app.identity.exchange_count(), 3);
}
