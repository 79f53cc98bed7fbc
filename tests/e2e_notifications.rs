use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use support::{
    InMemoryNotifications, OTHER_USER_ID, TEST_USER_ID, TestAppBuilder, comment_notification, get,
    json_request, session_cookie, to_json,
};

/// 自分の通知のみ新しい順で返し、行為者名が無ければ既定名を使う
#[tokio::test]
async fn lists_own_notifications_newest_first() {
    let app = TestAppBuilder::default()
        .notifications(InMemoryNotifications::with(vec![
            comment_notification(1, *TEST_USER_ID, true),
            comment_notification(2, *TEST_USER_ID, false),
            comment_notification(3, *OTHER_USER_ID, false),
            comment_notification(4, *TEST_USER_ID, false),
        ]))
        .build();
    let cookie = session_cookie();

    let resp = app
        .router
        .oneshot(get("/api/notifications", Some(&cookie)))
        .await
        .unwrap();
    let (status, _, json) = to_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    let items = json["data"]["notifications"].as_array().unwrap();
    let ids: Vec<i64> = items.iter().map(|n| n["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![4, 2, 1]);

    assert_eq!(items[0]["type"], "comment");
    assert_eq!(items[0]["actor_name"], "Some builder");
    assert_eq!(items[0]["project_slug"], "test-project");
    assert_eq!(items[2]["is_read"], true);
}

#[tokio::test]
async fn list_is_capped_at_twenty() {
    let seeded = (1..=25)
        .map(|id| comment_notification(id, *TEST_USER_ID, false))
        .collect();
    let app = TestAppBuilder::default()
        .notifications(InMemoryNotifications::with(seeded))
        .build();
    let cookie = session_cookie();

    let resp = app
        .router
        .oneshot(get("/api/notifications", Some(&cookie)))
        .await
        .unwrap();
    let (_, _, json) = to_json(resp).await;

    let items = json["data"]["notifications"].as_array().unwrap();
    assert_eq!(items.len(), 20);
    assert_eq!(items[0]["id"], 25);
}

/// 既読化は呼び出した本人の通知だけに作用する
#[tokio::test]
async fn mark_read_only_touches_own_notifications() {
    let app = TestAppBuilder::default()
        .notifications(InMemoryNotifications::with(vec![
            comment_notification(1, *TEST_USER_ID, false),
            comment_notification(2, *TEST_USER_ID, false),
            comment_notification(3, *OTHER_USER_ID, false),
        ]))
        .build();
    let cookie = session_cookie();

    let resp = app
        .router
        .oneshot(json_request(
            Method::POST,
            "/api/notifications/mark-read",
            Some(&cookie),
            json!({}),
        ))
        .await
        .unwrap();
    let (status, _, json) = to_json(resp).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "success": true }));

    for notification in app.notifications.all() {
        let expected = notification.user_id.0 == *TEST_USER_ID;
        assert_eq!(notification.is_read, expected, "{:?}", notification.id);
    }
}
