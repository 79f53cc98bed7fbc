use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use super::{execute, fetch};
use crate::domain::comment::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::notification::{
    NewNotification, Notification, NotificationContext, NotificationId, NotificationRepository,
};
use crate::domain::user::UserId;
use crate::infrastructure::supabase::{
    client::SupabaseClient,
    postgrest::{Query, table_request},
};

const NOTIFICATIONS: &str = "notifications";
const WITH_CONTEXT: &str = "*,
    comment:comments (
        id,
        product:products (title, slug),
        profile:profiles (full_name, avatar_url),
        created_at
    )";

pub struct SupabaseNotificationRepository {
    client: Arc<SupabaseClient>,
}

impl SupabaseNotificationRepository {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ProductRef {
    title: Option<String>,
    slug: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ActorRef {
    full_name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CommentRef {
    #[serde(default)]
    product: Option<ProductRef>,
    #[serde(default)]
    profile: Option<ActorRef>,
}

#[derive(Debug, Deserialize)]
struct NotificationRow {
    id: i64,
    user_id: Uuid,
    #[serde(default)]
    comment_id: Option<i64>,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    is_read: bool,
    created_at: DateTime<Utc>,
    #[serde(default)]
    comment: Option<CommentRef>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        let (product, actor) = row
            .comment
            .map(|c| (c.product.unwrap_or_default(), c.profile.unwrap_or_default()))
            .unwrap_or_default();

        Self {
            id: NotificationId(row.id),
            user_id: UserId(row.user_id),
            comment_id: row.comment_id.map(CommentId),
            kind: row.kind,
            is_read: row.is_read,
            created_at: row.created_at,
            context: NotificationContext {
                actor_name: actor.full_name,
                actor_avatar_url: actor.avatar_url,
                project_title: product.title,
                project_slug: product.slug,
            },
        }
    }
}

#[async_trait]
impl NotificationRepository for SupabaseNotificationRepository {
    async fn insert(&self, notification: NewNotification) -> DomainResult<()> {
        let body = json!({
            "comment_id": i64::from(notification.comment_id),
            "user_id": notification.user_id,
            "type": notification.kind,
        });
        let request = table_request(&self.client, Method::POST, NOTIFICATIONS, &Query::new())
            .map(|r| r.json(&body));
        execute(request).await
    }

    async fn list_recent(&self, user_id: UserId, limit: u32) -> DomainResult<Vec<Notification>> {
        let query = Query::new()
            .select(WITH_CONTEXT)
            .eq("user_id", user_id)
            .order("created_at", false)
            .limit(limit);
        let rows: Vec<NotificationRow> =
            fetch(table_request(&self.client, Method::GET, NOTIFICATIONS, &query)).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn mark_all_read(&self, user_id: UserId) -> DomainResult<()> {
        let query = Query::new().eq("user_id", user_id).eq("is_read", false);
        let request = table_request(&self.client, Method::PATCH, NOTIFICATIONS, &query)
            .map(|r| r.json(&json!({ "is_read": true })));
        execute(request).await
    }
}
