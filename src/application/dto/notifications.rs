use crate::domain::notification::Notification;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationDto {
    pub id: i64,
    pub user_id: Uuid,
    pub comment_id: Option<i64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub actor_name: String,
    pub actor_avatar_url: Option<String>,
    pub project_title: Option<String>,
    pub project_slug: Option<String>,
}

impl From<Notification> for NotificationDto {
    fn from(notification: Notification) -> Self {
        let actor_name = notification.actor_name().to_string();
        Self {
            id: notification.id.into(),
            user_id: notification.user_id.into(),
            comment_id: notification.comment_id.map(Into::into),
            kind: notification.kind,
            is_read: notification.is_read,
            created_at: notification.created_at,
            actor_name,
            actor_avatar_url: notification.context.actor_avatar_url,
            project_title: notification.context.project_title,
            project_slug: notification.context.project_slug,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotificationListDto {
    pub notifications: Vec<NotificationDto>,
}
