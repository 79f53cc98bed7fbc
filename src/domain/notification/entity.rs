use crate::domain::comment::CommentId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

pub const COMMENT_NOTIFICATION: &str = "comment";

/// Name shown when the commenting profile has no full name.
pub const FALLBACK_ACTOR_NAME: &str = "Some builder";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(pub i64);

impl From<NotificationId> for i64 {
    fn from(value: NotificationId) -> Self {
        value.0
    }
}

/// What the notification is about, resolved from the related comment.
#[derive(Debug, Clone, Default)]
pub struct NotificationContext {
    pub actor_name: Option<String>,
    pub actor_avatar_url: Option<String>,
    pub project_title: Option<String>,
    pub project_slug: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: NotificationId,
    pub user_id: UserId,
    pub comment_id: Option<CommentId>,
    pub kind: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
    pub context: NotificationContext,
}

impl Notification {
    pub fn actor_name(&self) -> &str {
        self.context
            .actor_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_ACTOR_NAME)
    }
}

#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: UserId,
    pub comment_id: CommentId,
    pub kind: &'static str,
}

impl NewNotification {
    pub const fn for_comment(user_id: UserId, comment_id: CommentId) -> Self {
        Self {
            user_id,
            comment_id,
            kind: COMMENT_NOTIFICATION,
        }
    }
}
