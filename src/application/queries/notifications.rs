use std::sync::Arc;

use crate::{
    application::{
        dto::{AuthenticatedUser, NotificationListDto},
        error::ApplicationResult,
    },
    domain::notification::NotificationRepository,
};

pub const RECENT_NOTIFICATION_LIMIT: u32 = 20;

pub struct NotificationQueryService {
    notifications: Arc<dyn NotificationRepository>,
}

impl NotificationQueryService {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn recent_for(&self, actor: &AuthenticatedUser) -> ApplicationResult<NotificationListDto> {
        let notifications = self
            .notifications
            .list_recent(actor.id, RECENT_NOTIFICATION_LIMIT)
            .await?;

        Ok(NotificationListDto {
            notifications: notifications.into_iter().map(Into::into).collect(),
        })
    }
}
