use std::sync::Arc;

use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationResult},
    domain::notification::NotificationRepository,
};

pub struct NotificationCommandService {
    notifications: Arc<dyn NotificationRepository>,
}

impl NotificationCommandService {
    pub fn new(notifications: Arc<dyn NotificationRepository>) -> Self {
        Self { notifications }
    }

    pub async fn mark_all_read(&self, actor: &AuthenticatedUser) -> ApplicationResult<()> {
        self.notifications.mark_all_read(actor.id).await?;
        Ok(())
    }
}
