use super::entity::{NewNotification, Notification};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn insert(&self, notification: NewNotification) -> DomainResult<()>;

    /// Most recent notifications of `user_id`, newest first.
    async fn list_recent(&self, user_id: UserId, limit: u32) -> DomainResult<Vec<Notification>>;

    async fn mark_all_read(&self, user_id: UserId) -> DomainResult<()>;
}
