use crate::application::ApplicationResult;
use async_trait::async_trait;

/// A validated request to join the community.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinApplication {
    pub name: String,
    pub email: String,
    pub reason: String,
    pub username: String,
}

/// External workspace where join applications are tracked.
#[async_trait]
pub trait WorkspaceDirectory: Send + Sync {
    async fn record_application(&self, application: &JoinApplication) -> ApplicationResult<()>;
}
