// tests/support/mocks/workspace.rs
use std::sync::Mutex;

use async_trait::async_trait;
use builders_api::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::workspace::{JoinApplication, WorkspaceDirectory},
};

#[derive(Default)]
pub struct CapturingWorkspace {
    pub applications: Mutex<Vec<JoinApplication>>,
    /// true の場合は常に失敗する
    pub fail: bool,
}

impl CapturingWorkspace {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn recorded(&self) -> Vec<JoinApplication> {
        self.applications.lock().unwrap().clone()
    }
}

#[async_trait]
impl WorkspaceDirectory for CapturingWorkspace {
    async fn record_application(&self, application: &JoinApplication) -> ApplicationResult<()> {
        if self.fail {
            return Err(ApplicationError::remote("validation_error: database not shared"));
        }
        self.applications.lock().unwrap().push(application.clone());
        Ok(())
    }
}
