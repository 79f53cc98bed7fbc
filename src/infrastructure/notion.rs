//! Notion adapter behind the `WorkspaceDirectory` port.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};
use url::Url;

use super::supabase::client::{RemoteError, send_empty};
use crate::application::{
    ApplicationResult,
    ports::workspace::{JoinApplication, WorkspaceDirectory},
};

pub const NOTION_API_URL: &str = "https://api.notion.com/";
const NOTION_VERSION: &str = "2022-06-28";

pub struct NotionWorkspace {
    http: Client,
    api_url: Url,
    token: String,
    database_id: String,
}

impl NotionWorkspace {
    pub fn new(
        token: impl Into<String>,
        database_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_url: Url::parse(NOTION_API_URL)?,
            token: token.into(),
            database_id: database_id.into(),
        })
    }
}

fn text(content: &str) -> Value {
    json!([{ "text": { "content": content } }])
}

/// Page body for one join application in the applications database.
fn page_body(database_id: &str, application: &JoinApplication) -> Value {
    json!({
        "parent": { "database_id": database_id },
        "properties": {
            "Name": { "title": text(&application.name) },
            "Email": { "email": application.email },
            "Reason": { "rich_text": text(&application.reason) },
            "Username": { "rich_text": text(&application.username) },
        }
    })
}

#[async_trait]
impl WorkspaceDirectory for NotionWorkspace {
    async fn record_application(&self, application: &JoinApplication) -> ApplicationResult<()> {
        let url = self.api_url.join("v1/pages").map_err(RemoteError::from)?;
        let request = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&page_body(&self.database_id, application));

        send_empty(request).await?;
        tracing::info!(username = %application.username, "join application recorded");
        Ok(())
    }
}
