use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Method, header::CONTENT_TYPE};
use serde_json::json;

use url::Url;

use super::client::{ApiKey, RemoteError, SupabaseClient, send_empty};
use crate::application::{ApplicationResult, ports::storage::ObjectStorage};

/// Supabase Storage buckets, accessed with the service role key.
pub struct SupabaseStorage {
    client: Arc<SupabaseClient>,
}

impl SupabaseStorage {
    pub fn new(client: Arc<SupabaseClient>) -> Self {
        Self { client }
    }

    /// `storage/v1/object/<bucket>/<path...>`; `path` is split on `/` and
    /// every piece is encoded as a single segment.
    fn object_url(&self, bucket: &str, path: &str) -> Result<Url, RemoteError> {
        self.client.segment_endpoint(
            ["storage", "v1", "object", bucket]
                .into_iter()
                .chain(path.split('/').filter(|segment| !segment.is_empty())),
        )
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        data: Bytes,
    ) -> ApplicationResult<()> {
        let url = self.object_url(bucket, path)?;
        let size = data.len();
        let request = self
            .client
            .request(Method::POST, url, ApiKey::ServiceRole)
            .header(CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(data);

        send_empty(request).await?;
        tracing::info!(bucket, path, size, "object uploaded");
        Ok(())
    }

    async fn remove(&self, bucket: &str, paths: &[String]) -> ApplicationResult<()> {
        let url = self.object_url(bucket, "")?;
        let request = self
            .client
            .request(Method::DELETE, url, ApiKey::ServiceRole)
            .json(&json!({ "prefixes": paths }));
        send_empty(request).await?;
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> String {
        format!(
            "{}storage/v1/object/public/{bucket}/{path}",
            self.client.base_url()
        )
    }
}
