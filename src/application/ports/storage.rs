use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;

pub const AVATAR_BUCKET: &str = "avatars";
pub const THUMBNAIL_BUCKET: &str = "thumbnails";

#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Store `data` at `path`, replacing any existing object.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        content_type: &str,
        data: Bytes,
    ) -> ApplicationResult<()>;

    async fn remove(&self, bucket: &str, paths: &[String]) -> ApplicationResult<()>;

    fn public_url(&self, bucket: &str, path: &str) -> String;
}
